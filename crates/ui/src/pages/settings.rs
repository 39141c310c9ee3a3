//! Settings Page Component
//!
//! Theme and language preferences, plus the connection the console was
//! started with. Preference changes are saved immediately.

use dioxus::prelude::*;
use waconsole_core::Language;

use crate::components::{Select, SelectOption, Toggle};
use crate::i18n::{Text, t};
use crate::state::{Dialog, use_app};

fn language_options() -> Vec<SelectOption> {
    Language::ALL
        .iter()
        .map(|l| SelectOption::new(l.code(), l.native_name()))
        .collect()
}

/// Settings page
#[component]
pub fn SettingsPage() -> Element {
    let app = use_app();
    let prefs = *app.preferences.read();
    let lang = prefs.language;

    let base_url = app.config.base_url().to_string();
    let timeout = format!("{} s", app.config.timeout_secs);
    let page_sizes = format!(
        "{} / {}",
        app.config.customer_page_size, app.config.subscription_page_size
    );

    let on_dark_mode = {
        let app = app.clone();
        move |enabled: bool| app.update_preferences(|p| p.dark_mode = enabled)
    };
    let on_language = {
        let app = app.clone();
        move |code: String| {
            if let Some(language) = Language::from_code(&code) {
                tracing::info!(language = language.code(), "Language changed");
                app.update_preferences(|p| p.language = language);
            }
        }
    };
    let on_about = {
        let app = app.clone();
        move |_| app.show_dialog(Dialog::About)
    };

    rsx! {
        div {
            class: "page settings-page",

            h1 { class: "page-title", {t(lang, Text::Settings)} }

            section {
                class: "card",
                h2 { class: "card-title", {t(lang, Text::Appearance)} }
                Toggle {
                    checked: prefs.dark_mode,
                    label: t(lang, Text::DarkMode).to_string(),
                    on_change: on_dark_mode,
                }
                Select {
                    label: t(lang, Text::Language).to_string(),
                    value: lang.code().to_string(),
                    options: language_options(),
                    on_change: on_language,
                }
            }

            section {
                class: "card",
                h2 { class: "card-title", {t(lang, Text::Connection)} }
                dl {
                    class: "detail-list",
                    div { class: "detail-row", dt { {t(lang, Text::ApiAddress)} } dd { class: "cell-mono", "{base_url}" } }
                    div { class: "detail-row", dt { {t(lang, Text::RequestTimeout)} } dd { "{timeout}" } }
                    div { class: "detail-row", dt { {t(lang, Text::ServerPageSizes)} } dd { "{page_sizes}" } }
                }
            }

            button {
                class: "btn btn-secondary",
                onclick: on_about,
                {t(lang, Text::About)}
            }
        }
    }
}
