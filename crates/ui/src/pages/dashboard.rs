//! Dashboard Page Component
//!
//! Landing page with a welcome heading and quick links to the lists.

use dioxus::prelude::*;

use crate::i18n::{Text, t};
use crate::state::{Page, use_app};

/// Landing page
#[component]
pub fn DashboardPage() -> Element {
    let app = use_app();
    let lang = app.language();

    rsx! {
        div {
            class: "page dashboard-page",

            div {
                class: "hero",
                div { class: "hero-icon", "💬" }
                h1 { class: "hero-title", {t(lang, Text::Welcome)} }
                p { class: "hero-subtitle", {t(lang, Text::WelcomeSubtitle)} }
            }

            div {
                class: "quick-links",
                QuickLink {
                    icon: Page::Customers.icon(),
                    title: t(lang, Text::ManageCustomers),
                    page: Page::Customers,
                }
                QuickLink {
                    icon: Page::Subscriptions.icon(),
                    title: t(lang, Text::ManageSubscriptions),
                    page: Page::Subscriptions,
                }
                QuickLink {
                    icon: Page::Settings.icon(),
                    title: t(lang, Text::Settings),
                    page: Page::Settings,
                }
            }
        }
    }
}

/// Quick link card
#[component]
fn QuickLink(icon: &'static str, title: &'static str, page: Page) -> Element {
    let app = use_app();

    rsx! {
        button {
            class: "quick-link",
            onclick: move |_| {
                let mut ui = app.ui;
                ui.write().navigate(page);
            },
            span { class: "quick-link-icon", "{icon}" }
            span { class: "quick-link-title", "{title}" }
        }
    }
}
