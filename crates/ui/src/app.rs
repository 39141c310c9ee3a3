//! Main Application Component for the WhatsApp console
//!
//! This module contains the root Dioxus component. It provides the
//! application context and the main layout: header, sidebar, content
//! area, status bar, dialog overlay and toast stack.

use dioxus::prelude::*;
use waconsole_core::Language;

use crate::components::ToastStack;
use crate::components::dialogs::{
    ConfirmDeleteDialog, CustomerDialog, CustomerDialogMode, SubscriptionDialog,
    SubscriptionDialogMode, ViewCustomerDialog,
};
use crate::i18n::{Text, t};
use crate::pages::{CustomersPage, DashboardPage, SettingsPage, SubscriptionsPage};
use crate::state::{AppContext, Bootstrap, Dialog, Page, StatusLevel, use_app};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    let boot = use_context::<Bootstrap>();
    let app = use_context_provider(move || AppContext::new(boot));

    use_effect(|| {
        tracing::info!("Console UI initialized");
    });

    let prefs = *app.preferences.read();
    let root_class = format!("app-container {}", theme_class(prefs.dark_mode));

    rsx! {
        div {
            class: "{root_class}",
            dir: prefs.language.dir(),
            lang: prefs.language.code(),

            // Top header
            Header {}

            // Main content area with sidebar
            div {
                class: "app-body",
                Sidebar {}
                MainContent {}
            }

            StatusBar {}

            DialogOverlay {}

            ToastStack {}
        }
    }
}

/// Root class for the selected theme
fn theme_class(dark_mode: bool) -> &'static str {
    if dark_mode { "theme-dark" } else { "theme-light" }
}

// ============================================================================
// Header Component
// ============================================================================

/// Top bar with title, theme toggle and language switcher
#[component]
fn Header() -> Element {
    let app = use_app();
    let prefs = *app.preferences.read();
    let lang = prefs.language;

    let theme_label = if prefs.dark_mode {
        t(lang, Text::LightMode)
    } else {
        t(lang, Text::DarkMode)
    };
    let theme_icon = if prefs.dark_mode { "☀️" } else { "🌙" };

    let languages: Vec<(&'static str, Language)> =
        Language::ALL.iter().map(|l| (l.code(), *l)).collect();

    let on_theme = {
        let app = app.clone();
        move |_| app.update_preferences(|p| p.dark_mode = !p.dark_mode)
    };

    rsx! {
        header {
            class: "app-header",

            div {
                class: "app-brand",
                span { class: "app-brand-icon", "💬" }
                span { class: "app-brand-title", {t(lang, Text::AppTitle)} }
            }

            div { class: "spacer" }

            HeaderButton {
                icon: theme_icon,
                label: theme_label,
                onclick: on_theme,
            }

            div {
                class: "language-switch",
                for (code, language) in languages {
                    LanguageButton { key: "{code}", language, current: lang }
                }
            }
        }
    }
}

/// Small header button
#[component]
fn HeaderButton(
    icon: &'static str,
    label: &'static str,
    #[props(default = false)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "header-button",
            disabled: disabled,
            title: "{label}",
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            span { "{icon}" }
            span { class: "header-button-label", "{label}" }
        }
    }
}

#[component]
fn LanguageButton(language: Language, current: Language) -> Element {
    let app = use_app();
    let class = if language == current {
        "lang-button active"
    } else {
        "lang-button"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                if language != current {
                    tracing::info!(language = language.code(), "Language changed");
                    app.update_preferences(|p| p.language = language);
                }
            },
            {language.native_name()}
        }
    }
}

// ============================================================================
// Sidebar Component
// ============================================================================

/// Left navigation
#[component]
fn Sidebar() -> Element {
    let app = use_app();
    let mut ui = app.ui;
    let state = ui.read();
    let collapsed = state.sidebar_collapsed;
    let current_page = state.active_page;
    drop(state);

    rsx! {
        aside {
            class: if collapsed { "sidebar collapsed" } else { "sidebar" },

            div {
                class: "sidebar-header",
                button {
                    class: "sidebar-toggle",
                    title: if collapsed { "Expand sidebar" } else { "Collapse sidebar" },
                    onclick: move |_| ui.write().toggle_sidebar(),
                    if collapsed { "☰" } else { "✕" }
                }
            }

            nav {
                class: "sidebar-nav",
                for (index, page) in Page::ALL.into_iter().enumerate() {
                    SidebarItem {
                        key: "{index}",
                        page,
                        current: current_page,
                        collapsed,
                    }
                }
            }
        }
    }
}

/// Sidebar navigation item
#[component]
fn SidebarItem(page: Page, current: Page, collapsed: bool) -> Element {
    let app = use_app();
    let mut ui = app.ui;
    let icon = page.icon();
    let name = page.display_name(app.language());
    let class = if page == current {
        "sidebar-item active"
    } else {
        "sidebar-item"
    };

    rsx! {
        button {
            class: "{class}",
            title: "{name}",
            onclick: move |_| ui.write().navigate(page),
            span { class: "sidebar-item-icon", "{icon}" }
            if !collapsed {
                span { class: "sidebar-item-label", "{name}" }
            }
        }
    }
}

// ============================================================================
// Main Content Component
// ============================================================================

#[component]
fn MainContent() -> Element {
    let app = use_app();
    let current_page = app.ui.read().active_page;

    rsx! {
        main {
            class: "main-content",

            match current_page {
                Page::Dashboard => rsx! { DashboardPage {} },
                Page::Customers => rsx! { CustomersPage {} },
                Page::Subscriptions => rsx! { SubscriptionsPage {} },
                Page::Settings => rsx! { SettingsPage {} },
            }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

#[component]
fn StatusBar() -> Element {
    let app = use_app();
    let status = app.ui.read().status_message.clone();
    let customer_count = app.customers.read().len();
    let subscription_count = app.subscriptions.read().len();
    let lang = app.language();

    let counts = format!(
        "{}: {}  {}: {}",
        t(lang, Text::Customers),
        customer_count,
        t(lang, Text::Subscriptions),
        subscription_count
    );

    rsx! {
        footer {
            class: "status-bar",

            if let Some(msg) = status {
                span {
                    class: match msg.level {
                        StatusLevel::Info => "status-info",
                        StatusLevel::Success => "status-success",
                        StatusLevel::Warning => "status-warning",
                        StatusLevel::Error => "status-error",
                    },
                    "{msg.text}"
                }
            } else {
                span { "Ready" }
            }

            div { class: "spacer" }

            span { "{counts}" }
        }
    }
}

// ============================================================================
// Dialog Overlay
// ============================================================================

#[component]
fn DialogOverlay() -> Element {
    let app = use_app();
    let dialog = app.ui.read().active_dialog.clone();

    let Some(dialog) = dialog else {
        return rsx! {};
    };

    let size_class = match &dialog {
        Dialog::ConfirmDelete(_) | Dialog::About => "dialog dialog-sm",
        _ => "dialog dialog-md",
    };

    let on_backdrop = {
        let app = app.clone();
        move |_| app.close_dialog()
    };

    rsx! {
        div {
            class: "dialog-overlay",

            // Backdrop
            div {
                class: "dialog-backdrop",
                onclick: on_backdrop,
            }

            // Dialog content
            div {
                class: "{size_class}",
                onclick: move |e| e.stop_propagation(),

                match dialog {
                    Dialog::AddCustomer => rsx! {
                        CustomerDialog { mode: CustomerDialogMode::Create }
                    },
                    Dialog::ViewCustomer(customer) => rsx! {
                        ViewCustomerDialog { customer }
                    },
                    Dialog::EditCustomer(customer) => rsx! {
                        CustomerDialog { mode: CustomerDialogMode::Edit(customer) }
                    },
                    Dialog::ConfirmDelete(target) => rsx! {
                        ConfirmDeleteDialog { target }
                    },
                    Dialog::AddSubscription => rsx! {
                        SubscriptionDialog { mode: SubscriptionDialogMode::Create }
                    },
                    Dialog::EditSubscription(id) => rsx! {
                        SubscriptionDialog { mode: SubscriptionDialogMode::Edit(id) }
                    },
                    Dialog::About => rsx! { AboutDialog {} },
                }
            }
        }
    }
}

#[component]
fn AboutDialog() -> Element {
    let app = use_app();
    let lang = app.language();
    let name = crate::NAME;
    let version = format!("Version {}", crate::VERSION);

    rsx! {
        div {
            class: "dialog-body about-dialog",

            p { class: "about-icon", "💬" }
            h2 { class: "dialog-title", "{name}" }
            p { class: "muted", "{version}" }
            p { class: "muted", "Customers and WhatsApp subscriptions administration" }

            button {
                class: "btn btn-secondary",
                onclick: move |_| app.close_dialog(),
                {t(lang, Text::Close)}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_class() {
        assert_eq!(theme_class(true), "theme-dark");
        assert_eq!(theme_class(false), "theme-light");
    }

    #[test]
    fn test_page_icon() {
        assert_eq!(Page::Customers.icon(), "👥");
        assert_eq!(Page::Subscriptions.icon(), "💬");
    }

    #[test]
    fn test_page_display_name() {
        assert_eq!(Page::Dashboard.display_name(Language::En), "Dashboard");
        assert_eq!(Page::Subscriptions.display_name(Language::Ar), "الاشتراكات");
    }
}
