//! # WhatsApp Console UI
//!
//! Dioxus Desktop UI for the customer and WhatsApp subscription console.
//!
//! ## Features
//!
//! - Customer list with server filter/sort, client search and paging
//! - Server-paged subscription list
//! - Modal create, view, edit and delete flows
//! - Light/dark theme and English/Arabic interface, saved between runs
//!

// ============================================================================
// Modules
// ============================================================================

pub mod actions;
pub mod app;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use waconsole_api;
pub use waconsole_core;

pub use app::App;
pub use pages::{CustomersPage, DashboardPage, SettingsPage, SubscriptionsPage};
pub use state::{
    AppContext, Bootstrap, DeleteTarget, Dialog, Page, StatusLevel, StatusMessage, UiState,
    use_app,
};

pub use components::{ClientPagerBar, Select, SelectOption, TextInput, ToastStack, Toggle};

use std::sync::Arc;

use waconsole_api::Services;
use waconsole_core::{ConsoleConfig, ConsoleResult, NoticeQueue, Preferences};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "WhatsApp Console";

/// Application display title
pub const TITLE: &str = "WhatsApp Console - Customers & Subscriptions";

/// CSS styles for the application, included at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the console desktop application
///
/// Builds the HTTP services from `config`, then starts the UI with the
/// saved `preferences`.
///
/// # Example
///
/// ```rust,ignore
/// fn main() -> anyhow::Result<()> {
///     let config = ConsoleConfig::load(None)?;
///     waconsole_ui::launch(config, Preferences::load())?;
///     Ok(())
/// }
/// ```
pub fn launch(config: ConsoleConfig, preferences: Preferences) -> ConsoleResult<()> {
    tracing::info!("Starting {} v{}", NAME, VERSION);
    tracing::debug!(?config, "Loaded configuration");

    let notices = NoticeQueue::new();
    let services = Services::new(&config, Arc::new(notices.clone()))?;

    let boot = Bootstrap {
        config,
        services,
        notices,
        preferences,
    };

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 820.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(boot)
        .launch(App);

    Ok(())
}

/// Get the embedded CSS styles
pub fn get_styles() -> &'static str {
    STYLES
}

// ============================================================================
// Tests
// ============================================================================
