//! Application State Management for the WhatsApp console
//!
//! State lives in an `AppContext` provided at the root of the component
//! tree. It holds the UI state, persisted preferences, one `ListSync` per
//! resource with its server query, and the shared services.

use dioxus::prelude::*;
use waconsole_api::Services;
use waconsole_core::{
    ClientPager, ConsoleConfig, Customer, EntityId, Language, ListQuery, ListSync, NoticeQueue,
    Preferences, Subscription,
};

use crate::i18n::{Text, t};

// ============================================================================
// Page Navigation
// ============================================================================

/// Application pages/views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Landing page with quick links
    #[default]
    Dashboard,
    /// Customer list
    Customers,
    /// WhatsApp subscription list
    Subscriptions,
    /// Application settings
    Settings,
}

impl Page {
    /// Pages in sidebar order
    pub const ALL: [Page; 4] = [
        Page::Dashboard,
        Page::Customers,
        Page::Subscriptions,
        Page::Settings,
    ];

    /// Get the display name for this page
    pub fn display_name(&self, lang: Language) -> &'static str {
        match self {
            Page::Dashboard => t(lang, Text::Dashboard),
            Page::Customers => t(lang, Text::Customers),
            Page::Subscriptions => t(lang, Text::Subscriptions),
            Page::Settings => t(lang, Text::Settings),
        }
    }

    /// Get the icon emoji for this page (for UI display)
    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "🏠",
            Page::Customers => "👥",
            Page::Subscriptions => "💬",
            Page::Settings => "🔧",
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// General UI state (dialogs, panels, etc.)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UiState {
    /// Whether the sidebar is collapsed
    pub sidebar_collapsed: bool,
    /// Currently active page
    pub active_page: Page,
    /// Active dialog (if any)
    pub active_dialog: Option<Dialog>,
    /// Status bar message
    pub status_message: Option<StatusMessage>,
}

impl UiState {
    /// Create new UI state
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a page
    pub fn navigate(&mut self, page: Page) {
        self.active_page = page;
    }

    /// Show a dialog
    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.active_dialog = Some(dialog);
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = None;
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Toggle sidebar
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}

/// Dialog types
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// New customer form
    AddCustomer,
    /// Read-only customer details
    ViewCustomer(Customer),
    /// Edit form seeded from the displayed record
    EditCustomer(Customer),
    /// Delete confirmation dialog
    ConfirmDelete(DeleteTarget),
    /// New subscription form
    AddSubscription,
    /// Edit form; the record is loaded by id when the dialog opens
    EditSubscription(EntityId),
    /// About dialog
    About,
}

/// Target for delete confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteTarget {
    Customer { id: EntityId, name: String },
    Subscription { id: EntityId, label: String },
}

impl DeleteTarget {
    pub fn id(&self) -> &EntityId {
        match self {
            DeleteTarget::Customer { id, .. } | DeleteTarget::Subscription { id, .. } => id,
        }
    }

    /// Name shown in the confirmation
    pub fn display_name(&self) -> &str {
        match self {
            DeleteTarget::Customer { name, .. } => name,
            DeleteTarget::Subscription { label, .. } => label,
        }
    }
}

/// Status message for the status bar
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

/// Status message severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

// ============================================================================
// Application Context
// ============================================================================

/// Root application context, provided once by `App`
#[derive(Clone)]
pub struct AppContext {
    /// Navigation and dialogs
    pub ui: Signal<UiState>,
    /// Dark mode and language, saved on change
    pub preferences: Signal<Preferences>,
    /// Displayed customers
    pub customers: Signal<ListSync<Customer>>,
    /// Server-side customer list parameters
    pub customer_query: Signal<ListQuery>,
    /// Client-side search and paging over `customers`
    pub customer_pager: Signal<ClientPager>,
    /// Bumped to request a customer refetch
    pub customer_reload: Signal<u64>,
    /// Displayed subscriptions
    pub subscriptions: Signal<ListSync<Subscription>>,
    /// Server-side subscription list parameters
    pub subscription_query: Signal<ListQuery>,
    /// Bumped to request a subscription refetch
    pub subscription_reload: Signal<u64>,
    /// Backend services
    pub services: Services,
    /// Pending toasts
    pub notices: NoticeQueue,
    /// Settings the console was started with
    pub config: ConsoleConfig,
}

/// Startup values handed to the root component
#[derive(Clone)]
pub struct Bootstrap {
    pub config: ConsoleConfig,
    pub services: Services,
    pub notices: NoticeQueue,
    pub preferences: Preferences,
}

impl AppContext {
    /// Build the context inside a component scope
    pub fn new(boot: Bootstrap) -> Self {
        Self {
            ui: Signal::new(UiState::new()),
            preferences: Signal::new(boot.preferences),
            customers: Signal::new(ListSync::new()),
            customer_query: Signal::new(ListQuery::customers(boot.config.customer_page_size)),
            customer_pager: Signal::new(ClientPager::new()),
            customer_reload: Signal::new(0),
            subscriptions: Signal::new(ListSync::new()),
            subscription_query: Signal::new(ListQuery::subscriptions(
                boot.config.subscription_page_size,
            )),
            subscription_reload: Signal::new(0),
            services: boot.services,
            notices: boot.notices,
            config: boot.config,
        }
    }

    /// Current display language
    pub fn language(&self) -> Language {
        self.preferences.read().language
    }

    /// Ask the customer list to refetch
    pub fn reload_customers(&self) {
        let mut reload = self.customer_reload;
        reload += 1;
    }

    /// Ask the subscription list to refetch
    pub fn reload_subscriptions(&self) {
        let mut reload = self.subscription_reload;
        reload += 1;
    }

    /// Close whatever dialog is open
    pub fn close_dialog(&self) {
        let mut ui = self.ui;
        ui.write().close_dialog();
    }

    /// Open a dialog
    pub fn show_dialog(&self, dialog: Dialog) {
        let mut ui = self.ui;
        ui.write().show_dialog(dialog);
    }

    /// Apply a preferences change and persist it
    pub fn update_preferences(&self, change: impl FnOnce(&mut Preferences)) {
        let mut prefs = self.preferences;
        change(&mut prefs.write());

        let snapshot = *prefs.peek();
        if let Err(e) = snapshot.save() {
            tracing::error!("Failed to save preferences: {}", e);
            let mut ui = self.ui;
            ui.write()
                .set_status(format!("Failed to save preferences: {}", e), StatusLevel::Error);
        }
    }
}

/// Hook to access the application context
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_state() {
        let mut ui = UiState::new();
        assert_eq!(ui.active_page, Page::Dashboard);

        ui.navigate(Page::Customers);
        assert_eq!(ui.active_page, Page::Customers);

        ui.show_dialog(Dialog::AddCustomer);
        assert_eq!(ui.active_dialog, Some(Dialog::AddCustomer));

        ui.close_dialog();
        assert!(ui.active_dialog.is_none());
    }

    #[test]
    fn test_status_message() {
        let mut ui = UiState::new();
        ui.set_status("Saved", StatusLevel::Success);
        assert_eq!(ui.status_message.as_ref().map(|m| m.level), Some(StatusLevel::Success));
        ui.clear_status();
        assert!(ui.status_message.is_none());
    }

    #[test]
    fn test_sidebar_toggle() {
        let mut ui = UiState::new();
        ui.toggle_sidebar();
        assert!(ui.sidebar_collapsed);
        ui.toggle_sidebar();
        assert!(!ui.sidebar_collapsed);
    }

    #[test]
    fn test_delete_target() {
        let target = DeleteTarget::Customer {
            id: EntityId::new("7"),
            name: "Ada".to_string(),
        };
        assert_eq!(target.id().as_str(), "7");
        assert_eq!(target.display_name(), "Ada");
    }

    #[test]
    fn test_page_labels() {
        assert_eq!(Page::Customers.display_name(Language::En), "Customers");
        assert_eq!(Page::Dashboard.icon(), "🏠");
        assert_ne!(
            Page::Settings.display_name(Language::Ar),
            Page::Settings.display_name(Language::En)
        );
    }
}
