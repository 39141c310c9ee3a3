//! # UI Components
//!
//! Reusable Dioxus components for the console.
//!
//! - **Inputs**: Form input components (text, select, toggle)
//! - **Dialogs**: Modal dialogs for customer/subscription create, view, edit and delete
//! - **Pager**: Client-side page controls under the customer table
//! - **Toast**: Stack of transient notices fed by the services
//!
//! ## Component Hierarchy
//!
//! ```text
//! DialogOverlay
//! ├── CustomerDialog (create/edit)
//! ├── ViewCustomerDialog
//! ├── SubscriptionDialog (create/edit)
//! └── ConfirmDeleteDialog
//!
//! ToastStack
//! └── Toast (multiple)
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dialogs;
pub mod inputs;
pub mod pager;
pub mod toast;

// ============================================================================
// Re-exports
// ============================================================================

pub use inputs::{Select, SelectOption, TextInput, Toggle};
pub use pager::ClientPagerBar;
pub use toast::ToastStack;

pub use dialogs::{
    ConfirmDeleteDialog, CustomerDialog, CustomerDialogMode, SubscriptionDialog,
    SubscriptionDialogMode, ViewCustomerDialog,
};
