//! # Dialog Components
//!
//! Modal dialogs for the console.
//!
//! ## Dialogs
//!
//! - **CustomerDialog**: Create and edit customers
//! - **ViewCustomerDialog**: Read-only customer details
//! - **SubscriptionDialog**: Create and edit subscriptions
//! - **ConfirmDeleteDialog**: Confirmation for deletes
//!
//! ## Usage
//!
//! ```rust,ignore
//! use waconsole_ui::components::dialogs::{CustomerDialog, CustomerDialogMode};
//!
//! fn MyComponent() -> Element {
//!     rsx! {
//!         CustomerDialog { mode: CustomerDialogMode::Create }
//!     }
//! }
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod confirm_delete;
pub mod customer_dialog;
pub mod subscription_dialog;
pub mod view_customer;

// ============================================================================
// Re-exports
// ============================================================================

pub use confirm_delete::ConfirmDeleteDialog;
pub use customer_dialog::{CustomerDialog, CustomerDialogMode};
pub use subscription_dialog::{SubscriptionDialog, SubscriptionDialogMode};
pub use view_customer::ViewCustomerDialog;
