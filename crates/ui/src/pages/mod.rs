//! Page Components for the console
//!
//! Each page is one entry of the sidebar.
//!
//! ## Available Pages
//!
//! - **DashboardPage**: Welcome heading and quick links
//! - **CustomersPage**: Customer list with search, sort and paging
//! - **SubscriptionsPage**: Server-paged subscription list
//! - **SettingsPage**: Theme, language and connection details
//!

pub mod customers;
pub mod dashboard;
pub mod settings;
pub mod subscriptions;

// Re-export page components for convenience
pub use customers::CustomersPage;
pub use dashboard::DashboardPage;
pub use settings::SettingsPage;
pub use subscriptions::SubscriptionsPage;
