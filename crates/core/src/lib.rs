//! # WhatsApp Console Core
//!
//! Core types, traits, and error handling for the WhatsApp console.
//!
//! This crate provides the building blocks shared by the API services and
//! the desktop UI, including:
//!
//! - **Types**: Customer and subscription records and their drafts
//! - **Traits**: Common behaviors like `Validatable`, `Identified` and `Searchable`
//! - **Errors**: Unified error handling with `ConsoleError` and `ConsoleResult`
//! - **Lists**: Query parameters, response normalisation, ticketed list
//!   synchronisation and client-side paging
//! - **Notices**: The notification seam between services and the toast stack
//! - **Settings**: Connection config and persisted user preferences
//!

pub mod config;
pub mod error;
pub mod notice;
pub mod page;
pub mod paging;
pub mod preferences;
pub mod query;
pub mod sync;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use config::ConsoleConfig;
pub use error::{ConsoleError, ConsoleResult, ResultExt, ServerErrorKind};
pub use notice::{Notice, NoticeLevel, NoticeQueue, Notifier, SilentNotifier};
pub use page::{ListShape, PagedResult, normalize_list};
pub use paging::ClientPager;
pub use preferences::{Language, Preferences};
pub use query::{ListQuery, SortOption};
pub use sync::{DeleteResolution, FetchOutcome, ListSync, Phase, Ticket};
pub use traits::{Identified, Searchable, Validatable};
pub use types::{Customer, CustomerInput, EntityId, PeriodType, Subscription, SubscriptionInput};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
