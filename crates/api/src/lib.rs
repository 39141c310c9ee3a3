//! # WhatsApp Console API
//!
//! REST client and resource services for the console backend.
//!
//! - **Client**: `ApiClient` attaches the base URL and bearer credential,
//!   logs traffic, and maps non-2xx responses to `ConsoleError::Server`
//! - **Services**: `CustomerService` and `SubscriptionService` wrap the
//!   CRUD endpoints and report outcomes through a `Notifier`
//!

pub mod client;
pub mod customers;
pub mod outcome;
pub mod subscriptions;

use std::sync::Arc;

pub use client::ApiClient;
pub use customers::CustomerService;
pub use outcome::{DeleteOutcome, Resource, UpdateFailure};
pub use subscriptions::SubscriptionService;

use waconsole_core::{ConsoleConfig, ConsoleResult, Notifier};

/// Both services sharing one client
#[derive(Clone)]
pub struct Services {
    pub customers: CustomerService,
    pub subscriptions: SubscriptionService,
}

impl Services {
    pub fn new(config: &ConsoleConfig, notifier: Arc<dyn Notifier>) -> ConsoleResult<Self> {
        let client = ApiClient::new(config)?;
        Ok(Self {
            customers: CustomerService::new(client.clone(), notifier.clone()),
            subscriptions: SubscriptionService::new(client, notifier),
        })
    }
}
