//! List fetches shared by pages and dialogs
//!
//! Each fetch takes a ticket from the list's `ListSync` before the request
//! goes out; a response that arrives after a newer fetch started is dropped.

use dioxus::prelude::*;
use waconsole_api::customers::SYNC_WARNING;
use waconsole_core::{FetchOutcome, Notice};

use crate::state::AppContext;

/// Fetch the current server page of customers
pub fn load_customers(app: &AppContext) {
    let mut customers = app.customers;
    let ticket = customers.write().begin_fetch();
    let query = app.customer_query.peek().clone();
    let service = app.services.customers.clone();
    let notices = app.notices.clone();

    tracing::debug!(ticket = ticket.sequence(), "Loading customers");

    spawn(async move {
        let outcome = match service.list(&query).await {
            Ok(page) => customers.write().complete_fetch(ticket, page.items),
            Err(e) => customers.write().fail_fetch(ticket, &e),
        };

        match outcome {
            FetchOutcome::Stale => {
                tracing::debug!(ticket = ticket.sequence(), "Discarded stale customer response");
            }
            FetchOutcome::Applied { missing } if !missing.is_empty() => {
                tracing::info!(missing = missing.len(), "Customers removed on the server");
                notices.push(Notice::sync(SYNC_WARNING));
            }
            FetchOutcome::Applied { .. } => {}
        }
    });
}

/// Fetch the current server page of subscriptions
pub fn load_subscriptions(app: &AppContext) {
    let mut subscriptions = app.subscriptions;
    let ticket = subscriptions.write().begin_fetch();
    let query = app.subscription_query.peek().clone();
    let service = app.services.subscriptions.clone();

    tracing::debug!(ticket = ticket.sequence(), "Loading subscriptions");

    spawn(async move {
        let outcome = match service.list(&query).await {
            Ok(page) => subscriptions.write().complete_fetch(ticket, page.items),
            Err(e) => subscriptions.write().fail_fetch(ticket, &e),
        };

        if outcome == FetchOutcome::Stale {
            tracing::debug!(
                ticket = ticket.sequence(),
                "Discarded stale subscription response"
            );
        }
    });
}
