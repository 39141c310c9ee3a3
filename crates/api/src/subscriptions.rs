//! Subscription service

use std::sync::Arc;

use waconsole_core::{
    ConsoleError, ConsoleResult, EntityId, ListQuery, Notice, Notifier, PagedResult,
    ServerErrorKind, Subscription, SubscriptionInput, normalize_list,
};

use crate::client::ApiClient;
use crate::outcome::{DeleteOutcome, Resource, UpdateFailure};

const PATH: &str = "customer-subscription";

pub const UNAUTHORIZED: &str = "You are not authorized to perform this action";
pub const NOT_FOUND: &str = "Subscription not found";
pub const DELETE_SERVER_ERROR: &str = "Server error - please try again later";
pub const DELETE_FAILED: &str = "Failed to delete subscription";
pub const CREATED: &str = "Subscription added successfully.";
pub const UPDATED: &str = "Subscription updated successfully.";
pub const DELETED: &str = "Subscription deleted successfully.";
pub const DELETE_ALREADY_GONE: &str =
    "This subscription was already removed. The list has been refreshed.";

/// Subscription CRUD over `/customer-subscription`.
///
/// Errors come back relabeled with the message the list and form show
/// inline.
#[derive(Clone)]
pub struct SubscriptionService {
    client: ApiClient,
    notifier: Arc<dyn Notifier>,
}

impl SubscriptionService {
    pub fn new(client: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        Self { client, notifier }
    }

    /// Fetch one server page of subscriptions
    pub async fn list(&self, query: &ListQuery) -> ConsoleResult<PagedResult<Subscription>> {
        let body = self
            .client
            .get_value(PATH, &query.to_query_pairs())
            .await
            .map_err(|e| {
                tracing::error!(status = ?e.status(), error = %e, "Error fetching subscriptions");
                forbidden_relabel(e)
            })?;

        Ok(normalize_list(body))
    }

    /// Fetch a single subscription
    pub async fn get(&self, id: &EntityId) -> ConsoleResult<Subscription> {
        require_id(id)?;

        self.client
            .get(&format!("{}/{}", PATH, id), &[])
            .await
            .map_err(|e| {
                tracing::error!(subscription_id = %id, status = ?e.status(), error = %e, "Error fetching subscription");
                if e.is_not_found() {
                    e.relabel(NOT_FOUND)
                } else {
                    e
                }
            })
    }

    /// Create a subscription and return the stored record
    pub async fn create(&self, input: &SubscriptionInput) -> ConsoleResult<Subscription> {
        let created: Subscription = self.client.post(PATH, input).await.map_err(|e| {
            tracing::error!(error = %e, "Error adding subscription");
            forbidden_relabel(e)
        })?;

        self.notifier.notify(Notice::success(CREATED));
        Ok(created)
    }

    /// Update a subscription
    pub async fn update(
        &self,
        id: &EntityId,
        input: &SubscriptionInput,
    ) -> ConsoleResult<Subscription> {
        require_id(id)?;

        match self.client.put(&format!("{}/{}", PATH, id), input).await {
            Ok(updated) => {
                self.notifier.notify(Notice::success(UPDATED));
                Ok(updated)
            }
            Err(e) => {
                tracing::error!(subscription_id = %id, status = ?e.status(), error = %e, "Error updating subscription");
                let message = UpdateFailure::from_error(&e).message(Resource::Subscription);
                self.notifier.notify(Notice::error(message.clone()));
                Err(e.relabel(message))
            }
        }
    }

    /// Delete a subscription
    pub async fn delete(&self, id: &EntityId) -> ConsoleResult<DeleteOutcome> {
        require_id(id)?;

        match self.client.delete(&format!("{}/{}", PATH, id)).await {
            Ok(body) => {
                self.notifier.notify(Notice::success(DELETED));
                Ok(DeleteOutcome::from_response(id, body))
            }
            Err(e) => {
                tracing::error!(subscription_id = %id, status = ?e.status(), error = %e, "Error deleting subscription");
                let message = if e.server_kind() == Some(ServerErrorKind::Internal) {
                    DELETE_SERVER_ERROR
                } else {
                    DELETE_FAILED
                };
                Err(e.relabel(message))
            }
        }
    }
}

fn forbidden_relabel(e: ConsoleError) -> ConsoleError {
    if e.is_forbidden() {
        e.relabel(UNAUTHORIZED)
    } else {
        e
    }
}

fn require_id(id: &EntityId) -> ConsoleResult<()> {
    if id.is_empty() {
        return Err(ConsoleError::missing_id(Resource::Subscription.label()));
    }
    Ok(())
}
