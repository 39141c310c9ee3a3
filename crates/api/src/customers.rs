//! Customer service

use std::sync::Arc;

use waconsole_core::{
    ConsoleError, ConsoleResult, Customer, CustomerInput, DeleteResolution, EntityId, ListQuery,
    Notice, Notifier, PagedResult, ServerErrorKind, normalize_list,
};

use crate::client::ApiClient;
use crate::outcome::{DeleteOutcome, Resource, UpdateFailure};

const PATH: &str = "customer";

pub const LIST_FAILED: &str = "Failed to load customers. Please try again.";
pub const GET_FAILED: &str = "Failed to load customer details.";
pub const CREATE_FAILED: &str =
    "Failed to add a new customer. Please check the input and try again.";
pub const UPDATED: &str = "Customer updated successfully.";
pub const CREATED: &str = "Customer added successfully.";
pub const DELETED: &str = "Customer deleted successfully.";
pub const DELETE_ALREADY_GONE: &str =
    "This customer no longer exists on the server and was removed from your list.";
pub const SYNC_WARNING: &str =
    "Some customers in your list no longer exist on the server. The list has been refreshed.";

/// Message for a delete the server refused
pub fn delete_failure_message(resolution: &DeleteResolution) -> Option<String> {
    match resolution {
        DeleteResolution::Rejected { kind, message } => Some(match kind {
            Some(ServerErrorKind::Forbidden) => {
                "You are not authorized to delete this customer.".to_string()
            }
            Some(ServerErrorKind::Internal) => "Server error. Please try again later.".to_string(),
            _ if message.is_empty() => "Failed to delete customer.".to_string(),
            _ => message.clone(),
        }),
        _ => None,
    }
}

/// Customer CRUD over `/customer`
#[derive(Clone)]
pub struct CustomerService {
    client: ApiClient,
    notifier: Arc<dyn Notifier>,
}

impl CustomerService {
    pub fn new(client: ApiClient, notifier: Arc<dyn Notifier>) -> Self {
        Self { client, notifier }
    }

    /// Fetch one server page of customers
    pub async fn list(&self, query: &ListQuery) -> ConsoleResult<PagedResult<Customer>> {
        match self.client.get_value(PATH, &query.to_query_pairs()).await {
            Ok(body) => {
                let page = normalize_list(body);
                tracing::debug!(count = page.len(), total = page.total_count, "Customers fetched");
                Ok(page)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching customers");
                self.notifier.notify(Notice::error(LIST_FAILED));
                Err(e)
            }
        }
    }

    /// Fetch a single customer
    pub async fn get(&self, id: &EntityId) -> ConsoleResult<Customer> {
        require_id(id)?;

        self.client
            .get(&format!("{}/{}", PATH, id), &[])
            .await
            .inspect_err(|e| {
                tracing::error!(customer_id = %id, error = %e, "Error fetching customer");
                self.notifier.notify(Notice::error(GET_FAILED));
            })
    }

    /// Create a customer and return the stored record
    pub async fn create(&self, input: &CustomerInput) -> ConsoleResult<Customer> {
        self.client.post(PATH, input).await.inspect_err(|e| {
            tracing::error!(error = %e, "Error adding customer");
            self.notifier.notify(Notice::error(CREATE_FAILED));
        })
    }

    /// Update a customer. `None` fields in `input` are left unchanged.
    pub async fn update(&self, id: &EntityId, input: &CustomerInput) -> ConsoleResult<Customer> {
        require_id(id)?;

        tracing::info!(customer_id = %id, "Updating customer");
        match self.client.put(&format!("{}/{}", PATH, id), input).await {
            Ok(customer) => {
                self.notifier.notify(Notice::success(UPDATED));
                Ok(customer)
            }
            Err(e) => {
                tracing::error!(
                    customer_id = %id,
                    status = ?e.status(),
                    error = %e,
                    "Error updating customer"
                );
                let failure = UpdateFailure::from_error(&e);
                self.notifier
                    .notify(Notice::error(failure.message(Resource::Customer)));
                Err(e)
            }
        }
    }

    /// Delete a customer.
    ///
    /// No notice is raised here; the caller decides how a failure is
    /// reconciled with its list.
    pub async fn delete(&self, id: &EntityId) -> ConsoleResult<DeleteOutcome> {
        require_id(id)?;

        match self.client.delete(&format!("{}/{}", PATH, id)).await {
            Ok(body) => Ok(DeleteOutcome::from_response(id, body)),
            Err(e) => {
                tracing::error!(
                    customer_id = %id,
                    status = ?e.status(),
                    error = %e,
                    "Error deleting customer"
                );
                Err(e)
            }
        }
    }
}

fn require_id(id: &EntityId) -> ConsoleResult<()> {
    if id.is_empty() {
        return Err(ConsoleError::missing_id(Resource::Customer.label()));
    }
    Ok(())
}
