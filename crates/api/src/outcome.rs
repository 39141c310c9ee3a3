//! Result shapes and user-facing failure messages shared by the services

use serde_json::Value;
use waconsole_core::{ConsoleError, EntityId, ServerErrorKind};

/// What a successful delete returned
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The server answered with a JSON body
    Body(Value),
    /// The server answered with an empty body
    Acknowledged { id: EntityId },
}

impl DeleteOutcome {
    pub(crate) fn from_response(id: &EntityId, body: Option<Value>) -> Self {
        match body {
            Some(body) => DeleteOutcome::Body(body),
            None => DeleteOutcome::Acknowledged { id: id.clone() },
        }
    }
}

/// Resource named in user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Customer,
    Subscription,
}

impl Resource {
    pub fn noun(&self) -> &'static str {
        match self {
            Resource::Customer => "customer",
            Resource::Subscription => "subscription",
        }
    }

    /// Capitalised name, as used in `MissingId`
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Customer => "Customer",
            Resource::Subscription => "Subscription",
        }
    }
}

/// Why an update was refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateFailure {
    SessionExpired,
    Forbidden,
    NotFound,
    InvalidInput,
    /// Any other failure, with the server's message when it sent one
    Other(Option<String>),
}

impl UpdateFailure {
    /// Classify an update error
    pub fn from_error(error: &ConsoleError) -> Self {
        match error.server_kind() {
            Some(ServerErrorKind::Unauthorized) => UpdateFailure::SessionExpired,
            Some(ServerErrorKind::Forbidden) => UpdateFailure::Forbidden,
            Some(ServerErrorKind::NotFound) => UpdateFailure::NotFound,
            Some(ServerErrorKind::BadRequest) => UpdateFailure::InvalidInput,
            _ => UpdateFailure::Other(error.server_message()),
        }
    }

    /// Message shown to the user
    pub fn message(&self, resource: Resource) -> String {
        let noun = resource.noun();
        match self {
            UpdateFailure::SessionExpired => {
                "Your session has expired. Please sign in again.".to_string()
            }
            UpdateFailure::Forbidden => format!("You are not authorized to edit this {}.", noun),
            UpdateFailure::NotFound => {
                format!("The {} you are trying to edit no longer exists.", noun)
            }
            UpdateFailure::InvalidInput => {
                "The submitted data is invalid. Please check your input.".to_string()
            }
            UpdateFailure::Other(Some(message)) => message.clone(),
            UpdateFailure::Other(None) => format!("Failed to update {}.", noun),
        }
    }
}
