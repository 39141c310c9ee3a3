//! Error types for the WhatsApp console
//!
//! One error enum covers the three failure families the console deals with:
//! local validation (raised before any network call), transport failures,
//! and server responses outside the 2xx range.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Server Error Classification
// ============================================================================

/// Classification of a non-2xx server response by status code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerErrorKind {
    /// 400: the submitted data was rejected
    BadRequest,
    /// 401: the credential is expired or invalid
    Unauthorized,
    /// 403: the credential lacks permission
    Forbidden,
    /// 404: the resource does not exist
    NotFound,
    /// 500: server fault
    Internal,
    /// Any other non-2xx status
    Other,
}

impl ServerErrorKind {
    /// Classify an HTTP status code
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ServerErrorKind::BadRequest,
            401 => ServerErrorKind::Unauthorized,
            403 => ServerErrorKind::Forbidden,
            404 => ServerErrorKind::NotFound,
            500 => ServerErrorKind::Internal,
            _ => ServerErrorKind::Other,
        }
    }
}

// ============================================================================
// Console Error
// ============================================================================

/// The main error type for the console
#[derive(Debug, Error)]
pub enum ConsoleError {
    // ========================================================================
    // Local Validation Errors
    // ========================================================================
    /// An operation that needs an identifier was called without one
    #[error("{resource} ID is required")]
    MissingId { resource: &'static str },

    /// A request was issued without a target path
    #[error("API URL is undefined")]
    MissingPath,

    /// A draft failed its required-field check
    #[error("Validation error: {0}")]
    Validation(String),

    // ========================================================================
    // Transport Errors
    // ========================================================================
    /// Network failure or timeout before a response arrived
    #[error("Request failed: {message}")]
    Transport { message: String, timeout: bool },

    // ========================================================================
    // Server Errors
    // ========================================================================
    /// The server answered with a non-2xx status
    #[error("API error ({status}): {message}")]
    Server {
        status: u16,
        message: String,
        body: Option<serde_json::Value>,
    },

    /// The response body could not be decoded
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Config or preferences file could not be parsed
    #[error("Failed to parse '{path}': {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// An error shown to the user under a different message
    #[error("{message}")]
    Relabeled {
        message: String,
        #[source]
        source: Box<ConsoleError>,
    },
}

impl ConsoleError {
    /// Create a missing-identifier error for the named resource
    pub fn missing_id(resource: &'static str) -> Self {
        ConsoleError::MissingId { resource }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ConsoleError::Validation(msg.into())
    }

    /// Create a server error from a status code and optional body.
    ///
    /// The message is taken from `error.message` or `message` in the body
    /// when the server provides one.
    pub fn server(status: u16, body: Option<serde_json::Value>) -> Self {
        let message = body
            .as_ref()
            .and_then(server_message)
            .unwrap_or_else(|| format!("Server returned status {}", status));

        ConsoleError::Server {
            status,
            message,
            body,
        }
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        ConsoleError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Keep this error but show `message` to the user instead
    pub fn relabel(self, message: impl Into<String>) -> Self {
        ConsoleError::Relabeled {
            message: message.into(),
            source: Box::new(self),
        }
    }

    /// HTTP status of a server error
    pub fn status(&self) -> Option<u16> {
        match self {
            ConsoleError::Server { status, .. } => Some(*status),
            ConsoleError::Relabeled { source, .. } => source.status(),
            _ => None,
        }
    }

    /// Classification of a server error
    pub fn server_kind(&self) -> Option<ServerErrorKind> {
        self.status().map(ServerErrorKind::from_status)
    }

    /// Message supplied by the server body, if any
    pub fn server_message(&self) -> Option<String> {
        match self {
            ConsoleError::Server { body, .. } => body.as_ref().and_then(server_message),
            ConsoleError::Relabeled { source, .. } => source.server_message(),
            _ => None,
        }
    }

    /// Message suitable for a toast or an inline error banner
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Server { message, .. } => message.clone(),
            ConsoleError::Relabeled { message, .. } => message.clone(),
            ConsoleError::Transport { timeout: true, .. } => {
                "The server took too long to respond. Please try again.".to_string()
            }
            ConsoleError::Transport { .. } => {
                "Could not reach the server. Please check your connection.".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Check if this error was raised locally before any network call
    pub fn is_local_validation(&self) -> bool {
        matches!(
            self,
            ConsoleError::MissingId { .. } | ConsoleError::MissingPath | ConsoleError::Validation(_)
        )
    }

    /// Check if the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.server_kind() == Some(ServerErrorKind::NotFound)
    }

    /// Check if the server refused the credential's permissions
    pub fn is_forbidden(&self) -> bool {
        self.server_kind() == Some(ServerErrorKind::Forbidden)
    }

    /// Check if this is a transport failure
    pub fn is_transport(&self) -> bool {
        match self {
            ConsoleError::Transport { .. } => true,
            ConsoleError::Relabeled { source, .. } => source.is_transport(),
            _ => false,
        }
    }
}

/// Extract a human-readable message from an error body.
///
/// Backends in this family answer either `{"error": {"message": ..}}` or
/// `{"message": ..}`.
fn server_message(body: &serde_json::Value) -> Option<String> {
    body.get("error")
        .and_then(|e| e.get("message"))
        .or_else(|| body.get("message"))
        .and_then(|m| m.as_str())
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}

/// Result type alias using ConsoleError
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> ConsoleResult<T>;
}

impl<T, E: Into<ConsoleError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> ConsoleResult<T> {
        self.map_err(|e| {
            let err: ConsoleError = e.into();
            ConsoleError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_id_is_local() {
        let err = ConsoleError::missing_id("Customer");
        assert!(err.is_local_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Customer ID is required");
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(ServerErrorKind::from_status(400), ServerErrorKind::BadRequest);
        assert_eq!(ServerErrorKind::from_status(401), ServerErrorKind::Unauthorized);
        assert_eq!(ServerErrorKind::from_status(403), ServerErrorKind::Forbidden);
        assert_eq!(ServerErrorKind::from_status(404), ServerErrorKind::NotFound);
        assert_eq!(ServerErrorKind::from_status(500), ServerErrorKind::Internal);
        assert_eq!(ServerErrorKind::from_status(502), ServerErrorKind::Other);
    }

    #[test]
    fn test_server_error_message_from_abp_body() {
        let body = json!({"error": {"code": null, "message": "Customer is locked"}});
        let err = ConsoleError::server(400, Some(body));
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.server_message().as_deref(), Some("Customer is locked"));
        assert_eq!(err.to_string(), "API error (400): Customer is locked");
    }

    #[test]
    fn test_server_error_without_body() {
        let err = ConsoleError::server(404, None);
        assert!(err.is_not_found());
        assert!(err.server_message().is_none());
        assert_eq!(err.to_string(), "API error (404): Server returned status 404");
    }

    #[test]
    fn test_flat_message_body() {
        let err = ConsoleError::server(403, Some(json!({"message": "nope"})));
        assert!(err.is_forbidden());
        assert_eq!(err.server_message().as_deref(), Some("nope"));
    }

    #[test]
    fn test_relabel_keeps_status() {
        let err = ConsoleError::server(404, None).relabel("Subscription not found");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Subscription not found");
        assert_eq!(err.user_message(), "Subscription not found");
    }

    #[test]
    fn test_user_message() {
        let err = ConsoleError::server(400, Some(json!({"message": "Bad phone"})));
        assert_eq!(err.user_message(), "Bad phone");

        let err = ConsoleError::Transport {
            message: "operation timed out".into(),
            timeout: true,
        };
        assert!(err.is_transport());
        assert!(err.user_message().contains("too long"));
    }

    #[test]
    fn test_error_with_context() {
        let err = ConsoleError::with_context("Saving preferences", "Permission denied");
        assert_eq!(err.to_string(), "Saving preferences: Permission denied");
    }

    #[test]
    fn test_result_ext() {
        let io: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        ));
        let err = io.with_context("Loading config").unwrap_err();
        assert_eq!(err.to_string(), "Loading config: IO error: gone");
    }
}
