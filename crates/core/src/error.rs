//! Error types for the Café Code console
//!
//! This module provides unified error handling across the workspace,
//! including validation errors, network errors, server-reported errors,
//! and local-store errors.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for the Café Code console
#[derive(Debug, Error)]
pub enum ConsoleError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Field validation failed
    #[error("Validation failed for '{entity}.{field}': {message}")]
    FieldValidation {
        entity: String,
        field: String,
        message: String,
    },

    // ========================================================================
    // Remote Store Errors
    // ========================================================================
    /// Transport-level failure talking to a remote endpoint
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with `status != "success"`
    #[error("{0}")]
    Server(String),

    /// The endpoint answered success but the payload shape was wrong
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// Record not found in the last-loaded list
    #[error("Record not found: {entity} with {id_field} '{id}'")]
    RecordNotFound {
        entity: String,
        id_field: String,
        id: String,
    },

    /// No user matched the given credentials
    #[error("Incorrect email or password")]
    InvalidCredentials,

    // ========================================================================
    // Local Store Errors
    // ========================================================================
    /// Local key-value store failure
    #[error("Local store error: {0}")]
    Store(String),

    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read a local file
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// Failed to write a local file
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Operation cancelled by user
    #[error("Operation cancelled")]
    Cancelled,

    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl ConsoleError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ConsoleError::Validation(msg.into())
    }

    /// Create a field validation error
    pub fn field_validation(
        entity: impl Into<String>,
        field: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        ConsoleError::FieldValidation {
            entity: entity.into(),
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create a network error
    pub fn network(msg: impl Into<String>) -> Self {
        ConsoleError::Network(msg.into())
    }

    /// Create a server error from the endpoint's message field
    pub fn server(msg: impl Into<String>) -> Self {
        ConsoleError::Server(msg.into())
    }

    /// Create a malformed-response error
    pub fn malformed(msg: impl Into<String>) -> Self {
        ConsoleError::MalformedResponse(msg.into())
    }

    /// Create a record-not-found error
    pub fn not_found(
        entity: impl Into<String>,
        id_field: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        ConsoleError::RecordNotFound {
            entity: entity.into(),
            id_field: id_field.into(),
            id: id.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        ConsoleError::Internal(msg.into())
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        ConsoleError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ConsoleError::Validation(_) | ConsoleError::FieldValidation { .. }
        )
    }

    /// Check if this error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ConsoleError::RecordNotFound { .. } | ConsoleError::InvalidCredentials
        )
    }

    /// Check if this error came from the network or the remote endpoint
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ConsoleError::Network(_)
                | ConsoleError::Server(_)
                | ConsoleError::MalformedResponse(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ConsoleError::Io(_) | ConsoleError::FileRead { .. } | ConsoleError::FileWrite { .. }
        )
    }

    /// The message to show the user for this failure
    ///
    /// Server-reported messages are shown verbatim; transport failures get
    /// the generic connectivity wording the console has always used.
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Network(_) => {
                "Failed to reach the server. Please check your connection.".to_string()
            }
            other => other.to_string(),
        }
    }
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
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validation_error() {
        let err = ConsoleError::validation("Brand Name is required");
        assert!(err.is_validation());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "Validation error: Brand Name is required");
    }

    #[test]
    fn test_field_validation_error() {
        let err = ConsoleError::field_validation("Customer", "Email", "Invalid email format");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation failed for 'Customer.Email': Invalid email format"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = ConsoleError::not_found("Product", "Id", "42");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Record not found: Product with Id '42'");
    }

    #[test]
    fn test_server_error_is_shown_verbatim() {
        let err = ConsoleError::server("locked");
        assert!(err.is_remote());
        assert_eq!(err.user_message(), "locked");
    }

    #[test]
    fn test_network_error_gets_generic_user_message() {
        let err = ConsoleError::network("connection refused");
        assert!(err.is_remote());
        assert_eq!(
            err.user_message(),
            "Failed to reach the server. Please check your connection."
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = ConsoleError::with_context("Loading brands", "Permission denied");
        assert_eq!(err.to_string(), "Loading brands: Permission denied");
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ConsoleError = io_err.into();
        assert!(err.is_io());
        assert!(!err.is_remote());
    }

    #[test]
    fn test_result_ext_adds_context() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.with_context("Saving cart").unwrap_err();
        assert_eq!(err.to_string(), "Saving cart: IO error: denied");
    }
}
