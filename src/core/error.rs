//! Typed error handling for the resource store
//!
//! Callers match on specific variants instead of inspecting strings, and can
//! turn any error into an [`ErrorResponse`] to show the user.
//!
//! # Error Categories
//!
//! - [`ResourceError`]: unknown resource names, missing records, records that
//!   do not fit their resource type
//! - [`ValidationError`]: caller-side field validation and malformed JSON
//! - [`ConfigError`]: configuration loading
//!
//! # Example
//!
//! ```rust,ignore
//! use travel_admin::prelude::*;
//!
//! match store.update("hotels", UpdateParams::new(9999, json!({}))) {
//!     Ok(result) => println!("Updated: {}", result.data),
//!     Err(err) if err.is_not_found() => println!("Nothing to update"),
//!     Err(err) => eprintln!("Other error: {}", err),
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::core::record::RecordId;

/// The main error type of the crate
#[derive(Debug, Error)]
pub enum AdminError {
    /// Resource and record lookups
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Field validation and JSON shape errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Internal errors (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error payload suitable for presenting to an end user
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AdminError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            AdminError::Resource(e) => e.error_code(),
            AdminError::Validation(_) => "VALIDATION_ERROR",
            AdminError::Config(_) => "CONFIG_ERROR",
            AdminError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error names a resource or record that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, AdminError::Resource(e) if e.is_not_found())
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            AdminError::Resource(ResourceError::RecordNotFound { resource, id }) => {
                Some(serde_json::json!({ "resource": resource, "id": id }))
            }
            AdminError::Resource(ResourceError::UnknownResource { resource }) => {
                Some(serde_json::json!({ "resource": resource }))
            }
            AdminError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

// =============================================================================
// Resource Errors
// =============================================================================

/// Errors related to resource collections and their records
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No collection is registered under this name
    #[error("Unknown resource: {resource}")]
    UnknownResource { resource: String },

    /// The collection has no record with this id
    #[error("{resource} record with id '{id}' not found")]
    RecordNotFound { resource: String, id: RecordId },

    /// Caller data cannot be read as a record of this resource
    #[error("Invalid {resource} record: {message}")]
    InvalidRecord { resource: String, message: String },
}

impl ResourceError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ResourceError::UnknownResource { .. } => "UNKNOWN_RESOURCE",
            ResourceError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
            ResourceError::InvalidRecord { .. } => "INVALID_RECORD",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ResourceError::UnknownResource { .. } | ResourceError::RecordNotFound { .. }
        )
    }

    pub(crate) fn not_found(resource: &str, id: RecordId) -> Self {
        ResourceError::RecordNotFound {
            resource: resource.to_string(),
            id,
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Single field validation error
    #[error("Validation error for field '{field}': {message}")]
    FieldError { field: String, message: String },

    /// Multiple field validation errors
    #[error("Validation errors: {}", join_field_errors(.0))]
    FieldErrors(Vec<FieldValidationError>),

    /// Invalid JSON format
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn join_field_errors(errors: &[FieldValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for AdminError {
    fn from(err: serde_yaml::Error) -> Self {
        AdminError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for store operations
pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_not_found_display() {
        let err = ResourceError::not_found("hotels", 42);
        assert!(err.to_string().contains("hotels"));
        assert!(err.to_string().contains("42"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_not_found_classification() {
        let missing: AdminError = ResourceError::not_found("hotels", 1).into();
        assert!(missing.is_not_found());

        let unknown: AdminError = ResourceError::UnknownResource {
            resource: "castles".to_string(),
        }
        .into();
        assert!(unknown.is_not_found());

        let invalid: AdminError = ResourceError::InvalidRecord {
            resource: "hotels".to_string(),
            message: "bad".to_string(),
        }
        .into();
        assert!(!invalid.is_not_found());
    }

    #[test]
    fn test_error_response_details() {
        let err: AdminError = ResourceError::not_found("tours", 7).into();
        let response = err.to_response();
        assert_eq!(response.code, "RECORD_NOT_FOUND");
        assert_eq!(
            response.details,
            Some(serde_json::json!({ "resource": "tours", "id": 7 }))
        );
    }

    #[test]
    fn test_validation_error_multiple_fields() {
        let err = ValidationError::FieldErrors(vec![
            FieldValidationError::new("name", "required"),
            FieldValidationError::new("email", "invalid format"),
        ]);
        let display = err.to_string();
        assert!(display.contains("name: required"));
        assert!(display.contains("email: invalid format"));
    }

    #[test]
    fn test_config_parse_error_mentions_file() {
        let err = ConfigError::ParseError {
            file: Some("store.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse config file 'store.yaml': bad indent"
        );

        let err = ConfigError::ParseError {
            file: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to parse config: bad indent");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: AdminError = json_err.into();
        assert!(matches!(
            err,
            AdminError::Validation(ValidationError::InvalidJson { .. })
        ));
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
