//! # API Error Type
//!
//! Unified error type for store commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Fleet Ops                              │
//! │                                                                         │
//! │  Caller                      fleet-store                                │
//! │  ──────                      ───────────                                │
//! │                                                                         │
//! │  create_trip(form)                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Not permitted? ─── authorize() ────────────────── FORBIDDEN ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Form invalid? ─── CoreError::InvalidInput ─────── VALIDATION ──►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad status move? ─ CoreError::IllegalTripTransition ─ ILLEGAL ─►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Err(e) → e.code = "VALIDATION_ERROR",                                 │
//! │           e.fields = { "cargoWeight": "Cargo (9001 kg) exceeds ..." }  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;

use fleet_core::{CoreError, Permission};
use serde::Serialize;
use thiserror::Error;

/// Error returned from store commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "plate 'MH-01-AB-1234' already exists",
///   "fields": { "plate": "plate 'MH-01-AB-1234' already exists" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Per-field messages when a form was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Referenced record does not exist
    NotFound,

    /// Form input failed validation
    ValidationError,

    /// Caller lacks the permission for this command
    Forbidden,

    /// Trip status change outside the allowed moves
    IllegalTransition,

    /// Action JSON could not be decoded
    BadRequest,

    /// Anything else
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            fields: None,
        }
    }

    pub fn not_found(entity: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", entity, id))
    }

    pub fn forbidden(permission: Permission) -> Self {
        ApiError::new(
            ErrorCode::Forbidden,
            format!("Permission '{}' required", permission),
        )
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(errors) => ApiError {
                code: ErrorCode::ValidationError,
                message: errors.to_string(),
                fields: Some(errors.messages()),
            },
            CoreError::Validation(e) => {
                let mut fields = BTreeMap::new();
                fields.insert(e.field().to_string(), e.to_string());
                ApiError {
                    code: ErrorCode::ValidationError,
                    message: e.to_string(),
                    fields: Some(fields),
                }
            }
            e @ CoreError::IllegalTripTransition { .. } => {
                ApiError::new(ErrorCode::IllegalTransition, e.to_string())
            }
            CoreError::NotFound { entity, id } => ApiError::not_found(entity, &id),
            CoreError::MalformedAction(reason) => ApiError::new(
                ErrorCode::BadRequest,
                format!("Malformed action: {}", reason),
            ),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::internal(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Failure while loading [`crate::state::FleetConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_core::{FieldErrors, TripStatus, ValidationError};

    #[test]
    fn test_field_errors_become_validation_error() {
        let mut errors = FieldErrors::new();
        errors.push(ValidationError::Required {
            field: "plate".to_string(),
        });
        let api: ApiError = CoreError::InvalidInput(errors).into();

        assert_eq!(api.code, ErrorCode::ValidationError);
        let fields = api.fields.unwrap();
        assert_eq!(fields["plate"], "plate is required");
    }

    #[test]
    fn test_illegal_transition_code() {
        let api: ApiError = CoreError::IllegalTripTransition {
            trip_id: "T003".to_string(),
            from: TripStatus::Completed,
            to: TripStatus::Dispatched,
        }
        .into();
        assert_eq!(api.code, ErrorCode::IllegalTransition);
        assert_eq!(api.message, "Trip T003 cannot move from Completed to Dispatched");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::forbidden(Permission::Delete)).unwrap();
        assert_eq!(json["code"], "FORBIDDEN");
        assert_eq!(json["message"], "Permission 'delete' required");
        assert!(json.get("fields").is_none());
    }

    #[test]
    fn test_not_found_message() {
        let api: ApiError = CoreError::NotFound {
            entity: "Vehicle",
            id: "V404".to_string(),
        }
        .into();
        assert_eq!(api.code, ErrorCode::NotFound);
        assert_eq!(api.message, "Vehicle not found: V404");
    }
}
