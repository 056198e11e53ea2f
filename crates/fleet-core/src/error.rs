//! # Error Types
//!
//! Domain-specific error types for fleet-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  fleet-core errors (this file)                                         │
//! │  ├── ValidationError  - One field failed a form rule                   │
//! │  ├── FieldErrors      - Field → ValidationError map for a whole form   │
//! │  └── CoreError        - Rejected transitions, bad input, bad actions   │
//! │                                                                         │
//! │  fleet-store errors (separate crate)                                   │
//! │  └── ApiError         - What callers see (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → FieldErrors → CoreError → ApiError → Caller   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Actions that reference an id which no longer exists are absorbed by the
//! engine as no-ops. Only pre-dispatch validation and the trip status guard
//! ever reject anything.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use thiserror::Error;

use crate::types::TripStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A form failed validation; one entry per offending field.
    #[error("Invalid input: {0}")]
    InvalidInput(FieldErrors),

    /// A single validation failure outside of a form.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The requested trip status is not reachable from the current one.
    ///
    /// ## Allowed Edges
    /// ```text
    /// Draft ──────► Dispatched ──────► Completed
    ///   │               │
    ///   └──► Cancelled ◄┘
    /// ```
    #[error("Trip {trip_id} cannot move from {from} to {to}")]
    IllegalTripTransition {
        trip_id: String,
        from: TripStatus,
        to: TripStatus,
    },

    /// A command addressed an entity that does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// An action with a known type carried a payload of the wrong shape.
    #[error("Malformed action: {0}")]
    MalformedAction(String),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements and are
/// raised before an action ever reaches the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// A numeric field could not be parsed.
    #[error("{field} must be a number")]
    NotANumber { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a date that isn't YYYY-MM-DD).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., a plate already registered).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// The referenced entity does not exist.
    #[error("{field} '{id}' does not exist")]
    UnknownReference { field: String, id: String },

    /// Cargo heavier than the selected vehicle can carry.
    #[error("Cargo ({cargo_kg} kg) exceeds vehicle capacity ({capacity_kg} kg)")]
    CapacityExceeded { cargo_kg: u32, capacity_kg: u32 },

    /// The selected driver's license expired before today.
    #[error("Driver {driver_id} license expired on {expired_on}")]
    LicenseExpired {
        driver_id: String,
        expired_on: NaiveDate,
    },

    /// The selected vehicle or driver is not in the assignable pool.
    #[error("{field} '{id}' is not assignable while {status}")]
    NotAssignable {
        field: String,
        id: String,
        status: String,
    },

    /// The record is closed and no longer accepts changes.
    #[error("{id} is already {status}")]
    AlreadyClosed { id: String, status: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Returns the name of the form field this error belongs to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::NotANumber { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::Negative { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::Duplicate { field, .. }
            | ValidationError::UnknownReference { field, .. }
            | ValidationError::NotAssignable { field, .. }
            | ValidationError::NotAllowed { field, .. } => field,
            ValidationError::CapacityExceeded { .. } => "cargoWeight",
            ValidationError::LicenseExpired { .. } => "driverId",
            ValidationError::AlreadyClosed { .. } => "status",
        }
    }
}

// =============================================================================
// Field Errors
// =============================================================================

/// Field-level error map for one submitted form.
///
/// Keyed by field name; recording a second error for the same field
/// replaces the first, so the most specific rule wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: BTreeMap<String, ValidationError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error under its own field name.
    pub fn push(&mut self, error: ValidationError) {
        self.errors.insert(error.field().to_string(), error);
    }

    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.errors.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationError)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field → human readable message, for display next to form inputs.
    pub fn messages(&self) -> BTreeMap<String, String> {
        self.errors
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .errors
            .values()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
