//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use roster_backend::BackendError;

use crate::rules::{ConflictField, ValidationError};

/// Core layer error type.
///
/// Every variant is recoverable: a failure returns control to the form for
/// another attempt.
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A field rule rejected the candidate. No network call was made.
    #[error("{0}")]
    Validation(ValidationError),

    /// The duplicate scan found a uniqueness violation. No mutation was sent.
    #[error("{message}")]
    Conflict {
        field: ConflictField,
        message: String,
    },

    /// A submission is already in flight; the new one was refused before any
    /// network call.
    #[error("A submission is already in progress")]
    SubmitInFlight,

    /// Backend error (converted from the library).
    #[error("{0}")]
    Backend(#[from] BackendError),
}

impl CoreError {
    /// Whether this is expected behavior (user input, resource does not
    /// exist, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`. **Please update this method when new variants
    /// are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Conflict { .. } | Self::SubmitInFlight => true,
            Self::Backend(e) => e.is_expected(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_is_expected() {
        let e = CoreError::Validation(ValidationError::EmailMissing);
        assert!(e.is_expected());
        assert_eq!(e.to_string(), "Email is required");
    }

    #[test]
    fn conflict_displays_its_message() {
        let e = CoreError::Conflict {
            field: ConflictField::Email,
            message: "Student with this email already exists!".to_string(),
        };
        assert!(e.is_expected());
        assert_eq!(e.to_string(), "Student with this email already exists!");
    }

    #[test]
    fn backend_network_error_is_unexpected() {
        let e = CoreError::Backend(BackendError::NetworkError {
            backend: "campus".to_string(),
            detail: "connection refused".to_string(),
        });
        assert!(!e.is_expected());
    }

    #[test]
    fn serializes_tagged() {
        let e = CoreError::Conflict {
            field: ConflictField::RollNumber,
            message: "Roll number already exists. Please use a different roll number.".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Conflict\""));
        assert!(json.contains("\"rollNumber\""));
    }
}
