//! Store-layer errors shared by the accessor and the mutation gateway.

use super::error_code::{self, FoodshareErrorCode};

/// Errors that can occur while reading from or writing to the store.
///
/// Store-originated variants carry the operation that was attempted and the
/// underlying driver text, so a caller can surface both without re-wrapping.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("{operation}: store unavailable: {message}")]
    StoreUnavailable { operation: String, message: String },

    #[error("{operation}: query failed: {message}")]
    QueryError { operation: String, message: String },

    #[error("{operation}: constraint violation: {message}")]
    ConstraintViolation { operation: String, message: String },

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{entity} has no identifier and the store cannot assign one")]
    MissingIdentity { entity: &'static str },

    #[error("{entity}.{field}: {reason}")]
    InvalidField {
        entity: &'static str,
        field: String,
        reason: String,
    },
}

impl StoreError {
    pub fn unavailable(operation: impl Into<String>, message: impl ToString) -> Self {
        Self::StoreUnavailable {
            operation: operation.into(),
            message: message.to_string(),
        }
    }

    pub fn query(operation: impl Into<String>, message: impl ToString) -> Self {
        Self::QueryError {
            operation: operation.into(),
            message: message.to_string(),
        }
    }

    pub fn constraint(operation: impl Into<String>, message: impl ToString) -> Self {
        Self::ConstraintViolation {
            operation: operation.into(),
            message: message.to_string(),
        }
    }

    pub fn invalid_field(
        entity: &'static str,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            entity,
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl FoodshareErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::StoreUnavailable { .. } => error_code::STORE_UNAVAILABLE,
            Self::QueryError { .. } => error_code::QUERY_ERROR,
            Self::ConstraintViolation { .. } => error_code::CONSTRAINT_VIOLATION,
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::MissingIdentity { .. } => error_code::MISSING_IDENTITY,
            Self::InvalidField { .. } => error_code::INVALID_FIELD,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
