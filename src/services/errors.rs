//! Error types shared by the service layer.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::search::SearchFormError;

/// Errors surfaced by service operations that can actually fail.
///
/// Collection-in/collection-out functions degrade instead of erroring, so
/// this covers lookups and validated input only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Internal error")]
    Internal,
}

/// Convenient result alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(value: TypeConstraintError) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<SearchFormError> for ServiceError {
    fn from(value: SearchFormError) -> Self {
        Self::Validation(value.to_string())
    }
}
