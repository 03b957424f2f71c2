//! Use-case error taxonomy.

use crate::model::motorcycle::{MotorcycleId, MotorcycleValidationError};
use crate::model::operation_status::OperationStatus;
use crate::repo::motorcycle_repo::RepoError;
use crate::security::auth_gate::AuthorizationRole;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for motorcycle use cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Caller is not authenticated.
    NotAuthenticated { operation: &'static str },
    /// Caller lacks the role required by the operation.
    NotAuthorized {
        operation: &'static str,
        role: AuthorizationRole,
    },
    /// Request fields violate motorcycle rules.
    Validation(MotorcycleValidationError),
    /// A record with the same natural key or id already exists.
    Conflict(String),
    /// Target record does not exist.
    NotFound(MotorcycleId),
    /// Unexpected failure, including persistence hook failures.
    Internal(String),
}

impl ServiceError {
    /// Maps the error onto the response status.
    pub fn status(&self) -> OperationStatus {
        match self {
            Self::NotAuthenticated { .. } => OperationStatus::NotAuthenticated,
            Self::NotAuthorized { .. } => OperationStatus::NotAuthorized,
            Self::Validation(_) => OperationStatus::ValidationFailed,
            Self::Conflict(_) => OperationStatus::Conflict,
            Self::NotFound(_) => OperationStatus::NotFound,
            Self::Internal(_) => OperationStatus::InternalError,
        }
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAuthenticated { operation } => write!(
                f,
                "{operation} operation failed due to not being authenticated"
            ),
            Self::NotAuthorized { operation, role } => write!(
                f,
                "{operation} operation failed due to not holding the `{role}` role, so please contact your system administrator"
            ),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Conflict(message) => write!(f, "{message}"),
            Self::NotFound(id) => write!(f, "motorcycle with ID {id} was not found"),
            Self::Internal(message) => write!(f, "internal failure: {message}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MotorcycleValidationError> for ServiceError {
    fn from(value: MotorcycleValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            err @ (RepoError::DuplicateVin(_) | RepoError::DuplicateId(_)) => {
                Self::Conflict(err.to_string())
            }
            RepoError::NotFound(id) => Self::NotFound(id),
            RepoError::Internal(message) => Self::Internal(message),
        }
    }
}
