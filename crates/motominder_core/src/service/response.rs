//! Response envelope returned by every interactor.

use crate::model::operation_status::OperationStatus;
use crate::service::error::ServiceError;

/// Terminal state of one use case.
///
/// Holds either a payload or an error, never both. Construct through
/// `success` or `failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseCaseResponse<T> {
    outcome: Result<T, ServiceError>,
}

impl<T> UseCaseResponse<T> {
    pub fn success(payload: T) -> Self {
        Self {
            outcome: Ok(payload),
        }
    }

    pub fn failure(error: ServiceError) -> Self {
        Self {
            outcome: Err(error),
        }
    }

    /// `Ok` on success, otherwise the status of the error.
    pub fn status(&self) -> OperationStatus {
        match &self.outcome {
            Ok(_) => OperationStatus::Ok,
            Err(err) => err.status(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn payload(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&ServiceError> {
        self.outcome.as_ref().err()
    }

    pub fn into_result(self) -> Result<T, ServiceError> {
        self.outcome
    }
}
