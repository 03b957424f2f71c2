//! Delete motorcycle use case.

use crate::model::motorcycle::MotorcycleId;
use crate::repo::motorcycle_repo::MotorcycleRepository;
use crate::security::auth_gate::AuthGate;
use crate::service::error::ServiceError;
use crate::service::pipeline::{check_access, persist, respond};
use crate::service::response::UseCaseResponse;
use serde::{Deserialize, Serialize};

const OPERATION: &str = "delete";

/// Request model for deleting one motorcycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMotorcycleRequest {
    pub id: MotorcycleId,
}

impl DeleteMotorcycleRequest {
    pub fn new(id: MotorcycleId) -> Self {
        Self { id }
    }
}

/// Carries the deleted id on success.
pub type DeleteMotorcycleResponse = UseCaseResponse<MotorcycleId>;

/// Use-case interactor that removes one motorcycle.
pub struct DeleteMotorcycleInteractor<R: MotorcycleRepository, A: AuthGate> {
    repo: R,
    auth: A,
}

impl<R: MotorcycleRepository, A: AuthGate> DeleteMotorcycleInteractor<R, A> {
    pub fn new(repo: R, auth: A) -> Self {
        Self { repo, auth }
    }

    pub fn handle(&self, request: &DeleteMotorcycleRequest) -> DeleteMotorcycleResponse {
        respond(OPERATION, self.execute(request))
    }

    fn execute(&self, request: &DeleteMotorcycleRequest) -> Result<MotorcycleId, ServiceError> {
        check_access(&self.auth, OPERATION)?;

        self.repo.delete(request.id)?;
        persist(&self.repo)?;
        Ok(request.id)
    }
}
