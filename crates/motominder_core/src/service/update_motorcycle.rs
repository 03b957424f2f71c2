//! Update motorcycle use case.
//!
//! # Invariants
//! - Uses full replacement of the mutable fields; there is no partial update.
//! - Invalid request fields fail before the repository is touched.

use crate::model::motorcycle::{MotorcycleDraft, MotorcycleId};
use crate::repo::motorcycle_repo::MotorcycleRepository;
use crate::security::auth_gate::AuthGate;
use crate::service::error::ServiceError;
use crate::service::pipeline::{check_access, persist, respond};
use crate::service::response::UseCaseResponse;
use serde::{Deserialize, Serialize};

const OPERATION: &str = "update";

/// Request model for replacing one motorcycle's mutable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMotorcycleRequest {
    pub id: MotorcycleId,
    pub motorcycle: MotorcycleDraft,
}

impl UpdateMotorcycleRequest {
    pub fn new(id: MotorcycleId, motorcycle: MotorcycleDraft) -> Self {
        Self { id, motorcycle }
    }
}

/// Carries the updated id on success.
pub type UpdateMotorcycleResponse = UseCaseResponse<MotorcycleId>;

/// Use-case interactor that updates one motorcycle.
pub struct UpdateMotorcycleInteractor<R: MotorcycleRepository, A: AuthGate> {
    repo: R,
    auth: A,
}

impl<R: MotorcycleRepository, A: AuthGate> UpdateMotorcycleInteractor<R, A> {
    pub fn new(repo: R, auth: A) -> Self {
        Self { repo, auth }
    }

    pub fn handle(&self, request: &UpdateMotorcycleRequest) -> UpdateMotorcycleResponse {
        respond(OPERATION, self.execute(request))
    }

    fn execute(&self, request: &UpdateMotorcycleRequest) -> Result<MotorcycleId, ServiceError> {
        check_access(&self.auth, OPERATION)?;

        let candidate = request.motorcycle.to_motorcycle()?;
        let updated = self.repo.update(request.id, &candidate)?;
        persist(&self.repo)?;
        Ok(updated.id)
    }
}
