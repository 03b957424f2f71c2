//! Get motorcycle use case.

use crate::model::motorcycle::{Motorcycle, MotorcycleId};
use crate::repo::motorcycle_repo::MotorcycleRepository;
use crate::security::auth_gate::AuthGate;
use crate::service::error::ServiceError;
use crate::service::pipeline::{check_access, persist, respond};
use crate::service::response::UseCaseResponse;
use serde::{Deserialize, Serialize};

const OPERATION: &str = "get";

/// Request model for fetching one motorcycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMotorcycleRequest {
    pub id: MotorcycleId,
}

impl GetMotorcycleRequest {
    pub fn new(id: MotorcycleId) -> Self {
        Self { id }
    }
}

pub type GetMotorcycleResponse = UseCaseResponse<Motorcycle>;

/// Use-case interactor that reads one motorcycle by id.
pub struct GetMotorcycleInteractor<R: MotorcycleRepository, A: AuthGate> {
    repo: R,
    auth: A,
}

impl<R: MotorcycleRepository, A: AuthGate> GetMotorcycleInteractor<R, A> {
    pub fn new(repo: R, auth: A) -> Self {
        Self { repo, auth }
    }

    /// Returns `NotFound` in the response when no record has `request.id`.
    pub fn handle(&self, request: &GetMotorcycleRequest) -> GetMotorcycleResponse {
        respond(OPERATION, self.execute(request))
    }

    fn execute(&self, request: &GetMotorcycleRequest) -> Result<Motorcycle, ServiceError> {
        check_access(&self.auth, OPERATION)?;

        let motorcycle = self
            .repo
            .find_by_id(request.id)?
            .ok_or(ServiceError::NotFound(request.id))?;
        persist(&self.repo)?;
        Ok(motorcycle)
    }
}
