//! List motorcycles use case.

use crate::model::motorcycle::Motorcycle;
use crate::repo::motorcycle_repo::MotorcycleRepository;
use crate::security::auth_gate::AuthGate;
use crate::service::error::ServiceError;
use crate::service::pipeline::{check_access, persist, respond};
use crate::service::response::UseCaseResponse;
use serde::{Deserialize, Serialize};

const OPERATION: &str = "list";

/// Request model for listing motorcycles. Carries no filters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMotorcyclesRequest;

/// Records in repository order; empty, never absent, on success.
pub type ListMotorcyclesResponse = UseCaseResponse<Vec<Motorcycle>>;

/// Use-case interactor that lists every motorcycle.
pub struct ListMotorcyclesInteractor<R: MotorcycleRepository, A: AuthGate> {
    repo: R,
    auth: A,
}

impl<R: MotorcycleRepository, A: AuthGate> ListMotorcyclesInteractor<R, A> {
    pub fn new(repo: R, auth: A) -> Self {
        Self { repo, auth }
    }

    pub fn handle(&self, request: &ListMotorcyclesRequest) -> ListMotorcyclesResponse {
        respond(OPERATION, self.execute(request))
    }

    fn execute(&self, _request: &ListMotorcyclesRequest) -> Result<Vec<Motorcycle>, ServiceError> {
        check_access(&self.auth, OPERATION)?;

        let motorcycles = self.repo.list()?;
        persist(&self.repo)?;
        Ok(motorcycles)
    }
}
