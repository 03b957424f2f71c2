//! Insert motorcycle use case.
//!
//! # Responsibility
//! - Add one new motorcycle for an authenticated admin caller.
//!
//! # Invariants
//! - A VIN already in the repository fails fast with `Conflict` before the
//!   entity is built.
//! - Request fields are validated by entity construction before the
//!   repository is asked to insert.

use crate::model::motorcycle::{MotorcycleDraft, MotorcycleId};
use crate::repo::motorcycle_repo::MotorcycleRepository;
use crate::security::auth_gate::AuthGate;
use crate::service::error::ServiceError;
use crate::service::pipeline::{check_access, persist, respond};
use crate::service::response::UseCaseResponse;
use serde::{Deserialize, Serialize};

const OPERATION: &str = "insert";

/// Request model for inserting a motorcycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertMotorcycleRequest {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
}

impl InsertMotorcycleRequest {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        vin: impl Into<String>,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            vin: vin.into(),
        }
    }

    fn to_draft(&self) -> MotorcycleDraft {
        MotorcycleDraft::new(
            self.make.as_str(),
            self.model.as_str(),
            self.year,
            self.vin.as_str(),
        )
    }
}

/// Carries the assigned id on success.
pub type InsertMotorcycleResponse = UseCaseResponse<MotorcycleId>;

/// Use-case interactor that adds a motorcycle to the repository.
pub struct InsertMotorcycleInteractor<R: MotorcycleRepository, A: AuthGate> {
    repo: R,
    auth: A,
}

impl<R: MotorcycleRepository, A: AuthGate> InsertMotorcycleInteractor<R, A> {
    pub fn new(repo: R, auth: A) -> Self {
        Self { repo, auth }
    }

    /// Runs the insert pipeline and returns its terminal response.
    pub fn handle(&self, request: &InsertMotorcycleRequest) -> InsertMotorcycleResponse {
        respond(OPERATION, self.execute(request))
    }

    fn execute(&self, request: &InsertMotorcycleRequest) -> Result<MotorcycleId, ServiceError> {
        check_access(&self.auth, OPERATION)?;

        if self.repo.find_by_vin(request.vin.as_str())?.is_some() {
            return Err(ServiceError::Conflict(format!(
                "insert operation failed due to a motorcycle with VIN {} already existing",
                request.vin
            )));
        }

        let candidate = request.to_draft().to_motorcycle()?;
        let stored = self.repo.insert(&candidate)?;
        persist(&self.repo)?;
        Ok(stored.id)
    }
}
