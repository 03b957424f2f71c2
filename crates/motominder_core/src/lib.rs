//! Core domain logic for MotoMinder.
//! This crate is the single source of truth for motorcycle record invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod repo;
pub mod security;
pub mod service;

pub use config::{AuthConfig, ConfigError, CoreConfig, LoggingConfig};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::motorcycle::{
    FieldViolation, Motorcycle, MotorcycleDraft, MotorcycleField, MotorcycleId,
    MotorcycleValidationError, ViolationKind,
};
pub use model::operation_status::OperationStatus;
pub use presenter::{
    present_delete, present_get, present_insert, present_list, present_update, status_code,
    MotorcycleDto, UseCase, ViewModel,
};
pub use repo::motorcycle_repo::{
    InMemoryMotorcycleRepository, MotorcycleRepository, RepoError, RepoResult,
};
pub use security::auth_gate::{
    parse_authorization_role, AuthGate, AuthGateError, AuthorizationRole, StaticAuthGate,
};
pub use service::delete_motorcycle::{
    DeleteMotorcycleInteractor, DeleteMotorcycleRequest, DeleteMotorcycleResponse,
};
pub use service::error::ServiceError;
pub use service::get_motorcycle::{
    GetMotorcycleInteractor, GetMotorcycleRequest, GetMotorcycleResponse,
};
pub use service::insert_motorcycle::{
    InsertMotorcycleInteractor, InsertMotorcycleRequest, InsertMotorcycleResponse,
};
pub use service::list_motorcycles::{
    ListMotorcyclesInteractor, ListMotorcyclesRequest, ListMotorcyclesResponse,
};
pub use service::pipeline::REQUIRED_ROLE;
pub use service::response::UseCaseResponse;
pub use service::update_motorcycle::{
    UpdateMotorcycleInteractor, UpdateMotorcycleRequest, UpdateMotorcycleResponse,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
