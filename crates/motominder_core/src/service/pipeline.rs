//! Steps shared by every interactor pipeline.
//!
//! Each use case runs `authenticate -> authorize -> execute -> persist ->
//! respond`; any failing step short-circuits straight to the response.

use crate::repo::motorcycle_repo::MotorcycleRepository;
use crate::security::auth_gate::{AuthGate, AuthorizationRole};
use crate::service::error::ServiceError;
use crate::service::response::UseCaseResponse;
use log::{info, warn};

/// Role every motorcycle use case requires.
pub const REQUIRED_ROLE: AuthorizationRole = AuthorizationRole::Admin;

/// Runs the authenticate and authorize steps.
///
/// Touches only the gate; the repository is never consulted here.
pub(crate) fn check_access<A: AuthGate>(
    auth: &A,
    operation: &'static str,
) -> Result<(), ServiceError> {
    if !auth.is_authenticated() {
        return Err(ServiceError::NotAuthenticated { operation });
    }
    if !auth.is_authorized(REQUIRED_ROLE) {
        return Err(ServiceError::NotAuthorized {
            operation,
            role: REQUIRED_ROLE,
        });
    }
    Ok(())
}

/// Runs the persist step; any hook failure is internal.
pub(crate) fn persist<R: MotorcycleRepository>(repo: &R) -> Result<(), ServiceError> {
    repo.save()
        .map_err(|err| ServiceError::Internal(err.to_string()))
}

/// Builds the terminal response and logs the pipeline outcome.
pub(crate) fn respond<T>(
    operation: &'static str,
    outcome: Result<T, ServiceError>,
) -> UseCaseResponse<T> {
    match outcome {
        Ok(payload) => {
            info!("event=motorcycle_{operation} module=service status=ok");
            UseCaseResponse::success(payload)
        }
        Err(err) => {
            warn!(
                "event=motorcycle_{operation} module=service status=error operation_status={} error={}",
                err.status(),
                err
            );
            UseCaseResponse::failure(err)
        }
    }
}
