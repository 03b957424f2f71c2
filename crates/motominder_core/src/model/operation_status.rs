//! Outcome status carried by every use case response.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Terminal status of one use case invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationStatus {
    /// The operation completed.
    Ok,
    /// A field rule was violated.
    ValidationFailed,
    /// A record with the same VIN or id already exists.
    Conflict,
    /// No record exists at the requested id.
    NotFound,
    /// The caller is not authenticated.
    NotAuthenticated,
    /// The caller lacks the required role.
    NotAuthorized,
    /// Unexpected failure, e.g. the persistence hook failed.
    InternalError,
}

impl OperationStatus {
    /// Stable machine-readable name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::ValidationFailed => "validation_failed",
            Self::Conflict => "conflict",
            Self::NotFound => "not_found",
            Self::NotAuthenticated => "not_authenticated",
            Self::NotAuthorized => "not_authorized",
            Self::InternalError => "internal_error",
        }
    }

    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl Display for OperationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::OperationStatus;

    #[test]
    fn serializes_as_snake_case() {
        let value = serde_json::to_value(OperationStatus::NotAuthenticated).unwrap();
        assert_eq!(value, "not_authenticated");
        assert_eq!(OperationStatus::NotAuthenticated.as_str(), "not_authenticated");
    }

    #[test]
    fn only_ok_is_ok() {
        assert!(OperationStatus::Ok.is_ok());
        assert!(!OperationStatus::Conflict.is_ok());
    }
}
