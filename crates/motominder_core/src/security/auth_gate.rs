//! Authentication and authorization gate consulted by every use case.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Authorization role granted to an authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AuthorizationRole {
    /// Administrative access; required by every motorcycle use case.
    Admin,
    Accounting,
    General,
}

/// Config string value for the admin role.
pub const AUTHORIZATION_ROLE_ADMIN: &str = "admin";
/// Config string value for the accounting role.
pub const AUTHORIZATION_ROLE_ACCOUNTING: &str = "accounting";
/// Config string value for the general role.
pub const AUTHORIZATION_ROLE_GENERAL: &str = "general";

impl AuthorizationRole {
    /// Stable string id used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => AUTHORIZATION_ROLE_ADMIN,
            Self::Accounting => AUTHORIZATION_ROLE_ACCOUNTING,
            Self::General => AUTHORIZATION_ROLE_GENERAL,
        }
    }
}

impl Display for AuthorizationRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one role from its configuration string, ignoring ASCII case.
pub fn parse_authorization_role(value: &str) -> Option<AuthorizationRole> {
    match value.trim().to_ascii_lowercase().as_str() {
        AUTHORIZATION_ROLE_ADMIN => Some(AuthorizationRole::Admin),
        AUTHORIZATION_ROLE_ACCOUNTING => Some(AuthorizationRole::Accounting),
        AUTHORIZATION_ROLE_GENERAL => Some(AuthorizationRole::General),
        _ => None,
    }
}

/// Capability checks used as use-case preconditions.
pub trait AuthGate {
    fn is_authenticated(&self) -> bool;
    /// `false` for any role the gate has no grant for.
    fn is_authorized(&self, role: AuthorizationRole) -> bool;
}

impl<T: AuthGate + ?Sized> AuthGate for &T {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }

    fn is_authorized(&self, role: AuthorizationRole) -> bool {
        (**self).is_authorized(role)
    }
}

impl<T: AuthGate + ?Sized> AuthGate for Arc<T> {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }

    fn is_authorized(&self, role: AuthorizationRole) -> bool {
        (**self).is_authorized(role)
    }
}

/// Auth gate construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthGateError {
    /// No role mapping was configured at all.
    MissingRoles,
}

impl Display for AuthGateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRoles => write!(f, "auth gate requires a role mapping"),
        }
    }
}

impl Error for AuthGateError {}

/// Auth gate with a fixed authentication flag and role grants.
///
/// Login is not modeled; both answers are decided at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticAuthGate {
    authenticated: bool,
    roles: BTreeMap<AuthorizationRole, bool>,
}

impl StaticAuthGate {
    /// Creates a gate from an authentication flag and a role mapping.
    ///
    /// # Errors
    /// - `MissingRoles` when `roles` is `None`. An empty map is accepted and
    ///   grants nothing.
    pub fn new(
        authenticated: bool,
        roles: Option<BTreeMap<AuthorizationRole, bool>>,
    ) -> Result<Self, AuthGateError> {
        let roles = roles.ok_or(AuthGateError::MissingRoles)?;
        Ok(Self {
            authenticated,
            roles,
        })
    }

    /// Authenticated gate holding exactly the given roles.
    pub fn granting(roles: &[AuthorizationRole]) -> Self {
        Self {
            authenticated: true,
            roles: roles.iter().map(|role| (*role, true)).collect(),
        }
    }

    /// Gate for an unauthenticated caller with no grants.
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            roles: BTreeMap::new(),
        }
    }

    /// Roles currently granted, in role order.
    pub fn granted_roles(&self) -> Vec<AuthorizationRole> {
        self.roles
            .iter()
            .filter(|(_, granted)| **granted)
            .map(|(role, _)| *role)
            .collect()
    }
}

impl AuthGate for StaticAuthGate {
    fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    fn is_authorized(&self, role: AuthorizationRole) -> bool {
        self.roles.get(&role).copied().unwrap_or(false)
    }
}
