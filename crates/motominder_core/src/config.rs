//! Core configuration loading.
//!
//! # Responsibility
//! - Parse the JSON configuration consumed by composition roots.
//! - Build the auth gate and logging settings from it.
//!
//! # Invariants
//! - A missing `roles` key stays `None` so the auth gate rejects it.
//! - Unknown role names are rejected, never ignored.

use crate::logging::default_log_level;
use crate::security::auth_gate::{
    parse_authorization_role, AuthGateError, AuthorizationRole, StaticAuthGate,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Configuration loading errors.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    UnknownRole(String),
    AuthGate(AuthGateError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::UnknownRole(value) => write!(f, "unknown authorization role: {value}"),
            Self::AuthGate(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::UnknownRole(_) => None,
            Self::AuthGate(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<AuthGateError> for ConfigError {
    fn from(value: AuthGateError) -> Self {
        Self::AuthGate(value)
    }
}

/// Root configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoreConfig {
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

/// Authentication flag and role grants for the static auth gate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    pub authenticated: bool,
    /// Role name (`admin|accounting|general`) to grant flag.
    pub roles: Option<BTreeMap<String, bool>>,
}

/// Logging bootstrap settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    /// Absolute directory for rolling log files; logging stays off when unset.
    pub log_dir: Option<String>,
}

impl LoggingConfig {
    /// Configured level, or the build-mode default.
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or_else(|| default_log_level())
    }
}

impl CoreConfig {
    pub fn from_json_str(value: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(value)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Builds the auth gate described by `auth`.
    ///
    /// # Errors
    /// - `UnknownRole` for a role name outside `admin|accounting|general`.
    /// - `AuthGate(MissingRoles)` when `roles` is absent.
    pub fn build_auth_gate(&self) -> Result<StaticAuthGate, ConfigError> {
        let roles = match &self.auth.roles {
            Some(entries) => {
                let mut roles = BTreeMap::<AuthorizationRole, bool>::new();
                for (name, granted) in entries {
                    let role = parse_authorization_role(name)
                        .ok_or_else(|| ConfigError::UnknownRole(name.clone()))?;
                    roles.insert(role, *granted);
                }
                Some(roles)
            }
            None => None,
        };

        Ok(StaticAuthGate::new(self.auth.authenticated, roles)?)
    }
}
