//! Authentication and authorization contracts.
//!
//! # Responsibility
//! - Answer whether the caller is authenticated and holds a role.
//!
//! # Invariants
//! - An absent role mapping is a configuration error, never an implicit deny.
//! - Checks never fail; unknown roles answer `false`.

pub mod auth_gate;
