//! Domain model for motorcycle records.
//!
//! # Responsibility
//! - Define the canonical motorcycle record and its field rules.
//! - Define the operation status shared by every use case response.
//!
//! # Invariants
//! - A `Motorcycle` that passed `validate()` satisfies every field rule.
//! - Identity is assigned by the repository, never by callers.

pub mod constants;
pub mod motorcycle;
pub mod operation_status;
