//! Repository layer abstractions and in-memory implementation.
//!
//! # Responsibility
//! - Define the data access contract consumed by use-case interactors.
//! - Keep storage details out of use-case orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Motorcycle::validate()` before mutation.
//! - Absence on lookup is `Ok(None)`; `NotFound` is reserved for mutations.

pub mod motorcycle_repo;
