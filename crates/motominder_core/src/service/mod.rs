//! Motorcycle use-case interactors.
//!
//! # Responsibility
//! - Wrap every repository operation with authentication, authorization and
//!   entity validation.
//! - Translate repository failures into use-case responses.
//!
//! # Invariants
//! - Authentication and authorization run before any repository access.
//! - A failed execute step never reaches the persist step.
//! - Responses carry a payload or an error, never both.

pub mod delete_motorcycle;
pub mod error;
pub mod get_motorcycle;
pub mod insert_motorcycle;
pub mod list_motorcycles;
pub mod pipeline;
pub mod response;
pub mod update_motorcycle;
