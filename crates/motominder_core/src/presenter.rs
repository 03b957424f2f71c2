//! Use-case response to view model translation.
//!
//! # Responsibility
//! - Turn interactor responses into serializable view models for transport
//!   adapters.
//! - Own the status code mapping each transport must honor.
//!
//! # Invariants
//! - Error kinds are exposed only as a message string, never as type names.
//! - A view model carries a payload or an error, matching its response.

use crate::model::motorcycle::{Motorcycle, MotorcycleId};
use crate::model::operation_status::OperationStatus;
use crate::service::delete_motorcycle::DeleteMotorcycleResponse;
use crate::service::get_motorcycle::GetMotorcycleResponse;
use crate::service::insert_motorcycle::InsertMotorcycleResponse;
use crate::service::list_motorcycles::ListMotorcyclesResponse;
use crate::service::response::UseCaseResponse;
use crate::service::update_motorcycle::UpdateMotorcycleResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Collection path used to build `Location` values.
pub const MOTORCYCLES_PATH: &str = "/motorcycles";

/// Use case a view model was produced for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCase {
    Insert,
    Get,
    List,
    Update,
    Delete,
}

/// Maps a use case outcome onto an HTTP status code.
///
/// Update reports a VIN clash as a bad request; only Insert answers 409.
pub fn status_code(use_case: UseCase, status: OperationStatus) -> u16 {
    match status {
        OperationStatus::Ok => match use_case {
            UseCase::Insert => 201,
            UseCase::Get | UseCase::List => 200,
            UseCase::Update | UseCase::Delete => 204,
        },
        OperationStatus::ValidationFailed => 400,
        OperationStatus::NotAuthenticated => 401,
        OperationStatus::NotAuthorized => 403,
        OperationStatus::NotFound => 404,
        OperationStatus::Conflict => match use_case {
            UseCase::Update => 400,
            _ => 409,
        },
        OperationStatus::InternalError => 500,
    }
}

/// Location of one stored motorcycle.
pub fn motorcycle_location(id: MotorcycleId) -> String {
    format!("{MOTORCYCLES_PATH}/{id}")
}

/// Read-only wire projection of a stored motorcycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotorcycleDto {
    pub id: MotorcycleId,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub created_utc: Option<DateTime<Utc>>,
    pub modified_utc: Option<DateTime<Utc>>,
}

impl From<&Motorcycle> for MotorcycleDto {
    fn from(value: &Motorcycle) -> Self {
        Self {
            id: value.id,
            make: value.make.clone(),
            model: value.model.clone(),
            year: value.year,
            vin: value.vin.clone(),
            created_utc: value.created_utc,
            modified_utc: value.modified_utc,
        }
    }
}

/// Transport-ready view of one use case outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel<T> {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub payload: Option<T>,
    pub error: Option<String>,
}

pub fn present_insert(response: &InsertMotorcycleResponse) -> ViewModel<MotorcycleId> {
    let mut view = present(
        UseCase::Insert,
        response,
        |id| *id,
        |_| "Successfully created the new motorcycle.".to_string(),
        "Failed to create the new motorcycle.",
    );
    view.location = response.payload().map(|id| motorcycle_location(*id));
    view
}

pub fn present_get(response: &GetMotorcycleResponse) -> ViewModel<MotorcycleDto> {
    present(
        UseCase::Get,
        response,
        |motorcycle| MotorcycleDto::from(motorcycle),
        |motorcycle| {
            format!(
                "Successfully retrieved the motorcycle with ID {}.",
                motorcycle.id
            )
        },
        "Failed to get the motorcycle.",
    )
}

pub fn present_list(response: &ListMotorcyclesResponse) -> ViewModel<Vec<MotorcycleDto>> {
    present(
        UseCase::List,
        response,
        |motorcycles| motorcycles.iter().map(MotorcycleDto::from).collect(),
        |motorcycles| {
            format!(
                "Successfully retrieved the list of {} motorcycles.",
                motorcycles.len()
            )
        },
        "Failed to get the list of motorcycles.",
    )
}

pub fn present_update(response: &UpdateMotorcycleResponse) -> ViewModel<MotorcycleId> {
    present(
        UseCase::Update,
        response,
        |id| *id,
        |id| format!("Successfully updated the motorcycle with ID {id}."),
        "Failed to update the motorcycle.",
    )
}

pub fn present_delete(response: &DeleteMotorcycleResponse) -> ViewModel<MotorcycleId> {
    present(
        UseCase::Delete,
        response,
        |id| *id,
        |id| format!("Successfully deleted the motorcycle with ID {id}."),
        "Failed to delete the motorcycle.",
    )
}

fn present<T, U>(
    use_case: UseCase,
    response: &UseCaseResponse<T>,
    project: impl FnOnce(&T) -> U,
    success_message: impl FnOnce(&T) -> String,
    failure_message: &str,
) -> ViewModel<U> {
    let status_code = status_code(use_case, response.status());
    match (response.payload(), response.error()) {
        (Some(payload), _) => ViewModel {
            status_code,
            message: success_message(payload),
            location: None,
            payload: Some(project(payload)),
            error: None,
        },
        (None, error) => ViewModel {
            status_code,
            message: failure_message.to_string(),
            location: None,
            payload: None,
            error: error.map(ToString::to_string),
        },
    }
}
