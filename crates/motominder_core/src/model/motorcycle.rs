//! Motorcycle domain model.
//!
//! # Responsibility
//! - Define the canonical motorcycle record stored by repositories.
//! - Apply field-level business rules in a fixed, explicit order.
//!
//! # Invariants
//! - `id` is `MotorcycleId::UNASSIGNED` until a repository persists the record.
//! - `created_utc` and `modified_utc` are stamped by repositories only.
//! - Deserialization re-runs validation; invalid records never materialize.

use crate::model::constants::{
    MAX_MAKE_LENGTH, MAX_MODEL_LENGTH, MAX_YEAR, MIN_MAKE_LENGTH, MIN_MODEL_LENGTH, MIN_YEAR,
    REJECTED_MANUFACTURER, VIN_LENGTH,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Repository-assigned identity of a motorcycle.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MotorcycleId(u64);

impl MotorcycleId {
    /// Identity carried by a record that has not been persisted yet.
    pub const UNASSIGNED: Self = Self(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns whether a repository has assigned this identity.
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl Display for MotorcycleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MotorcycleId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Field of a motorcycle that can violate a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorcycleField {
    Make,
    Model,
    Year,
    Vin,
}

impl MotorcycleField {
    /// Stable wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Make => "make",
            Self::Model => "model",
            Self::Year => "year",
            Self::Vin => "vin",
        }
    }
}

/// The rule a field broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    Empty,
    TooLong { max: usize, actual: usize },
    OutOfRange { min: i32, max: i32, actual: i32 },
    WrongLength { expected: usize, actual: usize },
    RejectedManufacturer(String),
}

/// One violated rule on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: MotorcycleField,
    pub kind: ViolationKind,
}

impl Display for FieldViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let field = self.field.as_str();
        match &self.kind {
            ViolationKind::Empty => write!(f, "{field}: cannot be blank"),
            ViolationKind::TooLong { max, actual } => {
                write!(f, "{field}: must be at most {max} characters (got {actual})")
            }
            ViolationKind::OutOfRange { min, max, actual } => {
                write!(f, "{field}: must be between {min} and {max} (got {actual})")
            }
            ViolationKind::WrongLength { expected, actual } => {
                write!(f, "{field}: must contain {expected} characters (got {actual})")
            }
            ViolationKind::RejectedManufacturer(value) => {
                write!(f, "{field}: cannot be {value}")
            }
        }
    }
}

/// Every rule a motorcycle candidate violated, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotorcycleValidationError {
    violations: Vec<FieldViolation>,
}

impl MotorcycleValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns whether `field` has at least one violation.
    pub fn has_violation(&self, field: MotorcycleField) -> bool {
        self.violations.iter().any(|item| item.field == field)
    }
}

impl Display for MotorcycleValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid motorcycle: ")?;
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl Error for MotorcycleValidationError {}

/// Canonical motorcycle record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UncheckedMotorcycle")]
pub struct Motorcycle {
    /// `UNASSIGNED` until inserted into a repository.
    pub id: MotorcycleId,
    pub make: String,
    pub model: String,
    pub year: i32,
    /// Natural key; unique within one repository.
    pub vin: String,
    /// Stamped once by the repository on insert.
    pub created_utc: Option<DateTime<Utc>>,
    /// Stamped by the repository on every successful update.
    pub modified_utc: Option<DateTime<Utc>>,
}

impl Motorcycle {
    /// Creates a transient motorcycle and validates every field.
    ///
    /// # Errors
    /// - Returns all violated rules when any field is invalid.
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        vin: impl Into<String>,
    ) -> Result<Self, MotorcycleValidationError> {
        let motorcycle = Self {
            id: MotorcycleId::UNASSIGNED,
            make: make.into(),
            model: model.into(),
            year,
            vin: vin.into(),
            created_utc: None,
            modified_utc: None,
        };
        motorcycle.validate()?;
        Ok(motorcycle)
    }

    /// Checks the record against all field rules.
    ///
    /// Rules run in the order `make`, `model`, `year`, `vin`, and every
    /// violation is collected instead of stopping at the first.
    pub fn validate(&self) -> Result<(), MotorcycleValidationError> {
        let mut violations = Vec::new();
        check_make(&self.make, &mut violations);
        check_length(
            MotorcycleField::Model,
            &self.model,
            MIN_MODEL_LENGTH,
            MAX_MODEL_LENGTH,
            &mut violations,
        );
        check_year(self.year, &mut violations);
        check_vin(&self.vin, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(MotorcycleValidationError { violations })
        }
    }

    /// Returns whether a repository has persisted this record.
    pub fn is_persisted(&self) -> bool {
        self.id.is_assigned()
    }
}

/// Caller-supplied mutable fields of a motorcycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotorcycleDraft {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
}

impl MotorcycleDraft {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        vin: impl Into<String>,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            vin: vin.into(),
        }
    }

    /// Builds a validated transient motorcycle from the draft.
    pub fn to_motorcycle(&self) -> Result<Motorcycle, MotorcycleValidationError> {
        Motorcycle::new(
            self.make.as_str(),
            self.model.as_str(),
            self.year,
            self.vin.as_str(),
        )
    }
}

fn check_make(value: &str, violations: &mut Vec<FieldViolation>) {
    let before = violations.len();
    check_length(
        MotorcycleField::Make,
        value,
        MIN_MAKE_LENGTH,
        MAX_MAKE_LENGTH,
        violations,
    );
    if violations.len() == before && value.eq_ignore_ascii_case(REJECTED_MANUFACTURER) {
        violations.push(FieldViolation {
            field: MotorcycleField::Make,
            kind: ViolationKind::RejectedManufacturer(REJECTED_MANUFACTURER.to_string()),
        });
    }
}

fn check_length(
    field: MotorcycleField,
    value: &str,
    min: usize,
    max: usize,
    violations: &mut Vec<FieldViolation>,
) {
    let actual = value.chars().count();
    if actual < min {
        violations.push(FieldViolation {
            field,
            kind: ViolationKind::Empty,
        });
    } else if actual > max {
        violations.push(FieldViolation {
            field,
            kind: ViolationKind::TooLong { max, actual },
        });
    }
}

fn check_year(value: i32, violations: &mut Vec<FieldViolation>) {
    if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
        violations.push(FieldViolation {
            field: MotorcycleField::Year,
            kind: ViolationKind::OutOfRange {
                min: MIN_YEAR,
                max: MAX_YEAR,
                actual: value,
            },
        });
    }
}

fn check_vin(value: &str, violations: &mut Vec<FieldViolation>) {
    let actual = value.chars().count();
    if actual == 0 {
        violations.push(FieldViolation {
            field: MotorcycleField::Vin,
            kind: ViolationKind::Empty,
        });
    } else if actual != VIN_LENGTH {
        violations.push(FieldViolation {
            field: MotorcycleField::Vin,
            kind: ViolationKind::WrongLength {
                expected: VIN_LENGTH,
                actual,
            },
        });
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UncheckedMotorcycle {
    #[serde(default)]
    id: MotorcycleId,
    make: String,
    model: String,
    year: i32,
    vin: String,
    #[serde(default)]
    created_utc: Option<DateTime<Utc>>,
    #[serde(default)]
    modified_utc: Option<DateTime<Utc>>,
}

impl TryFrom<UncheckedMotorcycle> for Motorcycle {
    type Error = MotorcycleValidationError;

    fn try_from(value: UncheckedMotorcycle) -> Result<Self, Self::Error> {
        let motorcycle = Self {
            id: value.id,
            make: value.make,
            model: value.model,
            year: value.year,
            vin: value.vin,
            created_utc: value.created_utc,
            modified_utc: value.modified_utc,
        };
        motorcycle.validate()?;
        Ok(motorcycle)
    }
}
