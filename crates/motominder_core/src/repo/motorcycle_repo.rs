//! Motorcycle repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the authoritative motorcycle collection.
//! - Enforce identity and VIN uniqueness on every mutation.
//!
//! # Invariants
//! - Ids are assigned from 1 upward and never reused, even after delete.
//! - No two stored records share an id or a VIN.
//! - A failed insert or update leaves the collection untouched.
//! - Records are held in insertion order, which is also ascending id order.

use crate::model::motorcycle::{Motorcycle, MotorcycleId, MotorcycleValidationError};
use chrono::Utc;
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for motorcycle persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(MotorcycleValidationError),
    DuplicateVin(String),
    DuplicateId(MotorcycleId),
    NotFound(MotorcycleId),
    Internal(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateVin(vin) => {
                write!(f, "a motorcycle with VIN {vin} already exists")
            }
            Self::DuplicateId(id) => write!(f, "a motorcycle with ID {id} already exists"),
            Self::NotFound(id) => write!(f, "motorcycle not found: {id}"),
            Self::Internal(message) => write!(f, "repository failure: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MotorcycleValidationError> for RepoError {
    fn from(value: MotorcycleValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for motorcycle CRUD operations.
pub trait MotorcycleRepository {
    /// Returns every record in insertion order; empty when nothing is stored.
    fn list(&self) -> RepoResult<Vec<Motorcycle>>;
    /// Persists a new record and returns it with its assigned id.
    fn insert(&self, candidate: &Motorcycle) -> RepoResult<Motorcycle>;
    /// Overwrites the mutable fields of the record at `id`.
    fn update(&self, id: MotorcycleId, candidate: &Motorcycle) -> RepoResult<Motorcycle>;
    fn delete(&self, id: MotorcycleId) -> RepoResult<()>;
    /// `Ok(None)` when absent; absence is not an error.
    fn find_by_id(&self, id: MotorcycleId) -> RepoResult<Option<Motorcycle>>;
    /// `Ok(None)` when absent; absence is not an error.
    fn find_by_vin(&self, vin: &str) -> RepoResult<Option<Motorcycle>>;
    /// Commit point for a future persistence boundary.
    fn save(&self) -> RepoResult<()>;

    fn exists_by_id(&self, id: MotorcycleId) -> RepoResult<bool> {
        Ok(self.find_by_id(id)?.is_some())
    }

    fn exists_by_vin(&self, vin: &str) -> RepoResult<bool> {
        Ok(self.find_by_vin(vin)?.is_some())
    }
}

impl<T: MotorcycleRepository + ?Sized> MotorcycleRepository for &T {
    fn list(&self) -> RepoResult<Vec<Motorcycle>> {
        (**self).list()
    }

    fn insert(&self, candidate: &Motorcycle) -> RepoResult<Motorcycle> {
        (**self).insert(candidate)
    }

    fn update(&self, id: MotorcycleId, candidate: &Motorcycle) -> RepoResult<Motorcycle> {
        (**self).update(id, candidate)
    }

    fn delete(&self, id: MotorcycleId) -> RepoResult<()> {
        (**self).delete(id)
    }

    fn find_by_id(&self, id: MotorcycleId) -> RepoResult<Option<Motorcycle>> {
        (**self).find_by_id(id)
    }

    fn find_by_vin(&self, vin: &str) -> RepoResult<Option<Motorcycle>> {
        (**self).find_by_vin(vin)
    }

    fn save(&self) -> RepoResult<()> {
        (**self).save()
    }

    fn exists_by_id(&self, id: MotorcycleId) -> RepoResult<bool> {
        (**self).exists_by_id(id)
    }

    fn exists_by_vin(&self, vin: &str) -> RepoResult<bool> {
        (**self).exists_by_vin(vin)
    }
}

impl<T: MotorcycleRepository + ?Sized> MotorcycleRepository for Arc<T> {
    fn list(&self) -> RepoResult<Vec<Motorcycle>> {
        (**self).list()
    }

    fn insert(&self, candidate: &Motorcycle) -> RepoResult<Motorcycle> {
        (**self).insert(candidate)
    }

    fn update(&self, id: MotorcycleId, candidate: &Motorcycle) -> RepoResult<Motorcycle> {
        (**self).update(id, candidate)
    }

    fn delete(&self, id: MotorcycleId) -> RepoResult<()> {
        (**self).delete(id)
    }

    fn find_by_id(&self, id: MotorcycleId) -> RepoResult<Option<Motorcycle>> {
        (**self).find_by_id(id)
    }

    fn find_by_vin(&self, vin: &str) -> RepoResult<Option<Motorcycle>> {
        (**self).find_by_vin(vin)
    }

    fn save(&self) -> RepoResult<()> {
        (**self).save()
    }

    fn exists_by_id(&self, id: MotorcycleId) -> RepoResult<bool> {
        (**self).exists_by_id(id)
    }

    fn exists_by_vin(&self, vin: &str) -> RepoResult<bool> {
        (**self).exists_by_vin(vin)
    }
}

#[derive(Debug, Default)]
struct RepoState {
    /// Insertion order; ascending id because ids are append-only.
    records: Vec<Motorcycle>,
    vin_index: BTreeMap<String, MotorcycleId>,
    /// Last id handed out; the next insert commits `last_id + 1`.
    last_id: u64,
}

impl RepoState {
    fn position_of(&self, id: MotorcycleId) -> Option<usize> {
        self.records
            .binary_search_by_key(&id, |record| record.id)
            .ok()
    }

    fn position_of_vin(&self, vin: &str) -> Option<usize> {
        self.vin_index
            .get(vin)
            .and_then(|id| self.position_of(*id))
    }
}

/// Process-memory motorcycle repository.
///
/// All state sits behind one mutex, so a shared instance keeps its
/// uniqueness and ordering invariants under concurrent callers.
#[derive(Debug, Default)]
pub struct InMemoryMotorcycleRepository {
    state: Mutex<RepoState>,
}

impl InMemoryMotorcycleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> RepoResult<usize> {
        Ok(self.lock()?.records.len())
    }

    pub fn is_empty(&self) -> RepoResult<bool> {
        Ok(self.lock()?.records.is_empty())
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, RepoState>> {
        self.state
            .lock()
            .map_err(|_| RepoError::Internal("motorcycle repository lock poisoned".to_string()))
    }
}

impl MotorcycleRepository for InMemoryMotorcycleRepository {
    fn list(&self) -> RepoResult<Vec<Motorcycle>> {
        Ok(self.lock()?.records.clone())
    }

    fn insert(&self, candidate: &Motorcycle) -> RepoResult<Motorcycle> {
        let mut state = self.lock()?;

        if candidate.id.is_assigned() && state.position_of(candidate.id).is_some() {
            warn!(
                "event=motorcycle_insert module=repo status=error error_code=duplicate_id id={}",
                candidate.id
            );
            return Err(RepoError::DuplicateId(candidate.id));
        }
        if state.vin_index.contains_key(candidate.vin.as_str()) {
            warn!(
                "event=motorcycle_insert module=repo status=error error_code=duplicate_vin vin={}",
                candidate.vin
            );
            return Err(RepoError::DuplicateVin(candidate.vin.clone()));
        }

        let mut record = candidate.clone();
        record.id = MotorcycleId::new(state.last_id + 1);
        record.created_utc = Some(Utc::now());
        record.modified_utc = None;
        if let Err(err) = record.validate() {
            warn!("event=motorcycle_insert module=repo status=error error_code=validation_failed");
            return Err(err.into());
        }

        state.last_id = record.id.get();
        state.vin_index.insert(record.vin.clone(), record.id);
        state.records.push(record.clone());

        info!(
            "event=motorcycle_insert module=repo status=ok id={} vin={}",
            record.id, record.vin
        );
        Ok(record)
    }

    fn update(&self, id: MotorcycleId, candidate: &Motorcycle) -> RepoResult<Motorcycle> {
        let mut state = self.lock()?;

        let Some(position) = state.position_of(id) else {
            warn!(
                "event=motorcycle_update module=repo status=error error_code=not_found id={id}"
            );
            return Err(RepoError::NotFound(id));
        };

        if let Some(owner) = state.vin_index.get(candidate.vin.as_str()) {
            if *owner != id {
                warn!(
                    "event=motorcycle_update module=repo status=error error_code=duplicate_vin id={id} vin={}",
                    candidate.vin
                );
                return Err(RepoError::DuplicateVin(candidate.vin.clone()));
            }
        }

        let stored = &state.records[position];
        let updated = Motorcycle {
            id: stored.id,
            make: candidate.make.clone(),
            model: candidate.model.clone(),
            year: candidate.year,
            vin: candidate.vin.clone(),
            created_utc: stored.created_utc,
            modified_utc: Some(Utc::now()),
        };
        if let Err(err) = updated.validate() {
            warn!(
                "event=motorcycle_update module=repo status=error error_code=validation_failed id={id}"
            );
            return Err(err.into());
        }

        let previous_vin = stored.vin.clone();
        if previous_vin != updated.vin {
            state.vin_index.remove(previous_vin.as_str());
            state.vin_index.insert(updated.vin.clone(), id);
        }
        state.records[position] = updated.clone();

        info!("event=motorcycle_update module=repo status=ok id={id}");
        Ok(updated)
    }

    fn delete(&self, id: MotorcycleId) -> RepoResult<()> {
        let mut state = self.lock()?;

        let Some(position) = state.position_of(id) else {
            warn!(
                "event=motorcycle_delete module=repo status=error error_code=not_found id={id}"
            );
            return Err(RepoError::NotFound(id));
        };

        let removed = state.records.remove(position);
        state.vin_index.remove(removed.vin.as_str());

        info!("event=motorcycle_delete module=repo status=ok id={id}");
        Ok(())
    }

    fn find_by_id(&self, id: MotorcycleId) -> RepoResult<Option<Motorcycle>> {
        let state = self.lock()?;
        Ok(state
            .position_of(id)
            .map(|position| state.records[position].clone()))
    }

    fn find_by_vin(&self, vin: &str) -> RepoResult<Option<Motorcycle>> {
        let state = self.lock()?;
        Ok(state
            .position_of_vin(vin)
            .map(|position| state.records[position].clone()))
    }

    fn save(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryMotorcycleRepository, MotorcycleRepository, RepoError};
    use crate::model::motorcycle::{Motorcycle, MotorcycleId};

    fn honda(vin: &str) -> Motorcycle {
        Motorcycle::new("Honda", "Shadow", 2006, vin).unwrap()
    }

    #[test]
    fn failed_validation_does_not_consume_an_id() {
        let repo = InMemoryMotorcycleRepository::new();
        let mut invalid = honda("01234567890123456");
        invalid.year = 1900;
        assert!(matches!(
            repo.insert(&invalid),
            Err(RepoError::Validation(_))
        ));

        let stored = repo.insert(&honda("01234567890123456")).unwrap();
        assert_eq!(stored.id, MotorcycleId::new(1));
    }

    #[test]
    fn vin_change_rekeys_the_index() {
        let repo = InMemoryMotorcycleRepository::new();
        let stored = repo.insert(&honda("01234567890123456")).unwrap();

        let changed = honda("ABCDEFGHIJKLMNOPQ");
        repo.update(stored.id, &changed).unwrap();

        assert!(repo.find_by_vin("01234567890123456").unwrap().is_none());
        let found = repo.find_by_vin("ABCDEFGHIJKLMNOPQ").unwrap().unwrap();
        assert_eq!(found.id, stored.id);

        // The old VIN is free again.
        let other = repo.insert(&honda("01234567890123456")).unwrap();
        assert_eq!(other.id, MotorcycleId::new(2));
    }

    #[test]
    fn len_tracks_inserts_and_deletes() {
        let repo = InMemoryMotorcycleRepository::new();
        assert!(repo.is_empty().unwrap());
        let stored = repo.insert(&honda("01234567890123456")).unwrap();
        assert_eq!(repo.len().unwrap(), 1);
        repo.delete(stored.id).unwrap();
        assert!(repo.is_empty().unwrap());
    }
}
