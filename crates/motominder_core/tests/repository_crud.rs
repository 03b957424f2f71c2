use motominder_core::{
    InMemoryMotorcycleRepository, Motorcycle, MotorcycleId, MotorcycleRepository, RepoError,
};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const VIN: &str = "01234567890123456";

fn motorcycle(make: &str, vin: &str) -> Motorcycle {
    Motorcycle::new(make, "Shadow", 2006, vin).unwrap()
}

fn vin_for(index: u64) -> String {
    format!("{index:017}")
}

#[test]
fn empty_repository_lists_empty_collection() {
    let repo = InMemoryMotorcycleRepository::new();
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn insert_assigns_id_and_created_timestamp() {
    let repo = InMemoryMotorcycleRepository::new();

    let stored = repo.insert(&motorcycle("Honda", VIN)).unwrap();

    assert_eq!(stored.id, MotorcycleId::new(1));
    assert!(stored.created_utc.is_some());
    assert_eq!(stored.modified_utc, None);

    let listed = repo.list().unwrap();
    assert_eq!(listed, vec![stored]);
}

#[test]
fn duplicate_vin_is_a_conflict_and_leaves_collection_unchanged() {
    let repo = InMemoryMotorcycleRepository::new();
    repo.insert(&motorcycle("Honda", VIN)).unwrap();
    let before = repo.list().unwrap();

    let err = repo.insert(&motorcycle("Yamaha", VIN)).unwrap_err();

    assert_eq!(err, RepoError::DuplicateVin(VIN.to_string()));
    assert_eq!(repo.list().unwrap(), before);
}

#[test]
fn duplicate_assigned_id_is_a_conflict() {
    let repo = InMemoryMotorcycleRepository::new();
    let stored = repo.insert(&motorcycle("Honda", VIN)).unwrap();

    let mut candidate = motorcycle("Yamaha", &vin_for(2));
    candidate.id = stored.id;
    let err = repo.insert(&candidate).unwrap_err();

    assert_eq!(err, RepoError::DuplicateId(stored.id));
    assert_eq!(repo.list().unwrap().len(), 1);
}

#[test]
fn invalid_candidate_is_never_persisted() {
    let repo = InMemoryMotorcycleRepository::new();

    let mut candidate = motorcycle("Honda", VIN);
    candidate.make = "FORD".to_string();
    let err = repo.insert(&candidate).unwrap_err();

    assert!(matches!(err, RepoError::Validation(_)));
    assert!(repo.list().unwrap().is_empty());
    assert!(!repo.exists_by_vin(VIN).unwrap());
}

#[test]
fn ids_are_monotonic_and_never_reused_after_delete() {
    let repo = InMemoryMotorcycleRepository::new();

    let first = repo.insert(&motorcycle("Honda", &vin_for(1))).unwrap();
    let second = repo.insert(&motorcycle("Honda", &vin_for(2))).unwrap();
    repo.delete(second.id).unwrap();
    let third = repo.insert(&motorcycle("Honda", &vin_for(3))).unwrap();
    repo.delete(first.id).unwrap();
    let fourth = repo.insert(&motorcycle("Honda", &vin_for(1))).unwrap();

    let ids: Vec<u64> = [first, second, third, fourth]
        .iter()
        .map(|item| item.id.get())
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn delete_preserves_order_of_remaining_records() {
    let repo = InMemoryMotorcycleRepository::new();
    for index in 1..=4 {
        repo.insert(&motorcycle("Honda", &vin_for(index))).unwrap();
    }

    repo.delete(MotorcycleId::new(2)).unwrap();

    let ids: Vec<u64> = repo.list().unwrap().iter().map(|item| item.id.get()).collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert!(repo.find_by_id(MotorcycleId::new(3)).unwrap().is_some());
    assert!(repo.find_by_id(MotorcycleId::new(2)).unwrap().is_none());
}

#[test]
fn delete_missing_id_is_not_found_and_leaves_list_unchanged() {
    let repo = InMemoryMotorcycleRepository::new();
    repo.insert(&motorcycle("Honda", VIN)).unwrap();
    let before = repo.list().unwrap();

    let err = repo.delete(MotorcycleId::new(42)).unwrap_err();

    assert_eq!(err, RepoError::NotFound(MotorcycleId::new(42)));
    assert_eq!(repo.list().unwrap(), before);
}

#[test]
fn find_on_empty_repository_is_absent_not_error() {
    let repo = InMemoryMotorcycleRepository::new();

    assert_eq!(repo.find_by_id(MotorcycleId::new(999)).unwrap(), None);
    assert_eq!(repo.find_by_vin(VIN).unwrap(), None);
    assert!(!repo.exists_by_id(MotorcycleId::new(999)).unwrap());
    assert!(!repo.exists_by_vin(VIN).unwrap());
}

#[test]
fn find_by_vin_and_id_locate_the_same_record() {
    let repo = InMemoryMotorcycleRepository::new();
    for index in 1..=25 {
        repo.insert(&motorcycle("Honda", &vin_for(index))).unwrap();
    }

    let by_vin = repo.find_by_vin(&vin_for(17)).unwrap().unwrap();
    let by_id = repo.find_by_id(MotorcycleId::new(17)).unwrap().unwrap();

    assert_eq!(by_vin, by_id);
    assert!(repo.exists_by_id(MotorcycleId::new(25)).unwrap());
    assert!(repo.exists_by_vin(&vin_for(1)).unwrap());
}

#[test]
fn update_overwrites_fields_in_place() {
    let repo = InMemoryMotorcycleRepository::new();
    let first = repo.insert(&motorcycle("Honda", &vin_for(1))).unwrap();
    repo.insert(&motorcycle("Honda", &vin_for(2))).unwrap();

    let changes = Motorcycle::new("Suzuki", "Bandit", 2010, vin_for(1)).unwrap();
    let updated = repo.update(first.id, &changes).unwrap();

    assert_eq!(updated.id, first.id);
    assert_eq!(updated.created_utc, first.created_utc);
    assert!(updated.modified_utc.is_some());
    assert_eq!(updated.make, "Suzuki");

    let listed = repo.list().unwrap();
    assert_eq!(listed[0], updated);
    assert_eq!(listed.len(), 2);
}

#[test]
fn update_missing_id_is_not_found() {
    let repo = InMemoryMotorcycleRepository::new();

    let err = repo
        .update(MotorcycleId::new(5), &motorcycle("Honda", VIN))
        .unwrap_err();

    assert_eq!(err, RepoError::NotFound(MotorcycleId::new(5)));
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn update_with_invalid_fields_does_not_commit() {
    let repo = InMemoryMotorcycleRepository::new();
    let stored = repo.insert(&motorcycle("Honda", VIN)).unwrap();

    let mut changes = motorcycle("Honda", VIN);
    changes.year = 2021;
    let err = repo.update(stored.id, &changes).unwrap_err();

    assert!(matches!(err, RepoError::Validation(_)));
    assert_eq!(repo.find_by_id(stored.id).unwrap(), Some(stored));
}

#[test]
fn update_rejects_vin_owned_by_another_record() {
    let repo = InMemoryMotorcycleRepository::new();
    let first = repo.insert(&motorcycle("Honda", &vin_for(1))).unwrap();
    let second = repo.insert(&motorcycle("Honda", &vin_for(2))).unwrap();

    let err = repo
        .update(second.id, &motorcycle("Honda", &vin_for(1)))
        .unwrap_err();

    assert_eq!(err, RepoError::DuplicateVin(vin_for(1)));
    assert_eq!(repo.find_by_id(first.id).unwrap(), Some(first));
    assert_eq!(repo.find_by_id(second.id).unwrap(), Some(second));
}

#[test]
fn deleting_frees_the_vin_for_reuse() {
    let repo = InMemoryMotorcycleRepository::new();
    let stored = repo.insert(&motorcycle("Honda", VIN)).unwrap();
    repo.delete(stored.id).unwrap();

    let reinserted = repo.insert(&motorcycle("Honda", VIN)).unwrap();
    assert_eq!(reinserted.id, MotorcycleId::new(2));
}

#[test]
fn save_always_succeeds() {
    let repo = InMemoryMotorcycleRepository::new();
    repo.save().unwrap();
    repo.insert(&motorcycle("Honda", VIN)).unwrap();
    repo.save().unwrap();
}

#[test]
fn shared_repository_keeps_uniqueness_under_concurrent_inserts() {
    let repo = Arc::new(InMemoryMotorcycleRepository::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = Arc::clone(&repo);
            thread::spawn(move || {
                // Every worker races for the same 25 VINs.
                for index in 0..25u64 {
                    let _ = repo.insert(&motorcycle("Honda", &vin_for(index)));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let records = repo.list().unwrap();
    assert_eq!(records.len(), 25);
    let vins: HashSet<_> = records.iter().map(|item| item.vin.clone()).collect();
    assert_eq!(vins.len(), 25);
    let ids: Vec<u64> = records.iter().map(|item| item.id.get()).collect();
    assert_eq!(ids, (1..=25).collect::<Vec<_>>());
}
