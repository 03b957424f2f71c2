use motominder_core::{
    Motorcycle, MotorcycleDraft, MotorcycleField, MotorcycleId, MotorcycleValidationError,
    ViolationKind,
};

const VIN: &str = "01234567890123456";

#[test]
fn new_motorcycle_is_transient() {
    let motorcycle = Motorcycle::new("Honda", "Shadow", 2006, VIN).unwrap();

    assert_eq!(motorcycle.id, MotorcycleId::UNASSIGNED);
    assert!(!motorcycle.is_persisted());
    assert_eq!(motorcycle.make, "Honda");
    assert_eq!(motorcycle.model, "Shadow");
    assert_eq!(motorcycle.year, 2006);
    assert_eq!(motorcycle.vin, VIN);
    assert_eq!(motorcycle.created_utc, None);
    assert_eq!(motorcycle.modified_utc, None);
}

#[test]
fn rejects_ford_in_any_case() {
    for make in ["Ford", "ford", "FORD", "fOrD"] {
        let err = Motorcycle::new(make, "Falcon", 2006, VIN).unwrap_err();
        assert_eq!(
            err.violations()[0].kind,
            ViolationKind::RejectedManufacturer("Ford".to_string())
        );
        assert!(err.to_string().contains("make: cannot be Ford"));
    }
}

#[test]
fn make_and_model_lengths_are_bounded() {
    let twenty = "a".repeat(20);
    let twenty_one = "a".repeat(21);

    assert!(Motorcycle::new(twenty.as_str(), twenty.as_str(), 2006, VIN).is_ok());

    let err = Motorcycle::new(twenty_one.as_str(), "Shadow", 2006, VIN).unwrap_err();
    assert_eq!(
        err.violations()[0].kind,
        ViolationKind::TooLong {
            max: 20,
            actual: 21
        }
    );

    let err = Motorcycle::new("Honda", "", 2006, VIN).unwrap_err();
    assert!(err.has_violation(MotorcycleField::Model));
    assert!(!err.has_violation(MotorcycleField::Make));
}

#[test]
fn vin_must_have_exactly_seventeen_characters() {
    let err = Motorcycle::new("Honda", "Shadow", 2006, "0123456789012345").unwrap_err();
    assert_eq!(
        err.violations()[0].kind,
        ViolationKind::WrongLength {
            expected: 17,
            actual: 16
        }
    );

    let err = Motorcycle::new("Honda", "Shadow", 2006, "012345678901234567").unwrap_err();
    assert!(err.has_violation(MotorcycleField::Vin));

    let err = Motorcycle::new("Honda", "Shadow", 2006, "").unwrap_err();
    assert_eq!(err.violations()[0].kind, ViolationKind::Empty);
}

#[test]
fn collects_every_violation_in_field_order() {
    let err: MotorcycleValidationError = Motorcycle::new("", "", 1900, "short").unwrap_err();
    let fields: Vec<_> = err.violations().iter().map(|item| item.field).collect();
    assert_eq!(
        fields,
        vec![
            MotorcycleField::Make,
            MotorcycleField::Model,
            MotorcycleField::Year,
            MotorcycleField::Vin,
        ]
    );
}

#[test]
fn serialization_uses_camel_case_wire_fields() {
    let motorcycle = Motorcycle::new("Honda", "Shadow", 2006, VIN).unwrap();
    let json = serde_json::to_value(&motorcycle).unwrap();

    assert_eq!(json["id"], 0);
    assert_eq!(json["make"], "Honda");
    assert_eq!(json["vin"], VIN);
    assert!(json["createdUtc"].is_null());
    assert!(json["modifiedUtc"].is_null());

    let decoded: Motorcycle = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, motorcycle);
}

#[test]
fn deserialize_rejects_invalid_record() {
    let value = serde_json::json!({
        "id": 3,
        "make": "Ford",
        "model": "Falcon",
        "year": 2006,
        "vin": VIN
    });

    let err = serde_json::from_value::<Motorcycle>(value).unwrap_err();
    assert!(
        err.to_string().contains("make: cannot be Ford"),
        "unexpected error: {err}"
    );
}

#[test]
fn draft_builds_validated_motorcycle() {
    let draft = MotorcycleDraft::new("KTM", "350 EXC-F", 2018, VIN);
    let motorcycle = draft.to_motorcycle().unwrap();
    assert_eq!(motorcycle.model, "350 EXC-F");

    let invalid = MotorcycleDraft::new("KTM", "350 EXC-F", 2030, VIN);
    let err = invalid.to_motorcycle().unwrap_err();
    assert_eq!(
        err.violations()[0].kind,
        ViolationKind::OutOfRange {
            min: 1999,
            max: 2020,
            actual: 2030
        }
    );
}
