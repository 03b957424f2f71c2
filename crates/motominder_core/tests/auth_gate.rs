use motominder_core::{AuthGate, AuthGateError, AuthorizationRole, StaticAuthGate};
use std::collections::BTreeMap;
use std::sync::Arc;

#[test]
fn missing_role_mapping_is_a_construction_error() {
    let err = StaticAuthGate::new(true, None).unwrap_err();
    assert_eq!(err, AuthGateError::MissingRoles);
}

#[test]
fn empty_role_mapping_grants_nothing() {
    let gate = StaticAuthGate::new(true, Some(BTreeMap::new())).unwrap();

    assert!(gate.is_authenticated());
    for role in [
        AuthorizationRole::Admin,
        AuthorizationRole::Accounting,
        AuthorizationRole::General,
    ] {
        assert!(!gate.is_authorized(role));
    }
}

#[test]
fn authorization_follows_the_configured_flag_per_role() {
    let roles = BTreeMap::from([
        (AuthorizationRole::Admin, false),
        (AuthorizationRole::General, true),
    ]);
    let gate = StaticAuthGate::new(true, Some(roles)).unwrap();

    assert!(!gate.is_authorized(AuthorizationRole::Admin));
    assert!(gate.is_authorized(AuthorizationRole::General));
    assert!(!gate.is_authorized(AuthorizationRole::Accounting));
    assert_eq!(gate.granted_roles(), vec![AuthorizationRole::General]);
}

#[test]
fn authentication_flag_is_reported_as_configured() {
    let roles = BTreeMap::from([(AuthorizationRole::Admin, true)]);
    let gate = StaticAuthGate::new(false, Some(roles)).unwrap();

    assert!(!gate.is_authenticated());
    assert!(gate.is_authorized(AuthorizationRole::Admin));
}

#[test]
fn helper_constructors_cover_common_gates() {
    let admin = StaticAuthGate::granting(&[AuthorizationRole::Admin]);
    assert!(admin.is_authenticated());
    assert!(admin.is_authorized(AuthorizationRole::Admin));

    let anonymous = StaticAuthGate::anonymous();
    assert!(!anonymous.is_authenticated());
    assert!(!anonymous.is_authorized(AuthorizationRole::Admin));
}

#[test]
fn shared_gates_answer_through_references_and_arcs() {
    let gate = Arc::new(StaticAuthGate::granting(&[AuthorizationRole::Accounting]));
    let dyn_gate: Arc<dyn AuthGate> = gate.clone();

    assert!(dyn_gate.is_authorized(AuthorizationRole::Accounting));
    assert!(AuthGate::is_authenticated(&&*gate));
}
