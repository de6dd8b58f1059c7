mod common;

use color_eyre::Result;
use common::{john, mary, tesla};
use motorpool::{error::Error, registry::Registry, user::User};
use pretty_assertions::assert_eq;

#[test]
fn repeated_assign_appends_again() -> Result<()> {
    let mut registry = Registry::new();
    let user = john();
    let tesla = tesla();

    registry.assign(&user, &tesla)?;
    registry.assign(&user, &tesla)?;

    // No uniqueness check: each call appends another entry.
    let held = registry.vehicles_of(&user);
    assert_eq!(held.len(), 2);
    assert!(held[0].ptr_eq(&tesla));
    assert!(held[1].ptr_eq(&tesla));

    assert_eq!(registry.owner_of(&tesla), Some("John"));

    Ok(())
}

#[test]
fn double_remove_is_a_noop() -> Result<()> {
    let mut registry = Registry::new();
    let user = john();
    let tesla = tesla();

    registry.assign(&user, &tesla)?;

    registry.remove(&user, &tesla);
    registry.remove(&user, &tesla);

    assert_eq!(tesla.owner(), None);
    assert!(registry.vehicles_of(&user).is_empty());

    Ok(())
}

#[test]
fn remove_by_a_non_holder_changes_nothing() -> Result<()> {
    let mut registry = Registry::new();
    let tesla = tesla();

    registry.assign(&john(), &tesla)?;

    registry.remove(&mary(), &tesla);
    registry.remove(&User::new("nobody"), &tesla);

    assert_eq!(tesla.owner(), Some("John".to_string()));
    assert_eq!(registry.owner_of(&tesla), Some("John"));
    assert_eq!(registry.vehicles_of(&john()).len(), 1);

    Ok(())
}

#[test]
fn structurally_equal_vehicles_are_still_distinct() -> Result<()> {
    let mut registry = Registry::new();
    let in_pool = tesla();
    let lookalike = tesla();

    assert_eq!(in_pool, lookalike);
    assert!(!in_pool.ptr_eq(&lookalike));

    registry.assign(&john(), &in_pool)?;

    // Ownership lookup goes by handle identity, not by looks.
    assert_eq!(registry.owner_of(&in_pool), Some("John"));
    assert_eq!(registry.owner_of(&lookalike), None);
    assert_eq!(lookalike.owner(), None);

    Ok(())
}

#[test]
fn removing_the_last_vehicle_forgets_the_user() -> Result<()> {
    let mut registry = Registry::new();
    let user = john();
    let tesla = tesla();

    registry.assign(&user, &tesla)?;
    assert_eq!(registry.users().collect::<Vec<_>>(), vec!["John"]);

    registry.remove(&user, &tesla);

    assert_eq!(registry.users().count(), 0);
    assert!(registry.vehicles_of(&user).is_empty());

    Ok(())
}

// Assigning an already-held vehicle to someone else does not detach it
// from the previous holder. The owner field names the latest holder only,
// and an identity-matched removal clears it no matter who else still
// lists the vehicle. Callers wanting a clean handover remove first.
#[test]
fn double_assignment_keeps_the_stale_entry() -> Result<()> {
    let mut registry = Registry::new();
    let john = john();
    let mary = mary();
    let tesla = tesla();

    registry.assign(&john, &tesla)?;
    registry.assign(&mary, &tesla)?;

    assert_eq!(tesla.owner(), Some("Mary".to_string()));
    assert_eq!(registry.vehicles_of(&john).len(), 1);
    assert_eq!(registry.vehicles_of(&mary).len(), 1);

    registry.remove(&john, &tesla);

    // Mary still lists the vehicle, yet its owner field was cleared.
    assert_eq!(tesla.owner(), None);
    assert_eq!(registry.owner_of(&tesla), Some("Mary"));

    Ok(())
}

#[test]
fn nameless_user_cannot_be_assigned_to() {
    let mut registry = Registry::new();
    let tesla = tesla();

    let err = registry.assign(&User::new(""), &tesla).unwrap_err();

    assert!(matches!(err, Error::InvalidOwner(_)));
    assert_eq!(tesla.owner(), None);
    assert_eq!(registry.users().count(), 0);
}
