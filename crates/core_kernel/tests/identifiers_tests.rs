//! Tests for strongly-typed entity identifiers

use core_kernel::{ApartmentId, CustomerId, IdentifierError, OwnerId};
use std::str::FromStr;

#[test]
fn test_positive_ids_construct() {
    assert!(OwnerId::new(1).is_ok());
    assert!(ApartmentId::new(i32::MAX).is_ok());
    assert!(CustomerId::new(7).is_ok());
}

#[test]
fn test_non_positive_ids_rejected() {
    for raw in [0, -1, i32::MIN] {
        assert!(matches!(
            OwnerId::new(raw),
            Err(IdentifierError::NonPositive { entity: "owner", .. })
        ));
        assert!(matches!(CustomerId::new(raw), Err(_)));
        assert!(matches!(ApartmentId::new(raw), Err(_)));
    }
}

#[test]
fn test_get_returns_raw_value() {
    let id = CustomerId::new(123).unwrap();
    assert_eq!(id.get(), 123);
    assert_eq!(i32::from(id), 123);
}

#[test]
fn test_display_includes_entity_prefix() {
    assert_eq!(OwnerId::new(5).unwrap().to_string(), "owner-5");
    assert_eq!(CustomerId::new(9).unwrap().to_string(), "customer-9");
}

#[test]
fn test_from_str_accepts_prefixed_and_bare() {
    assert_eq!(OwnerId::from_str("owner-12").unwrap().get(), 12);
    assert_eq!(OwnerId::from_str("12").unwrap().get(), 12);
}

#[test]
fn test_from_str_rejects_garbage_and_non_positive() {
    assert!(matches!(
        ApartmentId::from_str("apartment-abc"),
        Err(IdentifierError::Unparseable { .. })
    ));
    assert!(matches!(
        ApartmentId::from_str("-3"),
        Err(IdentifierError::NonPositive { .. })
    ));
}

#[test]
fn test_serde_is_transparent() {
    let id = ApartmentId::new(77).unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "77");

    let back: ApartmentId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_ids_of_different_entities_are_distinct_types() {
    // Compile-time property, but the prefixes also differ at runtime
    assert_ne!(OwnerId::entity(), CustomerId::entity());
}
