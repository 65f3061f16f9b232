//! Catalog loading tests.
//!
//! These tests verify market catalogs loaded from JSON:
//! - The shipped cloud catalog
//! - Defaults for optional fields
//! - Rejection of inconsistent card data

use builder_cards::games::cloud::{self, CATALOG_JSON};
use builder_cards::{CardId, CatalogError, MarketCatalog};

/// Test that the shipped JSON matches the shipped catalog.
#[test]
fn test_shipped_json_loads() {
    let catalog = MarketCatalog::from_json(CATALOG_JSON).unwrap();

    assert_eq!(catalog.registry().len(), 8);
    assert_eq!(catalog.market().count(), 7);

    let rds = catalog.get(&CardId::new("rds")).unwrap();
    assert_eq!(rds.name, "Amazon RDS");
    assert_eq!((rds.cost, rds.credit()), (5, 2));
    assert_eq!(rds.card_type, "Database");
    assert_eq!(rds.effect.as_deref(), Some("Managed relational DB."));
}

/// Test that a catalog survives a trip through JSON.
#[test]
fn test_catalog_json_round_trip() {
    let original = cloud::catalog();

    let json = original.to_json().unwrap();
    let reloaded = MarketCatalog::from_json(&json).unwrap();

    assert_eq!(reloaded.starter(), original.starter());
    assert!(reloaded.market().eq(original.market()));
}

/// Test the defaults for optional fields.
#[test]
fn test_optional_fields() {
    let json = r#"{
        "starter": { "id": "s", "name": "Starter", "cost": 0, "credit": 1, "type": "Starter" },
        "services": [
            { "id": "a", "name": "A", "cost": 1, "type": "Compute" },
            { "id": "b", "name": "B", "cost": 2, "credit": 1, "type": "Compute", "condition": "a" }
        ]
    }"#;

    let catalog = MarketCatalog::from_json(json).unwrap();

    let a = catalog.get(&CardId::new("a")).unwrap();
    assert_eq!(a.credit(), 0);
    assert!(a.effect.is_none());

    let b = catalog.get(&CardId::new("b")).unwrap();
    assert_eq!(b.synergy(), Some((&CardId::new("a"), 1)));

    assert_eq!(catalog.scoring().count(), 0);
}

/// Test that malformed JSON is reported as a JSON error.
#[test]
fn test_malformed_json() {
    let err = MarketCatalog::from_json("{ \"starter\": ").unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));

    // Missing starter
    let err = MarketCatalog::from_json("{ \"services\": [] }").unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

/// Test that duplicate ids are rejected.
#[test]
fn test_duplicate_id() {
    let json = r#"{
        "starter": { "id": "s", "name": "Starter", "cost": 0, "credit": 1, "type": "Starter" },
        "services": [
            { "id": "x", "name": "X", "cost": 1, "credit": 1, "type": "Compute" },
            { "id": "x", "name": "X again", "cost": 2, "credit": 1, "type": "Compute" }
        ]
    }"#;

    let err = MarketCatalog::from_json(json).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(ref id) if id.as_str() == "x"));
    assert_eq!(err.to_string(), "card id x is defined more than once");
}

/// Test that a condition must name a known card.
#[test]
fn test_unknown_condition() {
    let json = r#"{
        "starter": { "id": "s", "name": "Starter", "cost": 0, "credit": 1, "type": "Starter" },
        "services": [
            { "id": "asg", "name": "ASG", "cost": 3, "credit": 1, "type": "Compute", "condition": "ec2" }
        ]
    }"#;

    let err = MarketCatalog::from_json(json).unwrap_err();
    assert_eq!(err.to_string(), "card asg requires unknown card ec2");
}

/// Test that cards must sit in the right market section.
#[test]
fn test_wrong_section() {
    let json = r#"{
        "starter": { "id": "s", "name": "Starter", "cost": 0, "credit": 1, "type": "Starter" },
        "services": [
            { "id": "wa1", "name": "WA", "cost": 3, "points": 1, "type": "Well-Architected" }
        ]
    }"#;

    let err = MarketCatalog::from_json(json).unwrap_err();
    assert!(matches!(err, CatalogError::WrongSection(_)));
}

/// Test that scoring cards must award points and nothing else.
#[test]
fn test_bad_scoring_cards() {
    let zero = r#"{
        "starter": { "id": "s", "name": "Starter", "cost": 0, "credit": 1, "type": "Starter" },
        "scoring": [ { "id": "wa0", "name": "WA", "cost": 1, "points": 0, "type": "Well-Architected" } ]
    }"#;
    assert!(matches!(
        MarketCatalog::from_json(zero).unwrap_err(),
        CatalogError::ZeroPoints(_)
    ));

    let both = r#"{
        "starter": { "id": "s", "name": "Starter", "cost": 0, "credit": 1, "type": "Starter" },
        "scoring": [ { "id": "wa1", "name": "WA", "cost": 1, "credit": 1, "points": 1, "type": "Well-Architected" } ]
    }"#;
    assert!(matches!(
        MarketCatalog::from_json(both).unwrap_err(),
        CatalogError::CreditAndPoints(_)
    ));
}
