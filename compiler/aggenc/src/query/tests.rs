//! Tests for Salsa queries.

use super::*;
use crate::profile::DEPENDENCY_INJECTION_ATTRIBUTE;
use crate::AggenDb;
use aggen_build::facts::{AttributeFacts, Nullability, PropertyFacts, RawFacts, SymbolKind};
use salsa::Setter;

fn facts() -> RawFacts {
    RawFacts::new("global::App.Services", "IDependencies")
        .with_attribute(AttributeFacts::new(DEPENDENCY_INJECTION_ATTRIBUTE))
        .with_property(PropertyFacts::new("Clock", "global::App.IClock"))
}

fn executed(logs: &[String], query: &str) -> bool {
    logs.iter().any(|l| l.contains(query))
}

#[test]
fn test_aggregate_info_builds() {
    let db = AggenDb::new();
    let decl = Declaration::new(&db, "a".to_string(), facts());

    let info = aggregate_info(&db, decl);
    assert_eq!(
        info.as_ref().map(|i| i.interface_name.as_str()),
        Some("IDependencies")
    );
    assert_eq!(info.map(|i| i.dependencies.len()), Some(1));
}

#[test]
fn test_generated_unit_emits() {
    let db = AggenDb::new();
    let decl = Declaration::new(&db, "a".to_string(), facts());

    let Some(unit) = declaration_unit(&db, decl) else {
        panic!("declaration should emit");
    };
    assert_eq!(unit.unit_name, "App.Services.Dependencies.cs");
    assert!(unit.text.contains("public partial record Dependencies(\n"));
    assert!(unit.text.contains("    global::App.IClock Clock\n"));
}

#[test]
fn test_unresolved_declaration_emits_nothing() {
    let db = AggenDb::new();
    let mut raw = facts();
    raw.symbol = SymbolKind::Error;
    let decl = Declaration::new(&db, "a".to_string(), raw);

    assert_eq!(aggregate_info(&db, decl), None);
    assert_eq!(declaration_unit(&db, decl), None);
}

#[test]
fn test_cached_result_not_recomputed() {
    let db = AggenDb::new();
    db.enable_logging();
    let decl = Declaration::new(&db, "a".to_string(), facts());

    let first = declaration_unit(&db, decl);
    let logs1 = db.take_logs();
    assert!(executed(&logs1, "generated_unit"));

    let second = declaration_unit(&db, decl);
    let logs2 = db.take_logs();
    assert!(logs2.is_empty(), "cached query re-executed: {logs2:?}");
    assert_eq!(first, second);
}

#[test]
fn test_irrelevant_edit_skips_emission() {
    let mut db = AggenDb::new();
    db.enable_logging();
    let decl = Declaration::new(&db, "a".to_string(), facts());

    let before = declaration_unit(&db, decl);
    let _ = db.take_logs();

    // A default-bodied property is not a dependency slot.
    let mut defaulted = PropertyFacts::new("Helper", "global::App.IHelper");
    defaulted.is_abstract = false;
    decl.set_facts(&mut db).to(facts().with_property(defaulted));

    let after = declaration_unit(&db, decl);
    let logs = db.take_logs();

    assert!(executed(&logs, "aggregate_info"), "model should rebuild: {logs:?}");
    assert!(
        !executed(&logs, "generated_unit"),
        "emission should be cut off: {logs:?}"
    );
    assert_eq!(before, after);
}

#[test]
fn test_relevant_edit_reemits() {
    let mut db = AggenDb::new();
    db.enable_logging();
    let decl = Declaration::new(&db, "a".to_string(), facts());

    let before = declaration_unit(&db, decl);
    let _ = db.take_logs();

    decl.set_facts(&mut db).to(facts().with_property(
        PropertyFacts::new("Logger", "global::App.ILogger").with_nullability(Nullability::Annotated),
    ));

    let after = declaration_unit(&db, decl);
    let logs = db.take_logs();

    assert!(executed(&logs, "generated_unit"), "emission should re-run: {logs:?}");
    assert_ne!(before, after);
    assert!(after.is_some_and(|u| u.text.contains("global::App.ILogger? Logger = null")));
}

#[test]
fn test_equal_models_share_emission() {
    let db = AggenDb::new();
    let first = Declaration::new(&db, "a".to_string(), facts());
    let second = Declaration::new(&db, "b".to_string(), facts());

    assert_eq!(aggregate_model(&db, first), aggregate_model(&db, second));

    db.enable_logging();
    let unit = declaration_unit(&db, first);
    let logs = db.take_logs();
    assert!(executed(&logs, "generated_unit"));

    let shared = declaration_unit(&db, second);
    let logs = db.take_logs();
    assert!(executed(&logs, "aggregate_info"), "second declaration should build: {logs:?}");
    assert!(!executed(&logs, "generated_unit"), "equal model re-emitted: {logs:?}");
    assert_eq!(unit, shared);
}
