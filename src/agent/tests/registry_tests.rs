//! Unit tests for the in-process agent registry.

use crate::agent::{
    AgentRegistry,
    domain::{AgentOverrides, FunctionDef, Signature, SignatureParam, capture},
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn registry() -> AgentRegistry {
    AgentRegistry::new()
}

fn function(identifier: &str) -> FunctionDef {
    FunctionDef::new("agents/sample", identifier).expect("valid definition")
}

#[rstest]
fn register_then_get_returns_descriptor(registry: AgentRegistry) {
    let descriptor = capture(&function("fetch_page")).expect("capture succeeds");
    registry.register(descriptor.clone());

    assert_eq!(registry.get("fetch-page"), Some(descriptor));
    assert!(registry.get("missing").is_none());
}

#[rstest]
fn same_name_registration_replaces_entry_without_merging(registry: AgentRegistry) {
    let first_def = function("worker")
        .with_doc("First version")
        .with_signature(Signature::new([SignatureParam::required("a")]).expect("valid"));
    let second_def = FunctionDef::new("agents/other", "other_worker")
        .expect("valid definition")
        .with_doc("Second version")
        .with_signature(
            Signature::new([SignatureParam::with_default("b", json!(1))]).expect("valid"),
        );

    registry
        .declare_with(&AgentOverrides::new().name("shared").tags(["v1"]), &first_def)
        .expect("first declaration");
    let second = registry
        .declare_with(&AgentOverrides::new().name("shared"), &second_def)
        .expect("second declaration");

    assert_eq!(registry.len(), 1);
    let stored = registry.get("shared").expect("entry present");
    assert_eq!(stored, second);
    assert_eq!(stored.description(), "Second version");
    assert!(stored.tags().is_empty());
    assert_eq!(stored.parameters().names(), vec!["b"]);
    assert_eq!(stored.callable().module(), "agents/other");
}

#[rstest]
fn get_all_returns_a_detached_copy(registry: AgentRegistry) {
    registry.declare(&function("one")).expect("declared");
    let snapshot = registry.get_all();

    registry.declare(&function("two")).expect("declared");
    registry.clear();

    assert_eq!(snapshot.len(), 1);
    assert!(snapshot.contains_key("one"));
    assert!(registry.get_all().is_empty());
}

#[rstest]
fn clear_empties_the_registry_and_allows_reuse(registry: AgentRegistry) {
    registry.declare(&function("one")).expect("declared");
    registry.clear();

    assert!(registry.is_empty());
    assert!(registry.get_all().is_empty());

    registry.declare(&function("two")).expect("declared");
    assert_eq!(registry.names().len(), 1);
}

#[rstest]
fn clones_share_the_same_store(registry: AgentRegistry) {
    let handle = registry.clone();
    handle.declare(&function("shared_entry")).expect("declared");

    assert!(registry.get("shared-entry").is_some());
}
