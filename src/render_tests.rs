//! Unit tests for the full render pipeline.
//!
//! Tests verify:
//! - Plan shape for the two reference components (SearchResults, CardHeader)
//! - Fail-open handling of out-of-contract enum values
//! - Forwarded refs and className are always attached
//! - Idempotence of repeated renders

use super::*;
use crate::class_name::ClassSource;
use crate::constants::TEXT_ALIGNMENTS;
use crate::contract::{CollectingSink, PropContract};
use crate::element::ComponentHandle;
use crate::props::{bag_from_json, Node};
use serde_json::json;

fn search_results() -> ComponentSpec {
    ComponentSpec::builder("SearchResults")
        .with_base_props()
        .class(ClassSource::static_token("results transition"))
        .build()
}

fn card_header() -> ComponentSpec {
    ComponentSpec::builder("CardHeader")
        .with_base_props()
        .prop(
            "textAlign",
            PropContract::one_of_without(TEXT_ALIGNMENTS, &["justified"]),
        )
        .class(ClassSource::enumerated("textAlign"))
        .class(ClassSource::static_token("header"))
        .build()
}

fn collecting_renderer() -> (Renderer, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::new());
    (Renderer::new(sink.clone()), sink)
}

// =============================================================================
// Plan shape
// =============================================================================

#[test]
fn test_search_results_plan() {
    let props = bag_from_json(json!({
        "className": "foo",
        "content": "No results",
        "data-testid": "results"
    }));

    let plan = render(&search_results(), &props, Some(RefHandle::new(9)));

    assert_eq!(plan.element_type, ElementType::tag("div"));
    assert_eq!(plan.class_name(), "results transition foo");
    assert_eq!(plan.forwarded_ref(), Some(RefHandle::new(9)));
    assert_eq!(plan.body, Some(PropValue::from("No results")));
    assert_eq!(plan.attributes["data-testid"], PropValue::from("results"));
    assert_eq!(plan.attributes.len(), 3);
}

#[test]
fn test_card_header_aligned_plan() {
    let props = bag_from_json(json!({ "textAlign": "left", "children": "Title" }));

    let plan = render(&card_header(), &props, None);

    assert_eq!(plan.class_name(), "left header");
    assert_eq!(plan.body, Some(PropValue::from("Title")));
    assert!(!plan.attributes.contains_key("textAlign"));
}

#[test]
fn test_as_override_reaches_plan() {
    let mut props = bag_from_json(json!({ "content": "x" }));
    props.insert(
        "as".into(),
        PropValue::Element(ElementType::Component(ComponentHandle::new("Link"))),
    );

    let plan = render(&card_header(), &props, None);

    assert_eq!(
        plan.element_type,
        ElementType::Component(ComponentHandle::new("Link"))
    );
    assert!(!plan.attributes.contains_key("as"));
}

#[test]
fn test_children_win_over_content() {
    let mut props = bag_from_json(json!({ "content": "hi" }));
    props.insert(
        "children".into(),
        PropValue::Node(Node::text("explicit")),
    );

    let (renderer, _) = collecting_renderer();
    let plan = renderer.render(&search_results(), &props, None);

    assert_eq!(plan.body, Some(PropValue::Node(Node::text("explicit"))));
}

#[test]
fn test_nested_plans_as_children() {
    let inner = render(&card_header(), &bag_from_json(json!({ "content": "Inner" })), None);
    let mut props = PropBag::new();
    props.insert("children".into(), PropValue::Node(Node::from(inner.clone())));

    let outer = render(&search_results(), &props, None);

    match outer.body {
        Some(PropValue::Node(Node::Plan(plan))) => assert_eq!(*plan, inner),
        other => panic!("Expected nested plan, got {:?}", other),
    }
}

// =============================================================================
// Always-attached attributes
// =============================================================================

#[test]
fn test_empty_props_still_attach_class_name_and_ref() {
    let spec = ComponentSpec::builder("Plain").with_base_props().build();
    let plan = render(&spec, &PropBag::new(), None);

    assert_eq!(plan.attributes["className"], PropValue::from(""));
    assert_eq!(plan.attributes["ref"], PropValue::Null);
    assert_eq!(plan.body, None);
}

#[test]
fn test_forwarded_ref_overrides_pass_through_ref() {
    let props = bag_from_json(json!({ "ref": "stale" }));
    let plan = render(&search_results(), &props, Some(RefHandle::new(1)));
    assert_eq!(plan.attributes["ref"], PropValue::Ref(RefHandle::new(1)));
}

#[test]
fn test_assemble_is_purely_structural() {
    let mut rest = PropBag::new();
    rest.insert("id".into(), PropValue::from("x"));

    let plan = assemble(
        ElementType::tag("span"),
        rest,
        "a b".into(),
        Some(RefHandle::new(2)),
        Some(PropValue::from("body")),
    );

    assert_eq!(plan.element_type, ElementType::tag("span"));
    assert_eq!(plan.class_name(), "a b");
    assert_eq!(plan.forwarded_ref(), Some(RefHandle::new(2)));
    assert_eq!(plan.attributes["id"], PropValue::from("x"));
}

// =============================================================================
// Contract failures fail open
// =============================================================================

#[test]
fn test_out_of_contract_alignment_is_reported_and_omitted() {
    let (renderer, sink) = collecting_renderer();
    let props = bag_from_json(json!({ "textAlign": "justified", "className": "x" }));

    let plan = renderer.render(&card_header(), &props, None);

    assert_eq!(plan.class_name(), "header x");
    let violations = sink.take();
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].prop, "textAlign");
}

#[test]
fn test_out_of_contract_value_and_key_tokens_are_omitted() {
    let registry =
        crate::registry::ComponentRegistry::from_json(include_str!("../demos/components.json"))
            .unwrap();
    let column = registry.require("GridColumn").unwrap();
    let (renderer, sink) = collecting_renderer();
    let props = bag_from_json(json!({
        "verticalAlign": "sideways",
        "floated": "center",
        "stretched": "yes"
    }));

    let plan = renderer.render(column, &props, None);

    assert_eq!(plan.class_name(), "column");
    let mut props: Vec<String> = sink.take().into_iter().map(|v| v.prop).collect();
    props.sort();
    assert_eq!(props, ["floated", "stretched", "verticalAlign"]);
}

#[test]
fn test_disabled_checks_report_nothing_but_still_omit() {
    let (renderer, sink) = collecting_renderer();
    let renderer = renderer.without_contract_checks();
    let props = bag_from_json(json!({ "textAlign": "justified" }));

    let plan = renderer.render(&card_header(), &props, None);

    assert_eq!(plan.class_name(), "header");
    assert!(sink.is_empty());
}

#[test]
fn test_malformed_props_never_panic() {
    let props = bag_from_json(json!({
        "as": [1, 2],
        "className": 42,
        "textAlign": { "nested": true },
        "children": { "not": "a node" },
        "content": null
    }));

    let (renderer, sink) = collecting_renderer();
    let plan = renderer.render(&card_header(), &props, None);

    assert_eq!(plan.element_type, ElementType::tag("div"));
    // A non-string className is ignored rather than stringified.
    assert_eq!(plan.class_name(), "header");
    assert_eq!(sink.len(), 4);
}

// =============================================================================
// Configuration and idempotence
// =============================================================================

#[test]
fn test_from_config_honors_check_flag() {
    let config = RenderConfig {
        check_contracts: false,
        ..RenderConfig::default()
    };
    assert!(!Renderer::from_config(&config).checks_contracts());
    assert!(Renderer::from_config(&RenderConfig::default()).checks_contracts());
}

#[test]
fn test_collect_policy_feeds_overlay() {
    let config = RenderConfig {
        contract_policy: ContractPolicy::Collect,
        ..RenderConfig::default()
    };
    let spec = ComponentSpec::builder("OverlayProbe")
        .prop("size", PropContract::one_of(&["big"]))
        .build();
    let props = bag_from_json(json!({ "size": "tiny" }));

    Renderer::from_config(&config).render(&spec, &props, None);

    let collected = overlay().take();
    assert!(collected
        .iter()
        .any(|v| v.component == "OverlayProbe" && v.prop == "size"));
}

#[test]
fn test_render_is_idempotent() {
    let spec = card_header();
    let props = bag_from_json(json!({
        "textAlign": "right",
        "className": "extra",
        "content": "Hi",
        "data-a": 1,
        "title": "t"
    }));

    let first = render(&spec, &props, Some(RefHandle::new(5)));
    let second = render(&spec, &props, Some(RefHandle::new(5)));

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_plan_serializes_for_hosts() {
    let props = bag_from_json(json!({ "content": "Hi", "textAlign": "center" }));
    let plan = render(&card_header(), &props, None);

    assert_eq!(
        serde_json::to_value(&plan).unwrap(),
        json!({
            "elementType": { "kind": "nativeTag", "name": "div" },
            "attributes": { "className": "center header", "ref": null },
            "body": "Hi"
        })
    );
}
