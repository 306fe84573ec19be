//! Tests for loading workflow graphs at the supply boundary.
mod common;
use common::*;
use journey_prefill::blueprint::READ_FAILURE_MESSAGE;
use journey_prefill::prelude::*;

#[test]
fn test_load_fixture() {
    let graph = create_journey_graph();

    assert_eq!(graph.tenant_id, "1");
    assert_eq!(graph.nodes.len(), 6);
    assert_eq!(graph.edges.len(), 6);
    assert_eq!(graph.forms.len(), 2);

    let node_a = graph.find_node_by_id("form-a").unwrap();
    assert_eq!(node_a.node_type, "form");
    assert_eq!(node_a.data.sla_duration.unit, "minutes");

    let multi_select = &graph.forms[0].field_schema.as_ref().unwrap().properties["multi_select"];
    assert_eq!(multi_select.unique_items, Some(true));
    assert_eq!(multi_select.items.as_ref().unwrap().enum_values.len(), 3);
}

#[test]
fn test_blank_body_is_an_empty_graph() {
    let graph = load_blueprint_str("  \n").unwrap();
    assert!(graph.nodes.is_empty());
    assert!(graph.edges.is_empty());
    assert!(graph.forms.is_empty());
}

#[test]
fn test_missing_collections_are_tolerated() {
    let graph = load_blueprint_str(
        r#"{"nodes": [{"id": "a", "type": "form", "data": {"component_id": "f", "prerequisites": null}}], "edges": []}"#,
    )
    .unwrap();

    assert!(graph.forms.is_empty());
    assert!(graph.branches.is_empty());
    assert!(graph.triggers.is_empty());
    assert!(graph.find_form_by_component_key("a").is_none());
    assert!(graph.direct_dependencies("a").is_empty());
    assert_eq!(graph.source_nodes().len(), 1);
}

#[test]
fn test_camel_case_keys_are_accepted() {
    let graph = load_blueprint_str(
        r#"{"tenantId": "7", "nodes": [
             {"id": "a", "type": "form", "data": {"componentId": "f", "name": "A"}},
             {"id": "b", "type": "form", "data": {"componentId": "f", "name": "B", "prerequisites": ["a"]}}],
            "forms": [{"id": "f", "fieldSchema": {"type": "object",
                       "properties": {"email": {"avantosType": "short-text", "title": "Email", "type": "string"}},
                       "required": ["email"]}}]}"#,
    )
    .unwrap();

    assert_eq!(graph.tenant_id, "7");
    let sources = DirectDependencyProvider.data_sources("b", &graph);
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].fields, vec![SourceField::new("email", "Email")]);
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    match load_blueprint_str("{\"nodes\": [") {
        Err(BlueprintError::JsonParseError(_)) => {}
        other => panic!("Expected JsonParseError, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_an_io_error() {
    match load_blueprint_file("does/not/exist/graph.json") {
        Err(BlueprintError::Io { path, .. }) => assert!(path.ends_with("graph.json")),
        other => panic!("Expected Io error, got {:?}", other),
    }
}

#[test]
fn test_response_envelope() {
    let body = format!("{{\"data\": {}}}", JOURNEY_GRAPH_JSON);
    let graph = BlueprintResponse::from_json(&body)
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(graph, create_journey_graph());

    let failure = BlueprintResponse::from_json(r#"{"error": "Failed to fetch blueprint data"}"#)
        .unwrap()
        .into_result();
    assert_eq!(
        failure,
        Err(BlueprintError::ServerError(
            "Failed to fetch blueprint data".to_string()
        ))
    );
}

#[test]
fn test_response_from_load_result() {
    let response = BlueprintResponse::from_result(load_blueprint_str("not json"));
    assert_eq!(
        response,
        BlueprintResponse::Error {
            error: READ_FAILURE_MESSAGE.to_string()
        }
    );

    let response = BlueprintResponse::from_result(load_blueprint_str(""));
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["data"]["nodes"], serde_json::json!([]));
}

#[test]
fn test_into_blueprint_identity() {
    let graph = create_chain_graph();
    assert_eq!(graph.clone().into_blueprint().unwrap(), graph);
}

#[test]
fn test_round_trip_preserves_graph() {
    let graph = create_journey_graph();
    let json = serde_json::to_string(&graph).unwrap();
    assert_eq!(load_blueprint_str(&json).unwrap(), graph);
}
