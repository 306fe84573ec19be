//! Common test utilities for building workflow graphs.
use journey_prefill::graph::FORM_NODE_TYPE;
use journey_prefill::prelude::*;

/// Builds a form node rendering `component_id`.
#[allow(dead_code)]
pub fn form_node(id: &str, prerequisites: &[&str], component_id: &str) -> Node {
    Node {
        id: id.to_string(),
        node_type: FORM_NODE_TYPE.to_string(),
        position: Position::default(),
        data: NodeData {
            id: format!("bp_c-{}", id),
            component_key: id.to_string(),
            component_type: FORM_NODE_TYPE.to_string(),
            component_id: component_id.to_string(),
            name: format!("Form {}", id),
            prerequisites: prerequisites.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        },
    }
}

/// Builds a form from `(field id, title, avantos type)` triples.
#[allow(dead_code)]
pub fn form(id: &str, fields: &[(&str, &str, &str)], required: &[&str]) -> Form {
    Form {
        id: id.to_string(),
        name: format!("form {}", id),
        field_schema: Some(FieldSchema {
            schema_type: "object".to_string(),
            properties: fields
                .iter()
                .map(|(field_id, title, avantos_type)| {
                    (
                        field_id.to_string(),
                        FormField {
                            avantos_type: avantos_type.to_string(),
                            title: title.to_string(),
                            field_type: "string".to_string(),
                            ..Default::default()
                        },
                    )
                })
                .collect(),
            required: required.iter().map(|r| r.to_string()).collect(),
        }),
        ..Default::default()
    }
}

/// The form every node of the simple fixtures renders.
#[allow(dead_code)]
pub fn contact_form() -> Form {
    form(
        "f_contact",
        &[
            ("email", "Email", "short-text"),
            ("name", "Name", "short-text"),
        ],
        &["email"],
    )
}

/// A linear chain: `A <- B <- C` (C lists B, B lists A).
#[allow(dead_code)]
pub fn create_chain_graph() -> BlueprintGraph {
    BlueprintGraph {
        id: "bp_chain".to_string(),
        nodes: vec![
            form_node("A", &[], "f_contact"),
            form_node("B", &["A"], "f_contact"),
            form_node("C", &["B"], "f_contact"),
        ],
        forms: vec![contact_form()],
        ..Default::default()
    }
}

/// Two nodes listing each other as prerequisites.
#[allow(dead_code)]
pub fn create_cyclic_graph() -> BlueprintGraph {
    BlueprintGraph {
        nodes: vec![
            form_node("A", &["B"], "f_contact"),
            form_node("B", &["A"], "f_contact"),
        ],
        forms: vec![contact_form()],
        ..Default::default()
    }
}

/// Returns the ids of a list of nodes.
#[allow(dead_code)]
pub fn ids(nodes: &[&Node]) -> Vec<String> {
    nodes.iter().map(|node| node.id.clone()).collect()
}

/// A workflow of six forms:
///
/// ```text
/// A -> B -> D -> F
/// A -> C -> E -> F
/// ```
///
/// Every node renders `f_1` except E, which renders `f_2`. Edges mirror the
/// prerequisites.
#[allow(dead_code)]
pub const JOURNEY_GRAPH_JSON: &str = r#"{
  "id": "bp_01jk766tckfwx84xjcxazggzyc",
  "tenant_id": "1",
  "name": "Onboard Customer 0",
  "description": "Automated test action",
  "category": "Category 4",
  "nodes": [
    {"id": "form-a", "type": "form", "position": {"x": 0, "y": 0},
     "data": {"id": "bp_c-a", "component_key": "form-a", "component_type": "form", "component_id": "f_1",
              "name": "Form A", "prerequisites": [], "permitted_roles": [], "input_mapping": {},
              "sla_duration": {"number": 0, "unit": "minutes"}, "approval_required": false, "approval_roles": []}},
    {"id": "form-b", "type": "form", "position": {"x": 300, "y": 0},
     "data": {"id": "bp_c-b", "component_key": "form-b", "component_type": "form", "component_id": "f_1",
              "name": "Form B", "prerequisites": ["form-a"]}},
    {"id": "form-c", "type": "form", "position": {"x": 300, "y": 200},
     "data": {"id": "bp_c-c", "component_key": "form-c", "component_type": "form", "component_id": "f_1",
              "name": "Form C", "prerequisites": ["form-a"]}},
    {"id": "form-d", "type": "form", "position": {"x": 600, "y": 0},
     "data": {"id": "bp_c-d", "component_key": "form-d", "component_type": "form", "component_id": "f_1",
              "name": "Form D", "prerequisites": ["form-b"]}},
    {"id": "form-e", "type": "form", "position": {"x": 600, "y": 200},
     "data": {"id": "bp_c-e", "component_key": "form-e", "component_type": "form", "component_id": "f_2",
              "name": "Form E", "prerequisites": ["form-c"]}},
    {"id": "form-f", "type": "form", "position": {"x": 900, "y": 100},
     "data": {"id": "bp_c-f", "component_key": "form-f", "component_type": "form", "component_id": "f_1",
              "name": "Form F", "prerequisites": ["form-d", "form-e"]}}
  ],
  "edges": [
    {"source": "form-a", "target": "form-b"},
    {"source": "form-a", "target": "form-c"},
    {"source": "form-b", "target": "form-d"},
    {"source": "form-c", "target": "form-e"},
    {"source": "form-d", "target": "form-f"},
    {"source": "form-e", "target": "form-f"}
  ],
  "forms": [
    {"id": "f_1", "name": "test form", "description": "test", "is_reusable": false,
     "field_schema": {"type": "object",
       "properties": {
         "id": {"avantos_type": "short-text", "title": "ID", "type": "string"},
         "email": {"avantos_type": "short-text", "title": "Email", "type": "string", "format": "email"},
         "name": {"avantos_type": "short-text", "title": "Name", "type": "string"},
         "multi_select": {"avantos_type": "multi-select", "title": "Multi Select", "type": "array",
                          "items": {"enum": ["foo", "bar", "foobar"], "type": "string"}, "uniqueItems": true}
       },
       "required": ["id", "name", "email"]},
     "ui_schema": {"type": "VerticalLayout", "elements": []},
     "dynamic_field_config": {}},
    {"id": "f_2", "name": "notes form", "description": "test", "is_reusable": true,
     "field_schema": {"type": "object",
       "properties": {
         "notes": {"avantos_type": "multi-line-text", "title": "Notes", "type": "string"},
         "button": {"avantos_type": "button", "title": "", "type": "object"}
       },
       "required": []},
     "ui_schema": null,
     "dynamic_field_config": null}
  ],
  "branches": [],
  "triggers": []
}"#;

#[allow(dead_code)]
pub fn create_journey_graph() -> BlueprintGraph {
    load_blueprint_str(JOURNEY_GRAPH_JSON).expect("journey fixture must parse")
}
