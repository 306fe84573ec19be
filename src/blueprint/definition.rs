use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Deserializes a missing or `null` collection into its empty default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The complete workflow graph document.
///
/// A graph is loaded once per session and treated as an immutable snapshot:
/// nothing in this crate mutates it after construction. Every collection is
/// optional on the wire, so an empty `{}` document is a valid (empty) graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlueprintGraph {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "tenantId")]
    pub tenant_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<Node>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<Edge>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forms: Vec<Form>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub branches: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub triggers: Vec<Value>,
}

/// A single step in the workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type", default)]
    pub node_type: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: NodeData,
}

/// Canvas coordinates of a node. Carried through, never interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// Configuration payload of a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "componentKey")]
    pub component_key: String,
    #[serde(default, alias = "componentType")]
    pub component_type: String,
    /// Id of the `Form` this node renders.
    #[serde(default, alias = "componentId")]
    pub component_id: String,
    #[serde(default)]
    pub name: String,
    /// Ids of the nodes that must complete before this one. This list, not
    /// the graph's `edges`, defines dependencies.
    #[serde(default, deserialize_with = "null_as_default")]
    pub prerequisites: Vec<String>,
    #[serde(
        default,
        alias = "permittedRoles",
        deserialize_with = "null_as_default"
    )]
    pub permitted_roles: Vec<String>,
    #[serde(default, alias = "inputMapping", deserialize_with = "null_as_default")]
    pub input_mapping: Map<String, Value>,
    #[serde(default, alias = "slaDuration")]
    pub sla_duration: SlaDuration,
    #[serde(default, alias = "approvalRequired")]
    pub approval_required: bool,
    #[serde(
        default,
        alias = "approvalRoles",
        deserialize_with = "null_as_default"
    )]
    pub approval_roles: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlaDuration {
    #[serde(default)]
    pub number: f64,
    #[serde(default)]
    pub unit: String,
}

/// An advisory connection between two nodes. Dependency resolution ignores edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// A form schema that one or more nodes render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "isReusable")]
    pub is_reusable: bool,
    #[serde(default, alias = "fieldSchema", skip_serializing_if = "Option::is_none")]
    pub field_schema: Option<FieldSchema>,
    #[serde(default, alias = "uiSchema")]
    pub ui_schema: Value,
    #[serde(
        default,
        alias = "dynamicFieldConfig",
        deserialize_with = "null_as_default"
    )]
    pub dynamic_field_config: Map<String, Value>,
}

/// JSON-schema style description of a form's fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    #[serde(rename = "type", default)]
    pub schema_type: String,
    /// Field definitions in schema order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: IndexMap<String, FormField>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    #[serde(default, alias = "avantosType")]
    pub avantos_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<FieldItems>,
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(
        rename = "uniqueItems",
        alias = "unique_items",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub unique_items: Option<bool>,
}

/// Element description for array-typed fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldItems {
    #[serde(rename = "enum", default, deserialize_with = "null_as_default")]
    pub enum_values: Vec<String>,
    #[serde(rename = "type", default)]
    pub item_type: String,
}
