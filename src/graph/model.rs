//! Read-only accessors over a `BlueprintGraph` snapshot.
//!
//! Every lookup is a linear scan over the relevant list. Graphs are
//! session-scoped and small, so no indices are kept. Misses are `None` or an
//! empty `Vec`, never an error.

use crate::blueprint::{BlueprintGraph, Edge, Form, Node};

/// Node type tag identifying form steps.
pub const FORM_NODE_TYPE: &str = "form";

impl BlueprintGraph {
    /// Finds a node by its id.
    pub fn find_node_by_id(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == node_id)
    }

    /// Finds a form by its id.
    pub fn find_form_by_id(&self, form_id: &str) -> Option<&Form> {
        self.forms.iter().find(|form| form.id == form_id)
    }

    /// Resolves the form rendered by a node: `node_id -> node.data.component_id -> Form`.
    pub fn find_form_by_component_key(&self, node_id: &str) -> Option<&Form> {
        let node = self.find_node_by_id(node_id)?;
        self.find_form_by_id(&node.data.component_id)
    }

    /// All nodes of type `"form"`, in document order.
    pub fn form_nodes(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|node| node.node_type == FORM_NODE_TYPE)
            .collect()
    }

    /// Entry points of the workflow: nodes with no prerequisites.
    pub fn source_nodes(&self) -> Vec<&Node> {
        self.nodes
            .iter()
            .filter(|node| node.data.prerequisites.is_empty())
            .collect()
    }

    pub fn outgoing_edges(&self, node_id: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|edge| edge.source == node_id).collect()
    }

    pub fn incoming_edges(&self, node_id: &str) -> Vec<&Edge> {
        self.edges.iter().filter(|edge| edge.target == node_id).collect()
    }
}
