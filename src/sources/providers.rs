use super::catalogue::GlobalCatalogue;
use super::{DataSourceProvider, PrefillSource, PrefillSourceType, SourceField};
use crate::blueprint::{BlueprintGraph, Node};
use crate::graph::DependencyResolver;
use tracing::debug;

/// Turns dependency nodes into sources, skipping nodes whose form does not resolve.
fn sources_from_nodes(
    graph: &BlueprintGraph,
    nodes: Vec<&Node>,
    source_type: PrefillSourceType,
) -> Vec<PrefillSource> {
    nodes
        .into_iter()
        .filter_map(|node| {
            let Some(form) = graph.find_form_by_component_key(&node.id) else {
                debug!(
                    node_id = node.id.as_str(),
                    component_id = node.data.component_id.as_str(),
                    "skipping dependency without a resolvable form"
                );
                return None;
            };
            Some(PrefillSource {
                source_type,
                id: node.id.clone(),
                name: node.data.name.clone(),
                fields: form
                    .fields()
                    .into_iter()
                    .map(|field| SourceField::new(field.id, field.name))
                    .collect(),
            })
        })
        .collect()
}

/// Offers the forms of the steps listed in the target's prerequisites.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectDependencyProvider;

impl DataSourceProvider for DirectDependencyProvider {
    fn name(&self) -> &str {
        "direct_dependency"
    }

    fn data_sources(&self, target_node_id: &str, graph: &BlueprintGraph) -> Vec<PrefillSource> {
        let dependencies = DependencyResolver::new(graph).direct_dependencies(target_node_id);
        sources_from_nodes(graph, dependencies, PrefillSourceType::DirectDependency)
    }
}

/// Offers the forms of steps further upstream than the direct dependencies.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitiveDependencyProvider;

impl DataSourceProvider for TransitiveDependencyProvider {
    fn name(&self) -> &str {
        "transitive_dependency"
    }

    fn data_sources(&self, target_node_id: &str, graph: &BlueprintGraph) -> Vec<PrefillSource> {
        let dependencies = DependencyResolver::new(graph).transitive_dependencies(target_node_id);
        sources_from_nodes(graph, dependencies, PrefillSourceType::TransitiveDependency)
    }
}

/// Offers a fixed catalogue of sources that do not come from the graph.
///
/// The output ignores both the target and the graph and is identical on every call.
#[derive(Debug, Clone, Default)]
pub struct GlobalDataProvider {
    catalogue: GlobalCatalogue,
}

impl GlobalDataProvider {
    pub fn with_catalogue(catalogue: GlobalCatalogue) -> Self {
        Self { catalogue }
    }

    pub fn catalogue(&self) -> &GlobalCatalogue {
        &self.catalogue
    }
}

impl DataSourceProvider for GlobalDataProvider {
    fn name(&self) -> &str {
        "global"
    }

    fn data_sources(&self, _target_node_id: &str, _graph: &BlueprintGraph) -> Vec<PrefillSource> {
        self.catalogue.sources().to_vec()
    }
}
