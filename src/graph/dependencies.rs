use crate::blueprint::{BlueprintGraph, Node};
use ahash::AHashSet;
use tracing::debug;

/// Computes upstream dependencies of a step from the `prerequisites` lists.
///
/// The resolver borrows the graph and holds no other state, so one graph can
/// be shared by any number of resolvers, on any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct DependencyResolver<'a> {
    graph: &'a BlueprintGraph,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(graph: &'a BlueprintGraph) -> Self {
        Self { graph }
    }

    /// The nodes named in `node_id`'s prerequisites, in prerequisite order.
    ///
    /// Prerequisite ids that do not resolve to a node are dropped. An unknown
    /// `node_id` has no dependencies.
    pub fn direct_dependencies(&self, node_id: &str) -> Vec<&'a Node> {
        let Some(node) = self.graph.find_node_by_id(node_id) else {
            return Vec::new();
        };

        node.data
            .prerequisites
            .iter()
            .filter_map(|prerequisite_id| {
                let found = self.graph.find_node_by_id(prerequisite_id);
                if found.is_none() {
                    debug!(
                        node_id,
                        prerequisite_id = prerequisite_id.as_str(),
                        "dropping unresolved prerequisite"
                    );
                }
                found
            })
            .collect()
    }

    /// Dependencies of the direct dependencies, followed transitively.
    ///
    /// The result excludes `node_id` and its direct dependencies. Nodes are
    /// emitted once each, in depth-first discovery order starting from each
    /// direct dependency in turn. Cycles in the prerequisite graph terminate
    /// because every node is visited at most once.
    pub fn transitive_dependencies(&self, node_id: &str) -> Vec<&'a Node> {
        let direct = self.direct_dependencies(node_id);
        if direct.is_empty() {
            return Vec::new();
        }

        let mut visited: AHashSet<&str> = AHashSet::with_capacity(self.graph.nodes.len());
        visited.insert(node_id);
        visited.extend(direct.iter().map(|node| node.id.as_str()));

        let mut transitive = Vec::new();
        for root in &direct {
            // Each frame is a node plus the position of its next unexplored prerequisite,
            // which keeps discovery order identical to a recursive walk.
            let mut stack: Vec<(&'a Node, usize)> = vec![(*root, 0)];
            while let Some((current, next_index)) = stack.pop() {
                let Some(prerequisite_id) = current.data.prerequisites.get(next_index) else {
                    continue;
                };
                stack.push((current, next_index + 1));

                let Some(dependency) = self.graph.find_node_by_id(prerequisite_id) else {
                    continue;
                };
                if visited.insert(dependency.id.as_str()) {
                    transitive.push(dependency);
                    stack.push((dependency, 0));
                }
            }
        }

        transitive
    }
}

impl BlueprintGraph {
    /// Shorthand for `DependencyResolver::new(self).direct_dependencies(node_id)`.
    pub fn direct_dependencies(&self, node_id: &str) -> Vec<&Node> {
        DependencyResolver::new(self).direct_dependencies(node_id)
    }

    /// Shorthand for `DependencyResolver::new(self).transitive_dependencies(node_id)`.
    pub fn transitive_dependencies(&self, node_id: &str) -> Vec<&Node> {
        DependencyResolver::new(self).transitive_dependencies(node_id)
    }
}
