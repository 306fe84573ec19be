//! Prefill source candidates and the providers that produce them.

use crate::blueprint::BlueprintGraph;
use serde::{Deserialize, Serialize};
use std::fmt;

mod aggregator;
mod catalogue;
mod groups;
mod providers;

pub use aggregator::{SourceAggregator, SourceAggregatorBuilder};
pub use catalogue::GlobalCatalogue;
pub use groups::SourceGroups;
pub use providers::{DirectDependencyProvider, GlobalDataProvider, TransitiveDependencyProvider};

/// Where a prefill source comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrefillSourceType {
    /// A step listed directly in the target's prerequisites.
    DirectDependency,
    /// A step reachable through the prerequisites of a direct dependency.
    TransitiveDependency,
    /// Context external to the workflow graph.
    Global,
}

impl PrefillSourceType {
    /// All source types, in picker order.
    pub const ALL: [PrefillSourceType; 3] = [
        PrefillSourceType::DirectDependency,
        PrefillSourceType::TransitiveDependency,
        PrefillSourceType::Global,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrefillSourceType::DirectDependency => "direct_dependency",
            PrefillSourceType::TransitiveDependency => "transitive_dependency",
            PrefillSourceType::Global => "global",
        }
    }

    /// Inverse of `as_str`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|source_type| source_type.as_str() == name)
    }

    /// Section heading used when listing sources of this type.
    pub fn heading(&self) -> &'static str {
        match self {
            PrefillSourceType::DirectDependency => "Direct Dependencies",
            PrefillSourceType::TransitiveDependency => "Transitive Dependencies",
            PrefillSourceType::Global => "Global Data",
        }
    }
}

impl fmt::Display for PrefillSourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field offered by a prefill source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceField {
    pub id: String,
    pub name: String,
}

impl SourceField {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A candidate origin of values for a target field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefillSource {
    #[serde(rename = "type")]
    pub source_type: PrefillSourceType,
    pub id: String,
    pub name: String,
    pub fields: Vec<SourceField>,
}

impl PrefillSource {
    pub fn field(&self, field_id: &str) -> Option<&SourceField> {
        self.fields.iter().find(|field| field.id == field_id)
    }
}

/// Defines the contract for producing prefill candidates for a target step.
///
/// Providers are registered with a `SourceAggregator`, which concatenates
/// their output in registration order. Implementations must be pure: the
/// same target and graph always produce the same list.
pub trait DataSourceProvider: Send + Sync {
    /// Identifies the provider in logs.
    fn name(&self) -> &str;

    fn data_sources(&self, target_node_id: &str, graph: &BlueprintGraph) -> Vec<PrefillSource>;
}
