//! # Journey Prefill - Dependency Resolution for Workflow Forms
//!
//! **Journey Prefill** lets a step ("form") of a workflow populate its fields
//! from values produced by steps earlier in the workflow graph, or from fixed
//! global properties. Given a workflow graph and a target step, it computes
//! which upstream steps are reachable, exposes their form fields as prefill
//! candidates, and merges them with global sources into one stable, ordered
//! candidate list.
//!
//! ## Core Workflow
//!
//! 1.  **Load the graph**: Parse the workflow document into a `BlueprintGraph`
//!     (see `blueprint::load_blueprint_str`), or implement `IntoBlueprint` for
//!     your own format.
//! 2.  **Build an aggregator**: `SourceAggregator::default()` registers the
//!     direct-dependency, transitive-dependency and global providers, in that
//!     order. Use `SourceAggregator::builder()` to swap the global catalogue or
//!     register extra providers.
//! 3.  **Resolve**: `all_data_sources(target_node_id, &graph)` returns the
//!     candidates. Resolution is pure and never fails: missing nodes, forms or
//!     prerequisites simply contribute nothing.
//! 4.  **Record selections**: turn a picked field into a `PrefillConfig` with
//!     `select_source_field` and store it in a `PrefillConfigMap`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use journey_prefill::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let graph = load_blueprint_file("graph.json")?;
//!     let aggregator = SourceAggregator::default();
//!
//!     for node in graph.form_nodes() {
//!         let sources = aggregator.all_data_sources(&node.id, &graph);
//!         println!("{}:\n{}\n", node.data.name, SourceFormatter::format_sources(&sources));
//!     }
//!
//!     let mut prefill = PrefillConfigMap::new();
//!     let sources = aggregator.all_data_sources("form-d", &graph);
//!     let picked = select_source_field(
//!         &sources,
//!         PrefillSourceType::TransitiveDependency,
//!         "form-a",
//!         "email",
//!     );
//!     if let Some(config) = picked {
//!         prefill.set_prefill_for_field("form-d", "email", Some(config));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod blueprint;
pub mod error;
pub mod fields;
pub mod graph;
pub mod prefill;
pub mod prelude;
pub mod render;
pub mod sources;
