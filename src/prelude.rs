//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! journey-prefill crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use journey_prefill::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let graph = load_blueprint_str(&std::fs::read_to_string("path/to/graph.json")?)?;
//! let sources = SourceAggregator::default().all_data_sources("form-c", &graph);
//! println!("{}", SourceFormatter::format_sources(&sources));
//! # Ok(())
//! # }
//! ```

// Graph model and loading
pub use crate::blueprint::{
    BlueprintGraph, BlueprintResponse, Edge, FieldItems, FieldSchema, Form, FormField,
    IntoBlueprint, Node, NodeData, Position, SlaDuration, load_blueprint_file,
    load_blueprint_str,
};

// Resolution
pub use crate::fields::{FieldDescriptor, form_fields};
pub use crate::graph::DependencyResolver;
pub use crate::sources::{
    DataSourceProvider, DirectDependencyProvider, GlobalCatalogue, GlobalDataProvider,
    PrefillSource, PrefillSourceType, SourceAggregator, SourceAggregatorBuilder, SourceField,
    SourceGroups, TransitiveDependencyProvider,
};

// Selections
pub use crate::prefill::{PrefillConfig, PrefillConfigMap, select_source_field};

// Error types
pub use crate::error::{BlueprintError, CatalogueError, GraphConversionError};

// Formatting
pub use crate::render::SourceFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
