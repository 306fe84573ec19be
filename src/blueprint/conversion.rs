use super::definition::BlueprintGraph;
use crate::error::GraphConversionError;

/// A trait for foreign workflow documents that can be converted into a `BlueprintGraph`.
///
/// The resolver only ever sees `BlueprintGraph`. When a workflow arrives in a
/// different shape (an older export, a YAML authoring format, a database
/// row set), implement this trait on the parsed form to provide the
/// translation layer.
///
/// # Example
///
/// ```rust,no_run
/// use journey_prefill::prelude::*;
/// use journey_prefill::error::GraphConversionError;
///
/// struct Step { id: String, after: Vec<String> }
/// struct Pipeline { steps: Vec<Step> }
///
/// impl IntoBlueprint for Pipeline {
///     fn into_blueprint(self) -> std::result::Result<BlueprintGraph, GraphConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| Node {
///                 id: step.id.clone(),
///                 node_type: "form".to_string(),
///                 data: NodeData {
///                     id: step.id,
///                     prerequisites: step.after,
///                     ..Default::default()
///                 },
///                 ..Default::default()
///             })
///             .collect();
///         Ok(BlueprintGraph { nodes, ..Default::default() })
///     }
/// }
/// ```
pub trait IntoBlueprint {
    /// Consumes the object and converts it into a workflow graph snapshot.
    fn into_blueprint(self) -> Result<BlueprintGraph, GraphConversionError>;
}

impl IntoBlueprint for BlueprintGraph {
    fn into_blueprint(self) -> Result<BlueprintGraph, GraphConversionError> {
        Ok(self)
    }
}
