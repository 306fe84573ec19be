use thiserror::Error;

/// Errors raised while obtaining a workflow graph.
///
/// These only occur at the supply boundary. Resolution over a loaded graph
/// never fails; lookups that miss return `None` or an empty list instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlueprintError {
    #[error("Could not read blueprint file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse blueprint JSON: {0}")]
    JsonParseError(String),

    #[error("Blueprint endpoint reported an error: {0}")]
    ServerError(String),
}

/// Errors that can occur when converting a custom workflow format into a `BlueprintGraph`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors raised while loading a global source catalogue.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogueError {
    #[error("Could not read catalogue file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse catalogue JSON: {0}")]
    JsonParseError(String),
}
