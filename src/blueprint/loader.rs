use super::definition::BlueprintGraph;
use crate::error::BlueprintError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{error, warn};

/// Message placed in the error envelope when the graph cannot be read.
pub const READ_FAILURE_MESSAGE: &str = "Failed to read blueprint data";

/// The envelope the graph endpoint answers with.
///
/// On success the body is `{"data": <graph>}`, on failure `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlueprintResponse {
    Data { data: BlueprintGraph },
    Error { error: String },
}

impl BlueprintResponse {
    /// Builds the envelope for a load attempt, logging the cause of a failure.
    pub fn from_result(result: Result<BlueprintGraph, BlueprintError>) -> Self {
        match result {
            Ok(data) => BlueprintResponse::Data { data },
            Err(e) => {
                error!(error = %e, "error reading blueprint data");
                BlueprintResponse::Error {
                    error: READ_FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }

    /// Parses an envelope received from the graph endpoint.
    pub fn from_json(body: &str) -> Result<Self, BlueprintError> {
        serde_json::from_str(body).map_err(|e| BlueprintError::JsonParseError(e.to_string()))
    }

    /// Unwraps the graph, turning an error envelope into `BlueprintError::ServerError`.
    pub fn into_result(self) -> Result<BlueprintGraph, BlueprintError> {
        match self {
            BlueprintResponse::Data { data } => Ok(data),
            BlueprintResponse::Error { error } => Err(BlueprintError::ServerError(error)),
        }
    }
}

/// Parses a graph document.
///
/// A blank body is not an error: it yields a graph with no nodes, edges or forms.
pub fn load_blueprint_str(body: &str) -> Result<BlueprintGraph, BlueprintError> {
    if body.trim().is_empty() {
        warn!("blueprint body is empty, using an empty graph");
        return Ok(BlueprintGraph::default());
    }
    serde_json::from_str(body).map_err(|e| BlueprintError::JsonParseError(e.to_string()))
}

/// Reads and parses a graph document from disk.
pub fn load_blueprint_file(path: impl AsRef<Path>) -> Result<BlueprintGraph, BlueprintError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| BlueprintError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    load_blueprint_str(&content)
}
