use super::{PrefillSource, PrefillSourceType, SourceField};
use crate::error::CatalogueError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Entry of a catalogue file. The source type is implied.
#[derive(Deserialize)]
struct CatalogueEntry {
    id: String,
    name: String,
    #[serde(default)]
    fields: Vec<SourceField>,
}

/// The set of global (non-graph) prefill sources.
///
/// Every source in a catalogue is tagged `PrefillSourceType::Global`,
/// whatever it was constructed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalCatalogue {
    sources: Vec<PrefillSource>,
}

impl Default for GlobalCatalogue {
    /// User identity and organization properties.
    fn default() -> Self {
        Self::from_entries([
            (
                "global_user",
                "User Properties",
                vec![
                    SourceField::new("user_id", "User ID"),
                    SourceField::new("user_email", "User Email"),
                    SourceField::new("user_name", "User Name"),
                ],
            ),
            (
                "organization",
                "Organization Properties",
                vec![
                    SourceField::new("org_id", "Organization ID"),
                    SourceField::new("org_name", "Organization Name"),
                ],
            ),
        ])
    }
}

impl GlobalCatalogue {
    pub fn new(sources: Vec<PrefillSource>) -> Self {
        Self::from_parts(
            sources
                .into_iter()
                .map(|source| (source.id, source.name, source.fields)),
        )
    }

    /// The only place catalogue sources receive their type.
    fn from_parts(parts: impl IntoIterator<Item = (String, String, Vec<SourceField>)>) -> Self {
        Self {
            sources: parts
                .into_iter()
                .map(|(id, name, fields)| PrefillSource {
                    source_type: PrefillSourceType::Global,
                    id,
                    name,
                    fields,
                })
                .collect(),
        }
    }

    fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a str, Vec<SourceField>)>,
    ) -> Self {
        Self::from_parts(
            entries
                .into_iter()
                .map(|(id, name, fields)| (id.to_string(), name.to_string(), fields)),
        )
    }

    /// Parses a JSON array of `{id, name, fields: [{id, name}]}` entries.
    pub fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let entries: Vec<CatalogueEntry> =
            serde_json::from_str(json).map_err(|e| CatalogueError::JsonParseError(e.to_string()))?;
        Ok(Self::from_parts(
            entries
                .into_iter()
                .map(|entry| (entry.id, entry.name, entry.fields)),
        ))
    }

    /// Loads a catalogue file in the format accepted by `from_json`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogueError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn sources(&self) -> &[PrefillSource] {
        &self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
