use crate::blueprint::BlueprintGraph;
use crate::prefill::PrefillConfig;
use crate::sources::{PrefillSource, PrefillSourceType, SourceGroups};
use itertools::Itertools;

pub const NO_SOURCES_MESSAGE: &str = "No available prefill sources found.";

/// Formats prefill candidates and bindings into human-readable text
pub struct SourceFormatter;

impl SourceFormatter {
    /// Lists candidates under one heading per non-empty source type.
    pub fn format_sources(sources: &[PrefillSource]) -> String {
        Self::format_groups(&SourceGroups::from_sources(sources.iter().cloned()))
    }

    pub fn format_groups(groups: &SourceGroups) -> String {
        if groups.is_empty() {
            return NO_SOURCES_MESSAGE.to_string();
        }

        groups
            .sections()
            .map(|(source_type, sources)| {
                let body = sources.iter().map(Self::format_source).join("\n");
                format!("{}\n{}", source_type.heading(), body)
            })
            .join("\n\n")
    }

    fn format_source(source: &PrefillSource) -> String {
        let mut result = format!("  {} ({})", source.name, source.id);
        for field in &source.fields {
            result.push_str(&format!("\n    - {} [{}]", field.name, field.id));
        }
        result
    }

    /// A short label for a stored binding, e.g. `Form A > Email`.
    ///
    /// Global bindings are labelled `Global: <source id> > <field id>`.
    /// Bindings whose source node or form no longer resolves are labelled
    /// `Unknown source` or `Unknown form`.
    pub fn describe_binding(graph: &BlueprintGraph, config: &PrefillConfig) -> String {
        if config.source_type == PrefillSourceType::Global {
            return format!("Global: {} > {}", config.source_id, config.field_id);
        }

        let Some(node) = graph.find_node_by_id(&config.source_id) else {
            return "Unknown source".to_string();
        };
        let Some(form) = graph.find_form_by_component_key(&config.source_id) else {
            return "Unknown form".to_string();
        };

        let field_name = form
            .field_schema
            .as_ref()
            .and_then(|schema| schema.properties.get(&config.field_id))
            .map(|field| field.title.as_str())
            .filter(|title| !title.is_empty())
            .unwrap_or(config.field_id.as_str());

        format!("{} > {}", node.data.name, field_name)
    }
}
