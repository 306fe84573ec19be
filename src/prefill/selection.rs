use super::config::PrefillConfig;
use crate::sources::{PrefillSource, PrefillSourceType};

/// Builds the binding for a field picked from a candidate list.
///
/// Graph node ids and global catalogue ids share one namespace, so the
/// candidate is matched on both `source_type` and `source_id`. `None` when no
/// candidate matches. `field_id` is copied through as given.
pub fn select_source_field(
    sources: &[PrefillSource],
    source_type: PrefillSourceType,
    source_id: &str,
    field_id: &str,
) -> Option<PrefillConfig> {
    let source = sources
        .iter()
        .find(|source| source.source_type == source_type && source.id == source_id)?;
    Some(PrefillConfig::new(source.source_type, source.id.clone(), field_id))
}
