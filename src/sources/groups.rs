use super::{PrefillSource, PrefillSourceType};
use itertools::Itertools;

/// A candidate list split by source type, for sectioned display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceGroups {
    pub direct: Vec<PrefillSource>,
    pub transitive: Vec<PrefillSource>,
    pub global: Vec<PrefillSource>,
}

impl SourceGroups {
    /// Partitions `sources` by type. Order inside each group is preserved.
    pub fn from_sources(sources: impl IntoIterator<Item = PrefillSource>) -> Self {
        let mut by_type = sources
            .into_iter()
            .into_group_map_by(|source| source.source_type);
        let mut take = |source_type: PrefillSourceType| by_type.remove(&source_type).unwrap_or_default();

        Self {
            direct: take(PrefillSourceType::DirectDependency),
            transitive: take(PrefillSourceType::TransitiveDependency),
            global: take(PrefillSourceType::Global),
        }
    }

    pub fn group(&self, source_type: PrefillSourceType) -> &[PrefillSource] {
        match source_type {
            PrefillSourceType::DirectDependency => &self.direct,
            PrefillSourceType::TransitiveDependency => &self.transitive,
            PrefillSourceType::Global => &self.global,
        }
    }

    /// Non-empty groups in picker order.
    pub fn sections(&self) -> impl Iterator<Item = (PrefillSourceType, &[PrefillSource])> {
        PrefillSourceType::ALL
            .into_iter()
            .map(|source_type| (source_type, self.group(source_type)))
            .filter(|(_, sources)| !sources.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.transitive.is_empty() && self.global.is_empty()
    }

    pub fn len(&self) -> usize {
        self.direct.len() + self.transitive.len() + self.global.len()
    }
}
