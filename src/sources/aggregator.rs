use super::catalogue::GlobalCatalogue;
use super::groups::SourceGroups;
use super::providers::{DirectDependencyProvider, GlobalDataProvider, TransitiveDependencyProvider};
use super::{DataSourceProvider, PrefillSource};
use crate::blueprint::BlueprintGraph;
use tracing::debug;

/// An ordered registry of providers whose outputs form the candidate list.
///
/// The aggregator holds no resolution state. It can be shared across
/// threads and queried concurrently against the same graph snapshot.
pub struct SourceAggregator {
    providers: Vec<Box<dyn DataSourceProvider>>,
}

pub struct SourceAggregatorBuilder {
    defaults: bool,
    catalogue: GlobalCatalogue,
    extra: Vec<Box<dyn DataSourceProvider>>,
}

impl Default for SourceAggregatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceAggregatorBuilder {
    /// Starts from the default registration: direct, transitive, global.
    pub fn new() -> Self {
        Self {
            defaults: true,
            catalogue: GlobalCatalogue::default(),
            extra: Vec::new(),
        }
    }

    /// Replaces the catalogue served by the built-in global provider.
    pub fn with_global_catalogue(mut self, catalogue: GlobalCatalogue) -> Self {
        self.catalogue = catalogue;
        self
    }

    /// Drops the three built-in providers; only providers added with
    /// `with_provider` are registered.
    pub fn without_default_providers(mut self) -> Self {
        self.defaults = false;
        self
    }

    /// Registers an additional provider after the built-in ones.
    pub fn with_provider(mut self, provider: Box<dyn DataSourceProvider>) -> Self {
        self.extra.push(provider);
        self
    }

    pub fn build(self) -> SourceAggregator {
        let mut providers: Vec<Box<dyn DataSourceProvider>> = Vec::with_capacity(3 + self.extra.len());
        if self.defaults {
            providers.push(Box::new(DirectDependencyProvider));
            providers.push(Box::new(TransitiveDependencyProvider));
            providers.push(Box::new(GlobalDataProvider::with_catalogue(self.catalogue)));
        }
        providers.extend(self.extra);
        SourceAggregator { providers }
    }
}

impl Default for SourceAggregator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SourceAggregator {
    pub fn builder() -> SourceAggregatorBuilder {
        SourceAggregatorBuilder::new()
    }

    /// Appends a provider to the end of the registration order.
    pub fn register_provider(&mut self, provider: Box<dyn DataSourceProvider>) {
        self.providers.push(provider);
    }

    /// Names of the registered providers, in registration order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|provider| provider.name()).collect()
    }

    /// Every provider's candidates for `target_node_id`, concatenated in
    /// registration order.
    pub fn all_data_sources(&self, target_node_id: &str, graph: &BlueprintGraph) -> Vec<PrefillSource> {
        self.providers
            .iter()
            .flat_map(|provider| {
                let sources = provider.data_sources(target_node_id, graph);
                debug!(
                    provider = provider.name(),
                    target_node_id,
                    count = sources.len(),
                    "collected prefill sources"
                );
                sources
            })
            .collect()
    }

    /// `all_data_sources`, split into sections for display.
    pub fn grouped_data_sources(&self, target_node_id: &str, graph: &BlueprintGraph) -> SourceGroups {
        SourceGroups::from_sources(self.all_data_sources(target_node_id, graph))
    }
}
