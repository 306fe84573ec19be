use crate::sources::PrefillSourceType;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The binding of one target field to one field of a prefill source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrefillConfig {
    #[serde(alias = "source_type")]
    pub source_type: PrefillSourceType,
    #[serde(alias = "source_id")]
    pub source_id: String,
    #[serde(alias = "field_id")]
    pub field_id: String,
}

impl PrefillConfig {
    pub fn new(
        source_type: PrefillSourceType,
        source_id: impl Into<String>,
        field_id: impl Into<String>,
    ) -> Self {
        Self {
            source_type,
            source_id: source_id.into(),
            field_id: field_id.into(),
        }
    }
}

/// Bindings of one form, keyed by field id. `None` is an explicitly empty binding.
pub type FieldPrefillConfig = IndexMap<String, Option<PrefillConfig>>;

/// User-chosen prefill bindings: form (node) id -> field id -> binding.
///
/// This is session state owned by the caller. Resolution never reads or
/// writes it; it is only changed through `set_prefill_for_field` and
/// `clear_prefill_for_field`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefillConfigMap {
    forms: IndexMap<String, FieldPrefillConfig>,
}

impl PrefillConfigMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `config` for the field, creating the form entry on first use.
    pub fn set_prefill_for_field(
        &mut self,
        form_id: &str,
        field_id: &str,
        config: Option<PrefillConfig>,
    ) {
        self.forms
            .entry(form_id.to_string())
            .or_default()
            .insert(field_id.to_string(), config);
    }

    /// Removes the field's entry. The form entry itself is kept.
    pub fn clear_prefill_for_field(&mut self, form_id: &str, field_id: &str) {
        if let Some(fields) = self.forms.get_mut(form_id) {
            fields.shift_remove(field_id);
        }
    }

    /// The stored entries of one form, in insertion order. Unknown forms have none.
    pub fn form_prefill_config(
        &self,
        form_id: &str,
    ) -> impl Iterator<Item = (&str, Option<&PrefillConfig>)> {
        self.forms
            .get(form_id)
            .into_iter()
            .flatten()
            .map(|(field_id, config)| (field_id.as_str(), config.as_ref()))
    }

    /// The binding of one field, if one is set and non-empty.
    pub fn prefill_for_field(&self, form_id: &str, field_id: &str) -> Option<&PrefillConfig> {
        self.forms.get(form_id)?.get(field_id)?.as_ref()
    }

    pub fn form_ids(&self) -> impl Iterator<Item = &str> {
        self.forms.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.forms.values().all(|fields| fields.is_empty())
    }
}
