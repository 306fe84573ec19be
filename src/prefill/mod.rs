mod config;
mod selection;

pub use config::{FieldPrefillConfig, PrefillConfig, PrefillConfigMap};
pub use selection::select_source_field;
