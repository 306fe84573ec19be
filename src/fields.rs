use crate::blueprint::{FieldSchema, Form};
use serde::{Deserialize, Serialize};

/// A form field flattened out of its JSON-schema definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub id: String,
    /// The field's title, or its id when the title is empty.
    pub name: String,
    /// The field's `avantos_type`.
    #[serde(rename = "type")]
    pub field_type: String,
    pub required: bool,
}

impl FieldSchema {
    /// Flattens the schema's properties into descriptors, in schema order.
    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        self.properties
            .iter()
            .map(|(field_id, field)| FieldDescriptor {
                id: field_id.clone(),
                name: if field.title.is_empty() {
                    field_id.clone()
                } else {
                    field.title.clone()
                },
                field_type: field.avantos_type.clone(),
                required: self.required.iter().any(|required| required == field_id),
            })
            .collect()
    }
}

impl Form {
    /// The form's fields. A form without a field schema has none.
    pub fn fields(&self) -> Vec<FieldDescriptor> {
        self.field_schema
            .as_ref()
            .map(FieldSchema::descriptors)
            .unwrap_or_default()
    }
}

/// Fields of an optional form, as returned by the graph lookups.
pub fn form_fields(form: Option<&Form>) -> Vec<FieldDescriptor> {
    form.map(Form::fields).unwrap_or_default()
}
