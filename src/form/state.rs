use crate::domain::{FormSchema, FormValues};

use super::{error::FieldError, field::FieldState};

/// Live control state for every field of a rendered form.
#[derive(Debug, Clone)]
pub struct FormState {
    pub id: String,
    pub title: String,
    pub description: String,
    fields: Vec<FieldState>,
}

impl FormState {
    pub fn from_schema(schema: &FormSchema) -> Self {
        Self {
            id: schema.id.clone(),
            title: schema.name.clone(),
            description: schema.description.clone(),
            fields: schema
                .fields
                .iter()
                .cloned()
                .map(FieldState::from_spec)
                .collect(),
        }
    }

    pub fn fields(&self) -> &[FieldState] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldState> {
        self.fields.iter().find(|field| field.name() == name)
    }

    fn editable_field_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields
            .iter_mut()
            .find(|field| field.name() == name)
            .filter(|field| field.is_editable())
    }

    /// Type into a text-like control. Returns `false` when the field is
    /// unknown, not text-like, read-only or disabled.
    pub fn set_text(&mut self, name: &str, value: &str) -> bool {
        self.editable_field_mut(name)
            .is_some_and(|field| field.set_text(value))
    }

    pub fn set_checked(&mut self, name: &str, checked: bool) -> bool {
        self.editable_field_mut(name)
            .is_some_and(|field| field.set_checked(checked))
    }

    /// Pick an option of a select or radio field by its value.
    pub fn select_option(&mut self, name: &str, value: &str) -> bool {
        self.editable_field_mut(name)
            .is_some_and(|field| field.select(value))
    }

    pub fn clear_selection(&mut self, name: &str) -> bool {
        self.editable_field_mut(name)
            .is_some_and(|field| field.clear_selection())
    }

    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    /// Check every field, recording messages in each error slot.
    pub fn validate(&mut self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        for field in &mut self.fields {
            field.error = field.check();
            if let Some(message) = &field.error {
                errors.push(FieldError {
                    name: field.name().to_string(),
                    message: message.clone(),
                });
            }
        }
        errors
    }

    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().filter_map(|field| {
            field
                .error
                .as_deref()
                .map(|message| (field.name(), message))
        })
    }

    pub fn values(&self) -> FormValues {
        let mut values = FormValues::new();
        for field in &self.fields {
            values.insert(field.name(), field.spec.label.as_str(), field.value());
        }
        values
    }
}
