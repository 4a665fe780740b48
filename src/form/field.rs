use regex::Regex;
use tracing::warn;

use crate::domain::{FieldSpec, FieldType, FormValue};

/// Current state of the control rendered for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlValue {
    Text(String),
    Checked(bool),
    /// Selected option value of a select or radio group.
    Choice(Option<String>),
}

#[derive(Debug, Clone)]
pub struct FieldState {
    pub spec: FieldSpec,
    pub(crate) control: ControlValue,
    pub error: Option<String>,
    pattern: Option<Regex>,
}

impl FieldState {
    pub fn from_spec(spec: FieldSpec) -> Self {
        let control = initial_control(&spec);
        let pattern = spec
            .pattern()
            .and_then(|source| match Regex::new(source) {
                Ok(regex) => Some(regex),
                Err(err) => {
                    warn!(
                        field = %spec.name,
                        pattern = source,
                        error = %err,
                        "ignoring invalid validation pattern"
                    );
                    None
                }
            });
        Self {
            spec,
            control,
            error: None,
            pattern,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn control(&self) -> &ControlValue {
        &self.control
    }

    pub fn is_editable(&self) -> bool {
        !self.spec.read_only && !self.spec.disabled
    }

    /// Whether the control counts as empty for the `required` rule.
    pub fn is_blank(&self) -> bool {
        match &self.control {
            ControlValue::Text(text) => text.trim().is_empty(),
            ControlValue::Checked(checked) => !checked,
            ControlValue::Choice(choice) => choice.as_deref().is_none_or(|v| v.trim().is_empty()),
        }
    }

    /// Run the per-field rules, returning the message to show on failure.
    pub fn check(&self) -> Option<String> {
        let label = &self.spec.label;
        if self.spec.required && self.is_blank() {
            return Some(format!("{label} is required"));
        }
        let raw = match &self.control {
            ControlValue::Text(text) => text.as_str(),
            ControlValue::Choice(choice) => choice.as_deref().unwrap_or_default(),
            ControlValue::Checked(_) => return None,
        };
        if let Some(pattern) = &self.pattern
            && !raw.trim().is_empty()
            && !pattern.is_match(raw)
        {
            return Some(format!("{label} format is invalid"));
        }
        None
    }

    pub fn value(&self) -> FormValue {
        match &self.control {
            ControlValue::Text(text) => FormValue::Text(text.clone()),
            ControlValue::Checked(checked) => FormValue::Flag(*checked),
            ControlValue::Choice(choice) => FormValue::Text(choice.clone().unwrap_or_default()),
        }
    }

    pub(crate) fn set_text(&mut self, value: &str) -> bool {
        match &mut self.control {
            ControlValue::Text(text) if self.spec.field_type.is_text_like() => {
                value.clone_into(text);
                true
            }
            _ => false,
        }
    }

    pub(crate) fn set_checked(&mut self, checked: bool) -> bool {
        match &mut self.control {
            ControlValue::Checked(current) => {
                *current = checked;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn select(&mut self, value: &str) -> bool {
        let known = self.spec.options().iter().any(|option| option.value() == value);
        match &mut self.control {
            ControlValue::Choice(choice) if known => {
                *choice = Some(value.to_string());
                true
            }
            _ => false,
        }
    }

    pub(crate) fn clear_selection(&mut self) -> bool {
        match &mut self.control {
            ControlValue::Choice(choice) if self.spec.field_type == FieldType::Radio => {
                *choice = None;
                true
            }
            _ => false,
        }
    }
}

fn initial_control(spec: &FieldSpec) -> ControlValue {
    let default = spec.default_value();
    match spec.field_type {
        FieldType::Checkbox => ControlValue::Checked(spec.default_checked()),
        FieldType::Select => {
            // A select always shows some option; fall back to the first one.
            let options = spec.options();
            let chosen = default
                .and_then(|d| options.iter().find(|option| option.value() == d))
                .or_else(|| options.first());
            ControlValue::Choice(chosen.map(|option| option.value().to_string()))
        }
        FieldType::Radio => {
            let chosen = default.filter(|d| spec.options().iter().any(|o| o.value() == *d));
            ControlValue::Choice(chosen.map(str::to_string))
        }
        _ => ControlValue::Text(default.unwrap_or_default().to_string()),
    }
}
