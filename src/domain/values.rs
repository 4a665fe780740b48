use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Value read from a single control at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormValue {
    Text(String),
    Flag(bool),
}

impl FormValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(text) => Some(text),
            FormValue::Flag(_) => None,
        }
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        FormValue::Flag(value)
    }
}

/// How submitted values are laid out in the request body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SerializationShape {
    /// `{"<name>": value, ...}`
    #[default]
    Keyed,
    /// `{"fields": [{"fieldName": "<label>", "value": value}, ...]}`
    Labelled,
}

/// Field values in schema order, built fresh for every submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    entries: IndexMap<String, (String, FormValue)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, label: impl Into<String>, value: FormValue) {
        self.entries.insert(name.into(), (label.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.entries.get(name).map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_body(&self, shape: SerializationShape) -> Value {
        match shape {
            SerializationShape::Keyed => Value::Object(
                self.entries
                    .iter()
                    .map(|(name, (_, value))| (name.clone(), json!(value)))
                    .collect(),
            ),
            SerializationShape::Labelled => {
                let fields: Vec<Value> = self
                    .entries
                    .values()
                    .map(|(label, value)| json!({"fieldName": label, "value": value}))
                    .collect();
                json!({ "fields": fields })
            }
        }
    }
}
