use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Control kind requested by the server for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Email,
    Number,
    Textarea,
    Select,
    Radio,
    Checkbox,
    // Unrecognized kinds degrade to a plain text input.
    #[serde(other)]
    Text,
}

impl FieldType {
    /// Whether the control holds free text typed by the user.
    pub fn is_text_like(self) -> bool {
        matches!(
            self,
            FieldType::Text | FieldType::Email | FieldType::Number | FieldType::Textarea
        )
    }

    pub(crate) fn input_kind(self) -> &'static str {
        match self {
            FieldType::Email => "email",
            FieldType::Number => "number",
            _ => "text",
        }
    }
}

/// One choice of a select or radio field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FieldOption {
    Bare(String),
    Pair {
        #[serde(default)]
        value: Option<String>,
        #[serde(default)]
        label: Option<String>,
    },
}

impl FieldOption {
    pub fn value(&self) -> &str {
        match self {
            FieldOption::Bare(text) => text,
            FieldOption::Pair { value, label } => first_filled(value, label),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FieldOption::Bare(text) => text,
            FieldOption::Pair { value, label } => first_filled(label, value),
        }
    }
}

fn first_filled<'a>(primary: &'a Option<String>, fallback: &'a Option<String>) -> &'a str {
    primary
        .as_deref()
        .filter(|text| !text.is_empty())
        .or_else(|| fallback.as_deref())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    #[serde(default, deserialize_with = "lenient_id")]
    pub label: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub required: bool,
    #[serde(default)]
    pub regex: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub default_value: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub read_only: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub disabled: bool,
    #[serde(default)]
    pub options: Option<Vec<FieldOption>>,
}

impl FieldSpec {
    pub fn options(&self) -> &[FieldOption] {
        self.options.as_deref().unwrap_or_default()
    }

    /// Placeholder, if one is set and non-empty.
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref().filter(|text| !text.is_empty())
    }

    pub fn pattern(&self) -> Option<&str> {
        self.regex.as_deref().filter(|text| !text.is_empty())
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref().filter(|text| !text.is_empty())
    }

    /// Checkboxes start checked only for the literal default `"true"`.
    pub fn default_checked(&self) -> bool {
        self.default_value() == Some("true")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FormSchema {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_id")]
    pub description: String,
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?))
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(value: Value) -> FieldSpec {
        serde_json::from_value(value).expect("field")
    }

    #[test]
    fn option_pairs_fall_back_to_each_other() {
        let spec = field(json!({
            "name": "size",
            "fieldType": "select",
            "label": "Size",
            "options": ["S", {"value": "m", "label": "Medium"}, {"label": "Large"}, {"value": "xl", "label": ""}]
        }));
        let pairs: Vec<(&str, &str)> = spec
            .options()
            .iter()
            .map(|option| (option.value(), option.label()))
            .collect();
        assert_eq!(
            pairs,
            vec![("S", "S"), ("m", "Medium"), ("Large", "Large"), ("xl", "xl")]
        );
    }

    #[test]
    fn unknown_field_type_degrades_to_text() {
        let spec = field(json!({"name": "when", "fieldType": "date", "label": "When"}));
        assert_eq!(spec.field_type, FieldType::Text);
    }

    #[test]
    fn flags_tolerate_null_and_absence() {
        let spec = field(json!({
            "name": "a",
            "fieldType": "text",
            "label": "A",
            "required": null,
            "defaultValue": true
        }));
        assert!(!spec.required);
        assert!(!spec.read_only);
        assert_eq!(spec.default_value(), Some("true"));
        assert!(spec.default_checked());
    }

    #[test]
    fn null_label_reads_as_empty() {
        let spec = field(json!({"name": "a", "fieldType": "text", "label": null}));
        assert_eq!(spec.label, "");
        let numbered = field(json!({"name": "b", "fieldType": "text", "label": 7}));
        assert_eq!(numbered.label, "7");
    }

    #[test]
    fn only_literal_true_prechecks() {
        let unchecked = field(json!({"name": "c", "fieldType": "checkbox", "label": "C", "defaultValue": "false"}));
        let absent = field(json!({"name": "c", "fieldType": "checkbox", "label": "C"}));
        let yes = field(json!({"name": "c", "fieldType": "checkbox", "label": "C", "defaultValue": "yes"}));
        assert!(!unchecked.default_checked());
        assert!(!absent.default_checked());
        assert!(!yes.default_checked());
    }
}
