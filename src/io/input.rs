use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use url::Url;

use super::DocumentFormat;
use crate::{
    app::{FormOptions, StyleDelivery},
    domain::{FormSchema, SerializationShape},
    error::FormError,
    schema::schema_from_envelope,
};

/// Parse structured data in any supported format into a `serde_json::Value`.
pub fn parse_document_str(contents: &str, format: DocumentFormat) -> Result<Value> {
    match format {
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(contents).with_context(|| "failed to parse JSON document")
        }
        #[cfg(feature = "yaml")]
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(contents).with_context(|| "failed to parse YAML document")
        }
        #[cfg(feature = "toml")]
        DocumentFormat::Toml => toml::from_str::<toml::Table>(contents)
            .with_context(|| "failed to parse TOML document")
            .and_then(|value| {
                serde_json::to_value(value).context("failed to convert TOML to JSON")
            }),
    }
}

/// Read a form schema from a local document using the same envelope rules as the service.
pub fn load_schema_document(contents: &str, format: DocumentFormat) -> Result<FormSchema, FormError> {
    let value = parse_document_str(contents, format)?;
    schema_from_envelope(&value)
}

/// Read renderer options from a local document.
pub fn load_options_document(contents: &str, format: DocumentFormat) -> Result<FormOptions, FormError> {
    let value = parse_document_str(contents, format)?;
    let document: OptionsDocument = serde_json::from_value(value)
        .with_context(|| format!("{format} document does not describe form options"))?;
    Ok(document.into_options()?)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OptionsDocument {
    base_url: Option<Url>,
    timeout_ms: Option<u64>,
    notice_ttl_ms: Option<u64>,
    class_prefix: Option<String>,
    stylesheet: Option<StyleDelivery>,
    submit_label: Option<String>,
    serialization: Option<SerializationShape>,
}

impl OptionsDocument {
    fn into_options(self) -> Result<FormOptions> {
        let base_url = self.base_url.context("options document must set base_url")?;
        let mut options = FormOptions::parse(base_url.as_str())?;
        if let Some(ms) = self.timeout_ms {
            options = options.with_timeout(Duration::from_millis(ms));
        }
        if let Some(ms) = self.notice_ttl_ms {
            options = options.with_notice_ttl(Duration::from_millis(ms));
        }
        if let Some(prefix) = self.class_prefix {
            options = options.with_class_prefix(prefix);
        }
        if let Some(stylesheet) = self.stylesheet {
            options = options.with_stylesheet(stylesheet);
        }
        if let Some(label) = self.submit_label {
            options = options.with_submit_label(label);
        }
        if let Some(shape) = self.serialization {
            options = options.with_serialization(shape);
        }
        Ok(options)
    }
}
