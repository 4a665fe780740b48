use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::{domain::SerializationShape, error::FormError};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(5);
pub const DEFAULT_CLASS_PREFIX: &str = "schemaform";
pub const DEFAULT_SUBMIT_LABEL: &str = "Submit";

/// How the form's stylesheet reaches the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "href")]
pub enum StyleDelivery {
    /// Embed the bundled stylesheet in a `<style>` element.
    #[default]
    Inline,
    /// Reference an external stylesheet.
    Link(String),
    /// The embedding page styles the form itself.
    None,
}

#[derive(Debug, Clone)]
pub struct FormOptions {
    pub base_url: Url,
    pub timeout: Duration,
    pub notice_ttl: Duration,
    pub class_prefix: String,
    pub stylesheet: StyleDelivery,
    pub submit_label: String,
    pub serialization: SerializationShape,
}

impl FormOptions {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            notice_ttl: DEFAULT_NOTICE_TTL,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            stylesheet: StyleDelivery::default(),
            submit_label: DEFAULT_SUBMIT_LABEL.to_string(),
            serialization: SerializationShape::default(),
        }
    }

    pub fn parse(base_url: &str) -> Result<Self, FormError> {
        let url =
            Url::parse(base_url).map_err(|_| FormError::InvalidBaseAddress(base_url.to_string()))?;
        if url.cannot_be_a_base() {
            return Err(FormError::InvalidBaseAddress(base_url.to_string()));
        }
        Ok(Self::new(url))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    pub fn with_stylesheet(mut self, delivery: StyleDelivery) -> Self {
        self.stylesheet = delivery;
        self
    }

    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }

    pub fn with_serialization(mut self, shape: SerializationShape) -> Self {
        self.serialization = shape;
        self
    }

    /// Endpoint serving both the schema read and the submission write.
    pub fn form_endpoint(&self, form_id: &str) -> Result<Url, FormError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FormError::InvalidBaseAddress(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["public", "submission", "form", form_id]);
        Ok(url)
    }

    /// CSS class or id with the configured prefix.
    pub(crate) fn class(&self, suffix: &str) -> String {
        format!("{}-{suffix}", self.class_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let plain = FormOptions::parse("https://forms.example.com").expect("options");
        let slashed = FormOptions::parse("https://forms.example.com/").expect("options");
        let expected = "https://forms.example.com/public/submission/form/abc";
        assert_eq!(plain.form_endpoint("abc").expect("url").as_str(), expected);
        assert_eq!(slashed.form_endpoint("abc").expect("url").as_str(), expected);
    }

    #[test]
    fn endpoint_keeps_base_path_and_encodes_id() {
        let options = FormOptions::parse("http://localhost:9000/api/").expect("options");
        let url = options.form_endpoint("a b/c").expect("url");
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/api/public/submission/form/a%20b%2Fc"
        );
    }

    #[test]
    fn rejects_bases_without_paths() {
        assert!(matches!(
            FormOptions::parse("mailto:forms@example.com"),
            Err(FormError::InvalidBaseAddress(_))
        ));
        assert!(matches!(
            FormOptions::parse("not a url"),
            Err(FormError::InvalidBaseAddress(_))
        ));
    }

    #[test]
    fn builders_override_defaults() {
        let options = FormOptions::parse("http://localhost:9000")
            .expect("options")
            .with_timeout(Duration::from_millis(250))
            .with_class_prefix("acme")
            .with_submit_label("Send");
        assert_eq!(options.timeout, Duration::from_millis(250));
        assert_eq!(options.notice_ttl, DEFAULT_NOTICE_TTL);
        assert_eq!(options.class("form-x"), "acme-form-x");
        assert_eq!(options.submit_label, "Send");
    }
}
