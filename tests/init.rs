mod support;

use std::sync::Arc;

use schemaform::{
    FormError, FormRenderer, LOAD_FAILURE_HINT, LOAD_FAILURE_TITLE, MemoryPage, RequestError,
    StyleDelivery, Transport,
};
use serde_json::json;
use support::{FORM_ID, Scripted, ScriptedTransport, TARGET, contact_schema, options, reply};

#[tokio::test]
async fn renders_fetched_schema_into_target() {
    support::init_tracing();
    let transport = ScriptedTransport::new([reply(200, contact_schema())]);
    let mut page = MemoryPage::new().with_surface(TARGET);

    let renderer = FormRenderer::init_with_transport(
        &mut page,
        FORM_ID,
        TARGET,
        options(),
        transport.clone() as Arc<dyn Transport>,
    )
    .await
    .expect("form initializes");

    assert_eq!(renderer.form().title, "Contact");
    assert_eq!(page.render_count(TARGET), 1);
    let html = page.content(TARGET).expect("target");
    assert!(html.starts_with("<style id=\"schemaform-styles\">"));
    assert!(html.contains("<h1 class=\"schemaform-form-title\">Contact</h1>"));
    assert!(html.contains("id=\"schemaform-form-contact\""));
    assert!(html.contains("type=\"email\""));
    assert!(html.contains("type=\"checkbox\""));
    assert_eq!(
        transport.requests()[0].url,
        "https://forms.example.com/public/submission/form/contact"
    );
}

#[tokio::test]
async fn missing_target_fails_before_any_request() {
    let transport = ScriptedTransport::new([]);
    let mut page = MemoryPage::new().with_surface("elsewhere");

    let err = FormRenderer::init_with_transport(
        &mut page,
        FORM_ID,
        TARGET,
        options(),
        transport.clone() as Arc<dyn Transport>,
    )
    .await
    .expect_err("target is missing");

    assert!(matches!(err, FormError::TargetNotFound { ref id } if id == TARGET));
    assert!(transport.requests().is_empty());
    assert_eq!(page.content("elsewhere"), Some(""));
}

#[tokio::test]
async fn empty_form_id_is_rejected() {
    let transport = ScriptedTransport::new([]);
    let mut page = MemoryPage::new().with_surface(TARGET);

    let err = FormRenderer::init_with_transport(
        &mut page,
        "",
        TARGET,
        options(),
        transport.clone() as Arc<dyn Transport>,
    )
    .await
    .expect_err("form id is empty");

    assert!(matches!(err, FormError::MissingFormId));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn fetch_failure_shows_load_error() {
    let transport = ScriptedTransport::new([reply(500, json!({"message": "boom"}))]);
    let mut page = MemoryPage::new().with_surface(TARGET);

    let err = FormRenderer::init_with_transport(
        &mut page,
        FORM_ID,
        TARGET,
        options().with_stylesheet(StyleDelivery::None),
        transport as Arc<dyn Transport>,
    )
    .await
    .expect_err("fetch fails");

    assert!(matches!(err, FormError::FetchFailed(RequestError::Status(500))));
    let html = page.content(TARGET).expect("target");
    assert!(html.contains(LOAD_FAILURE_TITLE));
    assert!(html.contains(LOAD_FAILURE_HINT));
    assert!(!html.contains("<form"));
}

#[tokio::test]
async fn network_errors_are_fetch_failures() {
    let transport = ScriptedTransport::new([Scripted::Fail(RequestError::Network(
        "connection refused".to_string(),
    ))]);
    let mut page = MemoryPage::new().with_surface(TARGET);

    let err = FormRenderer::init_with_transport(
        &mut page,
        FORM_ID,
        TARGET,
        options(),
        transport as Arc<dyn Transport>,
    )
    .await
    .expect_err("fetch fails");

    assert!(matches!(err, FormError::FetchFailed(RequestError::Network(_))));
    assert!(page.content(TARGET).expect("target").contains(LOAD_FAILURE_TITLE));
}

#[tokio::test]
async fn malformed_schema_is_reported_as_invalid() {
    let transport = ScriptedTransport::new([reply(200, json!({"success": true, "data": []}))]);
    let mut page = MemoryPage::new().with_surface(TARGET);

    let err = FormRenderer::init_with_transport(
        &mut page,
        FORM_ID,
        TARGET,
        options(),
        transport as Arc<dyn Transport>,
    )
    .await
    .expect_err("schema is malformed");

    assert!(matches!(err, FormError::SchemaInvalid { .. }));
    assert!(page.content(TARGET).expect("target").contains(LOAD_FAILURE_TITLE));
}

#[tokio::test]
async fn linked_stylesheet_replaces_inline_styles() {
    let transport = ScriptedTransport::new([reply(200, contact_schema())]);
    let mut page = MemoryPage::new().with_surface(TARGET);
    let options = options()
        .with_stylesheet(StyleDelivery::Link("/static/forms.css".to_string()))
        .with_class_prefix("acme");

    FormRenderer::init_with_transport(
        &mut page,
        FORM_ID,
        TARGET,
        options,
        transport as Arc<dyn Transport>,
    )
    .await
    .expect("form initializes");

    let html = page.content(TARGET).expect("target");
    assert!(html.starts_with(
        "<link id=\"acme-styles\" rel=\"stylesheet\" href=\"/static/forms.css\">"
    ));
    assert!(!html.contains("<style"));
    assert!(html.contains("class=\"acme-form-container\""));
}
