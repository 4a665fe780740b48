use std::{sync::Arc, time::Instant};

use tracing::{error, info, warn};

use crate::{
    client::{ReqwestTransport, Transport, fetch_schema},
    domain::FormSchema,
    error::FormError,
    form::FormState,
    presentation::{FormView, ViewContext, build_view, load_failure_html},
};

use super::{
    controller::{InFlight, SubmitOutcome, SubmitPhase, deliver},
    notice::{Notice, NoticeBoard},
    options::FormOptions,
    page::Page,
    validation::{ValidationOutcome, validate_form},
};

/// A schema-driven form bound to one target element of a page.
pub struct FormRenderer {
    form_id: String,
    target_id: String,
    options: FormOptions,
    transport: Arc<dyn Transport>,
    state: FormState,
    notices: NoticeBoard,
    phase: SubmitPhase,
}

impl std::fmt::Debug for FormRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormRenderer")
            .field("form_id", &self.form_id)
            .field("target_id", &self.target_id)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

impl FormRenderer {
    /// Fetch the schema of `form_id` and render it into `target_id` using
    /// a default HTTP client.
    pub async fn init(
        page: &mut dyn Page,
        form_id: &str,
        target_id: &str,
        options: FormOptions,
    ) -> Result<Self, FormError> {
        let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new());
        Self::init_with_transport(page, form_id, target_id, options, transport).await
    }

    /// Like [`FormRenderer::init`], with a caller-supplied transport.
    ///
    /// When the schema cannot be loaded, a failure notice replaces the
    /// target's content before the error is returned.
    pub async fn init_with_transport(
        page: &mut dyn Page,
        form_id: &str,
        target_id: &str,
        options: FormOptions,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, FormError> {
        if page.surface(target_id).is_none() {
            error!(target_id, "target element not found");
            return Err(FormError::TargetNotFound {
                id: target_id.to_string(),
            });
        }

        match fetch_schema(transport.as_ref(), &options, form_id).await {
            Ok(schema) => {
                let renderer = Self::from_schema(&schema, form_id, target_id, options, transport);
                renderer.render(page);
                info!(form_id, fields = schema.fields.len(), "form rendered");
                Ok(renderer)
            }
            Err(err) => {
                error!(form_id, error = %err, "failed to initialize form");
                if let Some(surface) = page.surface(target_id) {
                    surface.replace_content(&load_failure_html(&options));
                }
                Err(err)
            }
        }
    }

    /// Bind an already available schema. Nothing is rendered until
    /// [`FormRenderer::render`] is called.
    pub fn from_schema(
        schema: &FormSchema,
        form_id: &str,
        target_id: &str,
        options: FormOptions,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            form_id: form_id.to_string(),
            target_id: target_id.to_string(),
            notices: NoticeBoard::new(options.notice_ttl),
            options,
            transport,
            state: FormState::from_schema(schema),
            phase: SubmitPhase::Idle,
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    pub fn form(&self) -> &FormState {
        &self.state
    }

    /// Control state, for applying user edits between renders.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn notices(&self) -> &[Notice] {
        self.notices.active()
    }

    pub fn next_notice_expiry(&self) -> Option<Instant> {
        self.notices.next_expiry()
    }

    pub fn view(&self) -> FormView {
        build_view(
            &self.state,
            ViewContext {
                form_id: &self.form_id,
                options: &self.options,
                notices: self.notices.active(),
                submitting: self.phase == SubmitPhase::Submitting,
            },
        )
    }

    /// Replace the target's content with the current view. Returns `false`
    /// when the target has disappeared from the page.
    pub fn render(&self, page: &mut dyn Page) -> bool {
        let Some(surface) = page.surface(&self.target_id) else {
            warn!(target_id = %self.target_id, "render target is gone");
            return false;
        };
        surface.replace_content(&self.view().to_html());
        true
    }

    /// Validate, serialize and post the form, then show the outcome.
    ///
    /// The exclusive borrow rules out overlapping submissions; the submit
    /// button is rendered disabled while the request is in flight.
    pub async fn submit(&mut self, page: &mut dyn Page) -> SubmitOutcome {
        self.phase = SubmitPhase::Validating;
        let values = match validate_form(&mut self.state) {
            ValidationOutcome::Valid(values) => values,
            ValidationOutcome::Invalid { errors } => {
                self.phase = SubmitPhase::Idle;
                self.render(page);
                return SubmitOutcome::Invalid { errors };
            }
        };
        let body = values.to_body(self.options.serialization);
        let url = match self.options.form_endpoint(&self.form_id) {
            Ok(url) => url,
            Err(err) => return self.conclude(page, Err(err)),
        };

        self.phase = SubmitPhase::Submitting;
        self.render(page);
        let transport = Arc::clone(&self.transport);
        let timeout = self.options.timeout;
        let flight = InFlight::start(&mut self.phase);
        let result = deliver(transport.as_ref(), &url, &body, timeout)
            .await
            .map_err(FormError::SubmissionFailed);
        flight.finish(SubmitPhase::Idle);

        self.conclude(page, result)
    }

    fn conclude(
        &mut self,
        page: &mut dyn Page,
        result: Result<serde_json::Value, FormError>,
    ) -> SubmitOutcome {
        let now = Instant::now();
        let outcome = match result {
            Ok(body) => {
                self.phase = SubmitPhase::Succeeded;
                self.notices.success(now);
                info!(form_id = %self.form_id, "form submitted");
                SubmitOutcome::Accepted(body)
            }
            Err(err) => {
                self.phase = SubmitPhase::Failed;
                self.notices.failure(now);
                warn!(form_id = %self.form_id, error = %err, "submission failed");
                let error = match err {
                    FormError::SubmissionFailed(cause) => cause.to_string(),
                    other => other.to_string(),
                };
                SubmitOutcome::Rejected { error }
            }
        };
        self.render(page);
        outcome
    }

    /// Drop expired notices, re-rendering when any were removed.
    pub fn tick(&mut self, page: &mut dyn Page) -> bool {
        self.tick_at(page, Instant::now())
    }

    pub fn tick_at(&mut self, page: &mut dyn Page, now: Instant) -> bool {
        if self.notices.prune(now) == 0 {
            return false;
        }
        self.render(page);
        true
    }

    /// Sleep until the earliest notice expires, then drop it and re-render.
    /// Returns `false` at once when no notice is showing.
    pub async fn expire_notices(&mut self, page: &mut dyn Page) -> bool {
        let Some(deadline) = self.notices.next_expiry() else {
            return false;
        };
        tokio::time::sleep_until(deadline.into()).await;
        self.tick_at(page, deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::page::MemoryPage;
    use serde_json::json;

    fn renderer() -> FormRenderer {
        let schema: FormSchema = serde_json::from_value(json!({
            "name": "Feedback",
            "fields": [
                {"name": "note", "fieldType": "textarea", "label": "Note", "required": true},
                {"name": "ref", "fieldType": "text", "label": "Ref", "defaultValue": "A-1", "readOnly": true}
            ]
        }))
        .expect("schema");
        let options = FormOptions::parse("http://localhost:9000").expect("options");
        FormRenderer::from_schema(&schema, "fb", "slot", options, Arc::new(ReqwestTransport::new()))
    }

    #[test]
    fn render_reports_missing_target() {
        let renderer = renderer();
        let mut page = MemoryPage::new().with_surface("slot");
        assert!(renderer.render(&mut page));
        assert!(!renderer.render(&mut MemoryPage::new()));
        assert_eq!(page.render_count("slot"), 1);
    }

    #[test]
    fn read_only_fields_keep_their_default() {
        let mut renderer = renderer();
        assert!(!renderer.form_mut().set_text("ref", "B-2"));
        assert_eq!(
            renderer.form().values().get("ref").and_then(|v| v.as_text()),
            Some("A-1")
        );
    }

    fn require_send<T: Send>(value: T) -> T {
        value
    }

    #[tokio::test]
    async fn submit_future_is_send() {
        let mut renderer = renderer();
        let mut page = MemoryPage::new().with_surface("slot");
        let outcome = require_send(renderer.submit(&mut page)).await;
        assert!(matches!(outcome, SubmitOutcome::Invalid { .. }));
    }

    #[tokio::test]
    async fn expire_notices_without_notices_returns_immediately() {
        let mut renderer = renderer();
        let mut page = MemoryPage::new().with_surface("slot");
        assert!(!renderer.expire_notices(&mut page).await);
        assert_eq!(page.render_count("slot"), 0);
    }

    #[tokio::test]
    async fn invalid_submit_renders_errors_and_stays_idle() {
        let mut renderer = renderer();
        let mut page = MemoryPage::new().with_surface("slot");

        let outcome = renderer.submit(&mut page).await;

        assert!(matches!(outcome, SubmitOutcome::Invalid { ref errors } if errors.len() == 1));
        assert_eq!(renderer.phase(), SubmitPhase::Idle);
        assert!(renderer.notices().is_empty());
        assert!(page.content("slot").expect("slot").contains("Note is required"));
    }
}
