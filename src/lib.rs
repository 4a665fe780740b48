#![deny(rust_2018_idioms)]

//! Render data-entry forms from a schema served over HTTP, validate the
//! input, and post submissions back to the same service.

mod app;
mod client;
mod domain;
mod error;
mod form;
mod io;
mod presentation;
mod schema;

pub use app::{
    DEFAULT_CLASS_PREFIX, DEFAULT_NOTICE_TTL, DEFAULT_SUBMIT_LABEL, DEFAULT_TIMEOUT,
    FAILURE_NOTICE, FormOptions, FormRenderer, MemoryPage, MemorySurface, Notice, NoticeBoard,
    NoticeKind, Page, SUCCESS_NOTICE, StyleDelivery, SubmitOutcome, SubmitPhase, Surface,
    ValidationOutcome, validate_form,
};
pub use client::{HttpReply, ReqwestTransport, Transport, fetch_schema};
pub use domain::{FieldOption, FieldSpec, FieldType, FormSchema, FormValue, FormValues, SerializationShape};
pub use error::{FormError, RequestError};
pub use form::{ControlValue, FieldError, FieldState, FormState};
pub use io::{DocumentFormat, load_options_document, load_schema_document, parse_document_str};
pub use presentation::{
    ControlGroup, Element, FormView, LOAD_FAILURE_HINT, LOAD_FAILURE_TITLE, Node, ViewContext,
    build_view, escape_html, form_dom_id, load_failure_html, stylesheet, unescape_html,
};
pub use schema::{EnvelopeShape, schema_from_envelope, unwrap_envelope};

pub mod prelude {
    pub use super::{FormOptions, FormRenderer, MemoryPage, Page, Surface, SubmitOutcome, Transport};
}
