mod format;
mod input;

pub use format::DocumentFormat;
pub use input::{load_options_document, load_schema_document, parse_document_str};
