mod envelope;

pub use envelope::{EnvelopeShape, schema_from_envelope, unwrap_envelope};
