mod schema;
mod values;

pub use schema::{FieldOption, FieldSpec, FieldType, FormSchema};
pub use values::{FormValue, FormValues, SerializationShape};
