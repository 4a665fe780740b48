mod error;
mod field;
mod state;

pub use error::FieldError;
pub use field::{ControlValue, FieldState};
pub use state::FormState;
