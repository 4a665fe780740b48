use crate::{
    domain::FormValues,
    form::{FieldError, FormState},
};

#[derive(Debug)]
pub enum ValidationOutcome {
    Valid(FormValues),
    Invalid { errors: Vec<FieldError> },
}

/// Check every field, annotate its error slot, and read the values when
/// nothing failed.
pub fn validate_form(form_state: &mut FormState) -> ValidationOutcome {
    form_state.clear_errors();
    let errors = form_state.validate();
    if errors.is_empty() {
        ValidationOutcome::Valid(form_state.values())
    } else {
        ValidationOutcome::Invalid { errors }
    }
}
