use validator::{Validate, ValidationErrors};

/// Runs validation and returns the first message found, checking fields in
/// the given order so the notice shown to the user is deterministic.
pub fn first_error<T: Validate>(val: &T, field_order: &[&str]) -> Option<String> {
    match val.validate() {
        Ok(()) => None,
        Err(errors) => Some(first_message(&errors, field_order)),
    }
}

pub fn first_message(errors: &ValidationErrors, field_order: &[&str]) -> String {
    let fields = errors.field_errors();
    for name in field_order {
        if let Some(list) = fields.get(*name) {
            if let Some(message) = list.iter().find_map(|e| e.message.as_ref()) {
                return message.to_string();
            }
        }
    }
    "The submitted form is invalid.".to_string()
}
