use validator::{Validate, ValidationErrors};
use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(map_validation_error)
}

// Sorted by field so the message is stable across runs.
pub fn map_validation_error(err: ValidationErrors) -> AppError {
    let mut fields: Vec<_> = err
        .field_errors()
        .into_iter()
        .map(|(field, errs)| (json_field_name(field), errs))
        .collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let details = fields
        .iter()
        .map(|(field, errs)| {
            let messages = errs
                .iter()
                .map(|e| e.message.as_deref().unwrap_or(&*e.code).to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: [{}]", field, messages)
        })
        .collect::<Vec<_>>()
        .join("; ");

    AppError::BadRequest(format!("Validation failed: {}", details))
}

// Payloads are camelCase on the wire; struct-level checks land under "__all__".
fn json_field_name(field: &str) -> String {
    if field == "__all__" {
        return "employee".to_string();
    }

    let mut name = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            name.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            name.push(c);
        }
    }
    name
}
