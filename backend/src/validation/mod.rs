//! Validation rules shared by request payloads and the profile form.

pub mod rules;

pub use validator::Validate;

/// Flattens validator output into sorted `field: code` messages.
pub fn messages(errors: &validator::ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let code = e.code.as_ref();
                format!("{}: {}", field, code)
            })
        })
        .collect();
    messages.sort();
    messages
}
