//! Conversion of `validator` output into domain field errors

use taskhub_domain::error::{Error, FieldErrors, Result};
use validator::{Validate, ValidationError, ValidationErrors};

/// Validate a request, mapping failures to `Error::Validation`
pub fn validate_request<T: Validate>(request: &T) -> Result<()> {
    request
        .validate()
        .map_err(|errors| Error::validation(field_errors(&errors)))
}

/// Flatten `ValidationErrors` into field → messages
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            (
                field.to_string(),
                errs.iter().map(message_of).collect::<Vec<_>>(),
            )
        })
        .collect()
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| error.code.to_string())
}
