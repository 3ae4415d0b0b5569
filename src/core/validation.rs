use crate::core::routing::InferenceRequest;
use crate::error::GatewayError;

/// Check an inbound request before anything is sent downstream.
///
/// When several constraints fail, the first one in
/// [`InferenceRequest::CHECKED_FIELDS`] order is reported.
pub fn validate_request<T: InferenceRequest>(request: &T) -> Result<(), GatewayError> {
    let errors = match request.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    let field_errors = errors.field_errors();
    for field in T::CHECKED_FIELDS {
        if let Some(first) = field_errors.get(*field).and_then(|errs| errs.first()) {
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid {}", field));
            return Err(GatewayError::Validation(message));
        }
    }

    Err(GatewayError::Validation(errors.to_string()))
}
