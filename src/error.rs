use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use thiserror::Error;

use crate::models::{DownstreamErrorBody, ErrorBody};
use crate::services::InferenceError;

/// Every way an inbound call can fail.
///
/// Each variant maps to one status code and JSON envelope; nothing is
/// propagated past the handler.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Downstream(#[from] InferenceError),
}

impl GatewayError {
    /// Short label used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Validation(_) => "validation",
            GatewayError::Downstream(InferenceError::ClientError { .. }) => "downstream_client_error",
            GatewayError::Downstream(InferenceError::ServerError { .. }) => "downstream_server_error",
            GatewayError::Downstream(InferenceError::Unreachable { .. }) => "downstream_unreachable",
            GatewayError::Downstream(InferenceError::Unexpected(_)) => "unexpected",
        }
    }
}

impl error::ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::Downstream(InferenceError::ClientError { status, .. })
            | GatewayError::Downstream(InferenceError::ServerError { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            GatewayError::Downstream(InferenceError::Unreachable { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::Downstream(InferenceError::Unexpected(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        match self {
            GatewayError::Validation(message) => builder.json(ErrorBody {
                error: message.clone(),
            }),
            GatewayError::Downstream(err) => {
                let (error, message) = match err {
                    InferenceError::ClientError { body, .. } => ("Client Error", body.clone()),
                    InferenceError::ServerError { body, .. } => ("Server Error", body.clone()),
                    InferenceError::Unreachable { .. } => ("Service Unavailable", err.to_string()),
                    InferenceError::Unexpected(description) => ("Internal Server Error", description.clone()),
                };
                builder.json(DownstreamErrorBody {
                    error: error.to_string(),
                    message,
                })
            }
        }
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    GatewayError::Validation(format!("Invalid JSON: {}", err)).into()
}

/// JSON extractor settings shared by the binary and tests
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, ResponseError};
    use serde_json::{json, Value};

    async fn body_json(err: &GatewayError) -> Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_validation_maps_to_400() {
        let err = GatewayError::Validation("Invalid video_id".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&err).await, json!({ "error": "Invalid video_id" }));
    }

    #[actix_web::test]
    async fn test_downstream_status_is_passed_through() {
        let err = GatewayError::from(InferenceError::ClientError {
            status: 404,
            body: "no such user".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(&err).await,
            json!({ "error": "Client Error", "message": "no such user" })
        );

        let err = GatewayError::from(InferenceError::ServerError {
            status: 502,
            body: "{\"detail\":\"model crashed\"}".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            body_json(&err).await,
            json!({ "error": "Server Error", "message": "{\"detail\":\"model crashed\"}" })
        );
    }

    #[actix_web::test]
    async fn test_unexpected_maps_to_500() {
        let err = GatewayError::from(InferenceError::Unexpected("decode failed".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), "unexpected");
        assert_eq!(
            body_json(&err).await,
            json!({ "error": "Internal Server Error", "message": "decode failed" })
        );
    }
}
