use actix_web::{web, HttpResponse};
use tracing::Instrument;
use uuid::Uuid;

use crate::core::routing::InferenceRequest;
use crate::core::validation::validate_request;
use crate::error::GatewayError;
use crate::routes::AppState;

/// Forward endpoint shared by recommendations, moderation and ad targeting
///
/// POST /recommendations/ | /moderation/ | /ad-targeting/
///
/// The request is validated, sent unchanged to the same path on the
/// inference service, and the downstream body is relayed on success.
pub async fn forward<T: InferenceRequest>(
    state: web::Data<AppState>,
    payload: web::Json<T>,
) -> Result<HttpResponse, GatewayError> {
    let request = payload.into_inner();
    let span = tracing::info_span!("inference", request_id = %Uuid::new_v4(), path = T::PATH);

    async move {
        if let Err(e) = validate_request(&request) {
            tracing::info!("Rejected {} request ({}): {}", T::SERVICE, request.subject(), e);
            return Err(e);
        }

        match state.inference.forward(&request).await {
            Ok(passthrough) => {
                let content_type = passthrough
                    .content_type
                    .as_deref()
                    .unwrap_or("application/json");
                Ok(HttpResponse::Ok()
                    .content_type(content_type)
                    .body(passthrough.body))
            }
            Err(e) => {
                let err = GatewayError::from(e);
                tracing::error!(
                    kind = err.kind(),
                    "{} request failed for {}: {}",
                    T::SERVICE,
                    request.subject(),
                    err
                );
                Err(err)
            }
        }
    }
    .instrument(span)
    .await
}
