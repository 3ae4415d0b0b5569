use actix_web::{web, HttpResponse, Responder};

use crate::models::{HealthDown, HealthOk};
use crate::routes::AppState;

/// Health check endpoint
///
/// GET /health
///
/// Probes the inference service's own `/health` and reports the result.
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    match state.inference.check_health().await {
        Ok(passthrough) => HttpResponse::Ok().json(HealthOk {
            status: "FastAPI service is healthy".to_string(),
            fastapi_response: String::from_utf8_lossy(&passthrough.body).into_owned(),
        }),
        Err(e) => {
            tracing::error!("Inference service health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(HealthDown {
                status: "FastAPI service unavailable".to_string(),
                error: e.to_string(),
            })
        }
    }
}
