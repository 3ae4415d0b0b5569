// Route exports
pub mod health;
pub mod inference;

use actix_web::web;
use std::sync::Arc;

use crate::core::routing::{route_table, Method, RouteKind};
use crate::models::{AdTargetingRequest, ModerationRequest, RecommendationRequest};
use crate::services::InferenceClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub inference: Arc<InferenceClient>,
}

impl AppState {
    pub fn new(inference: InferenceClient) -> Self {
        Self {
            inference: Arc::new(inference),
        }
    }
}

/// Mount every route at the root.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    mount(cfg, "");
}

/// Mount every route under `prefix`, e.g. `/api/ml`.
pub fn configure_with_prefix(prefix: &str) -> impl FnOnce(&mut web::ServiceConfig) + '_ {
    move |cfg| mount(cfg, prefix)
}

fn mount(cfg: &mut web::ServiceConfig, prefix: &str) {
    let mut scope = web::scope(prefix.trim_end_matches('/'));

    for entry in route_table() {
        let route = match entry.method {
            Method::Get => web::get(),
            Method::Post => web::post(),
        };
        let route = match entry.kind {
            RouteKind::Recommendations => route.to(inference::forward::<RecommendationRequest>),
            RouteKind::Moderation => route.to(inference::forward::<ModerationRequest>),
            RouteKind::AdTargeting => route.to(inference::forward::<AdTargetingRequest>),
            RouteKind::Health => route.to(health::health_check),
        };
        scope = scope.route(entry.path, route);
    }

    cfg.service(scope);
}
