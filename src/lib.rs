//! Inference Gateway - HTTP front door for the ML inference service
//!
//! Validates recommendation, moderation and ad targeting requests, forwards
//! them unchanged to the inference service and relays the answer, mapping
//! downstream failures to HTTP status codes.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{route_table, validate_request, InferenceRequest};
pub use error::GatewayError;
pub use models::{AdTargetingRequest, ModerationRequest, RecommendationRequest};
pub use routes::AppState;
pub use services::{InferenceClient, InferenceError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let paths: Vec<_> = route_table().iter().map(|e| e.path).collect();
        assert!(paths.contains(&RecommendationRequest::PATH));
        assert!(paths.contains(&"/health"));
    }
}
