// Model exports
pub mod requests;
pub mod responses;

pub use requests::{AdTargetingRequest, ModerationRequest, RecommendationRequest};
pub use responses::{DownstreamErrorBody, ErrorBody, HealthDown, HealthOk};
