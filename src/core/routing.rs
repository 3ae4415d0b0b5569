//! Binds each inbound payload type to the inference service path it is
//! forwarded to.
//!
//! The gateway serves one route per [`InferenceRequest`] implementation plus
//! the health probe; [`route_table`] is the complete list and is what the
//! HTTP layer registers at startup.

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::models::{AdTargetingRequest, ModerationRequest, RecommendationRequest};

/// A payload the gateway validates and forwards unchanged.
pub trait InferenceRequest: Validate + Serialize + DeserializeOwned + Send + 'static {
    /// Path on both the gateway and the inference service.
    const PATH: &'static str;
    /// Name used in "<service> unreachable" messages.
    const SERVICE: &'static str;
    /// Validated fields in the order violations are reported.
    const CHECKED_FIELDS: &'static [&'static str];

    /// Short description for log lines, e.g. `user_id=1`.
    fn subject(&self) -> String;
}

impl InferenceRequest for RecommendationRequest {
    const PATH: &'static str = "/recommendations/";
    const SERVICE: &'static str = "Recommendation service";
    const CHECKED_FIELDS: &'static [&'static str] = &["user_id", "video_id"];

    fn subject(&self) -> String {
        format!("user_id={}", self.user_id)
    }
}

impl InferenceRequest for ModerationRequest {
    const PATH: &'static str = "/moderation/";
    const SERVICE: &'static str = "Moderation service";
    const CHECKED_FIELDS: &'static [&'static str] = &["video_id"];

    fn subject(&self) -> String {
        format!("video_id={}", self.video_id)
    }
}

impl InferenceRequest for AdTargetingRequest {
    const PATH: &'static str = "/ad-targeting/";
    const SERVICE: &'static str = "Ad targeting service";
    const CHECKED_FIELDS: &'static [&'static str] = &["user_id", "age"];

    fn subject(&self) -> String {
        format!("user_id={}", self.user_id)
    }
}

pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Handler selected for a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    Recommendations,
    Moderation,
    AdTargeting,
    Health,
}

/// One `(method, path) -> downstream path` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub method: Method,
    pub path: &'static str,
    pub downstream_path: &'static str,
    pub service: &'static str,
    pub kind: RouteKind,
}

fn forwarded<T: InferenceRequest>(kind: RouteKind) -> RouteEntry {
    RouteEntry {
        method: Method::Post,
        path: T::PATH,
        downstream_path: T::PATH,
        service: T::SERVICE,
        kind,
    }
}

/// Every route the gateway serves.
pub fn route_table() -> Vec<RouteEntry> {
    vec![
        forwarded::<RecommendationRequest>(RouteKind::Recommendations),
        forwarded::<ModerationRequest>(RouteKind::Moderation),
        forwarded::<AdTargetingRequest>(RouteKind::AdTargeting),
        RouteEntry {
            method: Method::Get,
            path: HEALTH_PATH,
            downstream_path: HEALTH_PATH,
            service: "ML service",
            kind: RouteKind::Health,
        },
    ]
}
