// Unit tests for the inference gateway

use inference_gateway::core::routing::{route_table, Method, RouteKind};
use inference_gateway::{
    validate_request, AdTargetingRequest, GatewayError, InferenceRequest, ModerationRequest,
    RecommendationRequest,
};
use serde_json::json;

fn rejection<T: InferenceRequest>(req: &T) -> Option<String> {
    match validate_request(req) {
        Ok(()) => None,
        Err(GatewayError::Validation(msg)) => Some(msg),
        Err(other) => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_decoded_request_validates() {
    let req: RecommendationRequest =
        serde_json::from_value(json!({ "user_id": 1, "video_id": 10, "watch_time": 42.5 })).unwrap();

    assert_eq!(req.watch_time, 42.5);
    assert_eq!(rejection(&req), None);
}

#[test]
fn test_negative_ids_decode_then_fail_validation() {
    let req: ModerationRequest =
        serde_json::from_value(json!({ "video_id": -4, "video_content": "x" })).unwrap();

    assert_eq!(rejection(&req).as_deref(), Some("Invalid video_id"));
}

#[test]
fn test_wrong_type_does_not_decode() {
    let result: Result<AdTargetingRequest, _> = serde_json::from_value(json!({
        "user_id": 1,
        "age": "thirty",
        "location": "Rome",
        "interests": [],
    }));
    assert!(result.is_err());
}

#[test]
fn test_interests_order_survives_encoding() {
    let req: AdTargetingRequest = serde_json::from_value(json!({
        "user_id": 2,
        "age": 33,
        "location": "Oslo",
        "interests": ["ski", "art", "ski"],
    }))
    .unwrap();

    let encoded = serde_json::to_value(&req).unwrap();
    assert_eq!(encoded["interests"], json!(["ski", "art", "ski"]));
}

#[test]
fn test_every_forwarded_type_has_a_route() {
    let table = route_table();

    for path in [
        RecommendationRequest::PATH,
        ModerationRequest::PATH,
        AdTargetingRequest::PATH,
    ] {
        let entry = table.iter().find(|e| e.path == path).unwrap();
        assert_eq!(entry.method, Method::Post);
        assert_ne!(entry.kind, RouteKind::Health);
    }

    let health = table.iter().find(|e| e.kind == RouteKind::Health).unwrap();
    assert_eq!(health.method, Method::Get);
    assert_eq!(health.path, "/health");
}

#[test]
fn test_service_names() {
    assert_eq!(RecommendationRequest::SERVICE, "Recommendation service");
    assert_eq!(ModerationRequest::SERVICE, "Moderation service");
    assert_eq!(AdTargetingRequest::SERVICE, "Ad targeting service");
}
