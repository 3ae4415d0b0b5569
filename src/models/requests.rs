use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request for video recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(range(min = 1, message = "Invalid user_id"))]
    pub user_id: i64,
    #[validate(range(min = 1, message = "Invalid video_id"))]
    pub video_id: i64,
    pub watch_time: f64,
}

/// Request to moderate a video's content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ModerationRequest {
    #[validate(range(min = 1, message = "Invalid video_id"))]
    pub video_id: i64,
    pub video_content: String,
}

/// Request for ad targeting suggestions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AdTargetingRequest {
    #[validate(range(min = 1, message = "Invalid user_id"))]
    pub user_id: i64,
    #[validate(range(min = 1, message = "Invalid age"))]
    pub age: i64,
    pub location: String,
    pub interests: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_field_is_rejected() {
        let result: Result<ModerationRequest, _> =
            serde_json::from_value(json!({ "video_id": 3 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_outbound_encoding_keeps_field_names() {
        let req = AdTargetingRequest {
            user_id: 7,
            age: 30,
            location: "Lisbon".to_string(),
            interests: vec!["music".to_string(), "travel".to_string()],
        };

        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "user_id": 7,
                "age": 30,
                "location": "Lisbon",
                "interests": ["music", "travel"],
            })
        );
    }
}
