use serde::{Deserialize, Serialize};

/// Body returned when a request is rejected before forwarding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body returned when the inference service call fails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownstreamErrorBody {
    pub error: String,
    pub message: String,
}

/// Health response when the inference service answered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthOk {
    pub status: String,
    pub fastapi_response: String,
}

/// Health response when the inference service could not be reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthDown {
    pub status: String,
    pub error: String,
}
