use crate::core::routing::{InferenceRequest, HEALTH_PATH};
use actix_web::web::Bytes;
use reqwest::{header::CONTENT_TYPE, redirect::Policy, Client, Response};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the inference service
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Client Error {status}: {body}")]
    ClientError { status: u16, body: String },

    #[error("Server Error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("{service} unreachable")]
    Unreachable {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{0}")]
    Unexpected(String),
}

/// A successful inference service response, relayed as-is
#[derive(Debug, Clone)]
pub struct Passthrough {
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// Inference service HTTP client
///
/// Holds a pooled connection and the base URL. Cheap to share behind an
/// `Arc`; nothing in it changes after construction.
pub struct InferenceClient {
    base_url: String,
    client: Client,
}

impl InferenceClient {
    /// Create a new client. Timeouts left as `None` keep the transport defaults.
    pub fn new(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
        connect_timeout: Option<Duration>,
    ) -> Result<Self, InferenceError> {
        // a 3xx is an answer, not an instruction to send a second request
        let mut builder = Client::builder().redirect(Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }

        let client = builder
            .build()
            .map_err(|e| InferenceError::Unexpected(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// POST a validated request to its inference endpoint.
    ///
    /// One attempt, no retries. A 2xx body comes back byte for byte.
    pub async fn forward<T: InferenceRequest>(&self, request: &T) -> Result<Passthrough, InferenceError> {
        let url = self.url(T::PATH);
        tracing::debug!("Forwarding {} to {}", request.subject(), url);

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| classify(T::SERVICE, e))?;

        let status = response.status();
        if status.is_success() {
            let passthrough = read_passthrough(T::SERVICE, response).await?;
            tracing::info!("{} request successful for {}", T::SERVICE, request.subject());
            return Ok(passthrough);
        }

        Err(status_error(T::SERVICE, response).await)
    }

    /// GET the inference service health endpoint.
    ///
    /// Any non-2xx answer counts as a failure.
    pub async fn check_health(&self) -> Result<Passthrough, InferenceError> {
        const SERVICE: &str = "ML service";
        let url = self.url(HEALTH_PATH);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify(SERVICE, e))?;

        if response.status().is_success() {
            let passthrough = read_passthrough(SERVICE, response).await?;
            tracing::info!("Inference service health check successful");
            return Ok(passthrough);
        }

        Err(status_error(SERVICE, response).await)
    }
}

async fn read_passthrough(service: &'static str, response: Response) -> Result<Passthrough, InferenceError> {
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.bytes().await.map_err(|e| classify(service, e))?;

    Ok(Passthrough { content_type, body })
}

async fn status_error(service: &'static str, response: Response) -> InferenceError {
    let status = response.status();
    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => return classify(service, e),
    };

    if status.is_client_error() {
        InferenceError::ClientError { status: status.as_u16(), body }
    } else if status.is_server_error() {
        InferenceError::ServerError { status: status.as_u16(), body }
    } else {
        InferenceError::Unexpected(format!("{} returned unexpected status {}", service, status))
    }
}

/// Connection and timeout failures mean the service is unreachable;
/// everything else is unexpected.
fn classify(service: &'static str, err: reqwest::Error) -> InferenceError {
    if err.is_connect() || err.is_timeout() {
        InferenceError::Unreachable { service, source: err }
    } else {
        InferenceError::Unexpected(err.to_string())
    }
}
