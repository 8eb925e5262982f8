use gloo_net::http::Request;
use shared_types::{Failure, UpdatePost};
use std::sync::OnceLock;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:3000
/// - In production: use same origin (the board server renders this page)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:3000".to_string()
    } else {
        "".to_string()
    }
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

pub fn post_url(base: &str, number: i64) -> String {
    format!("{base}/api/v1/posts/{number}")
}

/// Errors raised before the server's answer could be understood
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to serialize request: {0}")]
    Encode(String),
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Unexpected response from server (HTTP {0})")]
    UnexpectedStatus(u16),
}

impl From<ClientError> for Failure {
    fn from(err: ClientError) -> Self {
        Failure::general(err.to_string())
    }
}

// ============================================================================
// Posts API Functions
// ============================================================================

/// `PUT /api/v1/posts/{number}` with the new title and description.
///
/// Every failure, including transport errors, comes back as a `Failure`
/// the form can render.
pub async fn update_post(update: &UpdatePost) -> Result<(), Failure> {
    let url = post_url(api_base(), update.number);

    let response = Request::put(&url)
        .json(&update.body())
        .map_err(|e| ClientError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ClientError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))?;

    classify_update_response(status, &body)
}

/// Map an update response to the success/failure result the view consumes.
///
/// 2xx is success regardless of body. 400 carries the validation payload.
/// Anything else collapses into a single general message.
pub fn classify_update_response(status: u16, body: &str) -> Result<(), Failure> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    if status == 400 {
        let failure: Failure =
            serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;
        if failure.errors.is_empty() {
            return Err(ClientError::UnexpectedStatus(status).into());
        }
        return Err(failure);
    }

    Err(ClientError::UnexpectedStatus(status).into())
}
