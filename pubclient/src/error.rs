use pubcore::error::BackendError;
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub(crate) fn from_reqwest(e: reqwest::Error) -> BackendError {
    if e.is_decode() {
        BackendError::UnexpectedResponse(e.to_string())
    } else if let Some(status) = e.status() {
        BackendError::Status {
            status,
            message: String::new(),
        }
    } else {
        BackendError::Network(e.to_string())
    }
}

/// Build the error for a non-success response, preferring the `message`
/// field of the backend's error body over the raw text.
pub(crate) fn status_error(status: StatusCode, body: &str) -> BackendError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| body.trim().to_string());
    BackendError::Status { status, message }
}
