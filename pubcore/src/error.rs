pub use http::status::StatusCode;
use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("{status} {message}")]
    Status {
        status: StatusCode,
        message: String,
    },
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    /// The body was valid JSON but not in any shape we know how to read.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl BackendError {
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[non_exhaustive]
#[derive(Debug, PartialEq, Error)]
pub enum ValueError {
    #[error("unknown sort direction: {0}")]
    UnknownSortDirection(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        let err = BackendError::Status {
            status: StatusCode::NOT_FOUND,
            message: "Author not found".to_string(),
        };
        assert_eq!(err.to_string(), "404 Not Found Author not found");
        assert_eq!(err.status_code(), Some(StatusCode::NOT_FOUND));
        assert_eq!(BackendError::Network("refused".into()).status_code(), None);
    }
}
