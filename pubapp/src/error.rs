use http::status::StatusCode;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    #[error("404 Not Found")]
    NotFound,
    #[error("API client unavailable: {0}")]
    ClientUnavailable(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::ClientUnavailable("bad url".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR,
        );
        assert_eq!(AppError::NotFound.to_string(), "404 Not Found");
    }
}
