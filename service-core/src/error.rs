use crate::response::ApiResponse;
use http::StatusCode;
use thiserror::Error;

/// Errors surfaced by a function to its caller.
///
/// Every variant carries the text that ends up in the response body, so the
/// message must already contain the underlying cause where one exists.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(anyhow::Error),

    #[error("{0}")]
    NotFound(anyhow::Error),

    #[error("{0}")]
    DatabaseError(anyhow::Error),

    #[error("{0}")]
    UpstreamError(anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_)
            | AppError::UpstreamError(_)
            | AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn into_response(self) -> ApiResponse {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        ApiResponse::new(status, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_map_to_4xx() {
        let bad = AppError::BadRequest(anyhow::anyhow!("Missing inquiry id"));
        let missing = AppError::NotFound(anyhow::anyhow!("gone"));

        assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_errors_map_to_500() {
        let db = AppError::DatabaseError(anyhow::anyhow!("boom"));
        let upstream = AppError::UpstreamError(anyhow::anyhow!("boom"));

        assert_eq!(db.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(upstream.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_response_body_is_the_error_message() {
        let response = AppError::DatabaseError(anyhow::anyhow!(
            "Error reading DynamoDB: connection reset"
        ))
        .into_response();

        assert_eq!(response.status_code, 500);
        assert_eq!(response.body, "Error reading DynamoDB: connection reset");
    }
}
