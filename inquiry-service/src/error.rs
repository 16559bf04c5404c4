//! Failure taxonomy of an inquiry flow.

use crate::services::providers::GeneratorError;
use crate::services::store::StoreError;
use service_core::error::AppError;
use thiserror::Error;

/// Terminal failure of a single invocation. `Display` is the response body.
#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("Missing inquiry id")]
    ClientError,

    #[error("Inquiry not found or missing reviewText")]
    NotFound,

    #[error("Error reading DynamoDB: {0}")]
    UpstreamRead(#[source] StoreError),

    #[error("Error from Bedrock: {0}")]
    Generation(#[source] GeneratorError),

    #[error("Error updating DynamoDB: {0}")]
    UpstreamWrite(#[source] StoreError),
}

/// Failure category, for callers that branch without inspecting causes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ClientError,
    NotFound,
    UpstreamRead,
    Generation,
    UpstreamWrite,
}

impl InquiryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InquiryError::ClientError => ErrorKind::ClientError,
            InquiryError::NotFound => ErrorKind::NotFound,
            InquiryError::UpstreamRead(_) => ErrorKind::UpstreamRead,
            InquiryError::Generation(_) => ErrorKind::Generation,
            InquiryError::UpstreamWrite(_) => ErrorKind::UpstreamWrite,
        }
    }
}

impl From<InquiryError> for AppError {
    fn from(err: InquiryError) -> Self {
        let message = anyhow::anyhow!(err.to_string());
        match err.kind() {
            ErrorKind::ClientError => AppError::BadRequest(message),
            ErrorKind::NotFound => AppError::NotFound(message),
            ErrorKind::UpstreamRead | ErrorKind::UpstreamWrite => AppError::DatabaseError(message),
            ErrorKind::Generation => AppError::UpstreamError(message),
        }
    }
}
