//! Lambda proxy response envelope.

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// `{ "statusCode": .., "body": .. }` as returned to the invoker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            body: body.into(),
        }
    }

    /// 200 with a plain text body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// 200 with a JSON-encoded body.
    pub fn ok_json(value: &serde_json::Value) -> Self {
        Self::new(StatusCode::OK, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
