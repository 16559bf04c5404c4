use serde::{Deserialize, Serialize};
use validator::Validate;

/// Stored customer inquiry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryRecord {
    pub id: String,

    /// Free-text inquiry content. Processing requires it.
    #[serde(rename = "reviewText", skip_serializing_if = "Option::is_none")]
    pub review_text: Option<String>,

    /// Written by the answer flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,

    /// Written by the classification flow.
    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl InquiryRecord {
    pub fn new(id: impl Into<String>, review_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            review_text: Some(review_text.into()),
            ..Default::default()
        }
    }
}

/// Invocation payload.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct InquiryRequest {
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub id: Option<String>,
}

impl InquiryRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }
}
