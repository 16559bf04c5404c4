//! The two flows an [`InquiryProcessor`](super::InquiryProcessor) can run.
//!
//! A flow decides what text is sent to the generator, how the generated
//! output becomes the stored value, which attribute receives it, and what the
//! caller gets back.

use super::prompt::classification_prompt;
use super::providers::{GenerationOutput, GeneratorError};
use crate::models::{Category, Classification};
use serde_json::json;
use service_core::response::ApiResponse;

/// Stored when the service returns no output text.
pub const NO_ANSWER_FALLBACK: &str = "No answer generated";

pub trait InquiryFlow: Send + Sync {
    /// Value derived from the generator output.
    type Value: Send;
    type Outcome: Send;

    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Record attribute the derived value is written to.
    fn field(&self) -> &'static str;

    /// Text sent to the generator for this inquiry.
    fn compose(&self, review_text: &str) -> String;

    /// Derive the value from the generator output.
    fn extract(&self, output: GenerationOutput) -> Result<Self::Value, GeneratorError>;

    /// String written to [`field`](Self::field).
    fn stored<'a>(&self, value: &'a Self::Value) -> &'a str;

    /// Result handed back once the value is stored.
    fn outcome(&self, inquiry_id: &str, value: Self::Value) -> Self::Outcome;

    /// Success response for the invoker.
    fn respond(&self, outcome: Self::Outcome) -> ApiResponse;
}

/// Answers the inquiry in free text. Writes `answer`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnswerFlow;

impl InquiryFlow for AnswerFlow {
    type Value = String;
    type Outcome = String;

    fn name(&self) -> &'static str {
        "create-answer"
    }

    fn field(&self) -> &'static str {
        "answer"
    }

    fn compose(&self, review_text: &str) -> String {
        review_text.to_string()
    }

    fn extract(&self, output: GenerationOutput) -> Result<String, GeneratorError> {
        Ok(output
            .text
            .unwrap_or_else(|| NO_ANSWER_FALLBACK.to_string()))
    }

    fn stored<'a>(&self, value: &'a String) -> &'a str {
        value
    }

    fn outcome(&self, _inquiry_id: &str, value: String) -> Self::Outcome {
        value
    }

    fn respond(&self, outcome: Self::Outcome) -> ApiResponse {
        ApiResponse::ok(outcome)
    }
}

/// Sorts the inquiry into a [`Category`]. Writes `Category`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassificationFlow;

impl InquiryFlow for ClassificationFlow {
    type Value = Category;
    type Outcome = Classification;

    fn name(&self) -> &'static str {
        "judge-category"
    }

    fn field(&self) -> &'static str {
        "Category"
    }

    fn compose(&self, review_text: &str) -> String {
        classification_prompt(review_text)
    }

    fn extract(&self, output: GenerationOutput) -> Result<Category, GeneratorError> {
        let text = output.text.ok_or_else(|| {
            GeneratorError::ApiError("response contained no output text".to_string())
        })?;

        Ok(Category::from_output(&text))
    }

    fn stored<'a>(&self, value: &'a Category) -> &'a str {
        value.label()
    }

    fn outcome(&self, inquiry_id: &str, category: Category) -> Self::Outcome {
        Classification {
            id: inquiry_id.to_string(),
            category,
        }
    }

    fn respond(&self, outcome: Self::Outcome) -> ApiResponse {
        ApiResponse::ok_json(&json!({
            "id": outcome.id,
            "category": outcome.category.label(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(text: Option<&str>) -> GenerationOutput {
        GenerationOutput {
            text: text.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_answer_flow_passes_text_through() {
        let flow = AnswerFlow;
        assert_eq!(flow.compose("使い方は？"), "使い方は？");
        assert_eq!(
            flow.extract(output(Some("  設定画面から変更できます。 "))).unwrap(),
            "  設定画面から変更できます。 "
        );
    }

    #[test]
    fn test_answer_flow_falls_back_without_output() {
        let flow = AnswerFlow;
        assert_eq!(flow.extract(output(None)).unwrap(), NO_ANSWER_FALLBACK);
    }

    #[test]
    fn test_classification_flow_maps_output_to_label() {
        let flow = ClassificationFlow;
        let question = flow.extract(output(Some(" 質問 "))).unwrap();
        assert_eq!(question, Category::Question);
        assert_eq!(flow.stored(&question), "質問");

        let other = flow.extract(output(Some("unknown"))).unwrap();
        assert_eq!(flow.stored(&other), "その他");
    }

    #[test]
    fn test_classification_flow_requires_output() {
        let flow = ClassificationFlow;
        assert!(matches!(
            flow.extract(output(None)),
            Err(GeneratorError::ApiError(_))
        ));
    }

    #[test]
    fn test_classification_response_body() {
        let flow = ClassificationFlow;
        let response = flow.respond(flow.outcome("abc123", Category::Question));

        assert_eq!(response.status_code, 200);
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body, json!({ "id": "abc123", "category": "質問" }));
    }
}
