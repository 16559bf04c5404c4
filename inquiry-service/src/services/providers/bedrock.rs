//! Bedrock Agent Runtime provider.
//!
//! Calls `RetrieveAndGenerate` against a single knowledge base with a single
//! model. One request per call; no retries beyond the SDK's own.

use super::{GenerationOutput, GeneratorError, RetrievalGenerator};
use crate::config::BedrockConfig;
use async_trait::async_trait;
use aws_sdk_bedrockagentruntime::{
    config::http::HttpResponse,
    error::{BuildError, DisplayErrorContext, ProvideErrorMetadata, SdkError},
    types::{
        KnowledgeBaseRetrieveAndGenerateConfiguration, RetrieveAndGenerateConfiguration,
        RetrieveAndGenerateInput, RetrieveAndGenerateType,
    },
    Client,
};

/// Knowledge-base backed generator over Bedrock.
pub struct BedrockGenerator {
    config: BedrockConfig,
    client: Client,
}

impl BedrockGenerator {
    pub fn new(client: Client, config: BedrockConfig) -> Self {
        Self { config, client }
    }

    fn build_configuration(&self) -> Result<RetrieveAndGenerateConfiguration, BuildError> {
        let knowledge_base = KnowledgeBaseRetrieveAndGenerateConfiguration::builder()
            .knowledge_base_id(&self.config.knowledge_base_id)
            .model_arn(&self.config.model_arn)
            .build()?;

        RetrieveAndGenerateConfiguration::builder()
            .r#type(RetrieveAndGenerateType::KnowledgeBase)
            .knowledge_base_configuration(knowledge_base)
            .build()
    }
}

#[async_trait]
impl RetrievalGenerator for BedrockGenerator {
    async fn generate(&self, text: &str) -> Result<GenerationOutput, GeneratorError> {
        let input = RetrieveAndGenerateInput::builder()
            .text(text)
            .build()
            .map_err(|e| GeneratorError::InvalidRequest(e.to_string()))?;

        let configuration = self
            .build_configuration()
            .map_err(|e| GeneratorError::NotConfigured(e.to_string()))?;

        tracing::debug!(
            knowledge_base_id = %self.config.knowledge_base_id,
            model_arn = %self.config.model_arn,
            input_len = text.len(),
            "Sending RetrieveAndGenerate request"
        );

        let response = self
            .client
            .retrieve_and_generate()
            .input(input)
            .retrieve_and_generate_configuration(configuration)
            .send()
            .await
            .map_err(map_sdk_error)?;

        let output = GenerationOutput {
            text: response.output().map(|o| o.text().to_string()),
            session_id: Some(response.session_id().to_string()).filter(|s| !s.is_empty()),
            citation_count: response.citations().len(),
        };

        tracing::debug!(
            has_text = output.text.is_some(),
            citations = output.citation_count,
            "Received RetrieveAndGenerate response"
        );

        Ok(output)
    }
}

fn map_sdk_error<E>(err: SdkError<E, HttpResponse>) -> GeneratorError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    let message = DisplayErrorContext(&err).to_string();
    match &err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            GeneratorError::NetworkError(message)
        }
        SdkError::ServiceError(service) => match service.err().code() {
            Some("ThrottlingException" | "ServiceQuotaExceededException") => {
                GeneratorError::RateLimited
            }
            Some("ValidationException") => GeneratorError::InvalidRequest(message),
            Some("AccessDeniedException") => GeneratorError::AccessDenied(message),
            _ => GeneratorError::ApiError(message),
        },
        _ => GeneratorError::ApiError(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_bedrockagentruntime::error::ErrorMetadata;
    use aws_sdk_bedrockagentruntime::operation::retrieve_and_generate::RetrieveAndGenerateError;
    use aws_smithy_runtime_api::http::StatusCode;
    use aws_smithy_types::body::SdkBody;

    fn service_error(code: &str) -> SdkError<RetrieveAndGenerateError, HttpResponse> {
        let err = RetrieveAndGenerateError::generic(
            ErrorMetadata::builder()
                .code(code)
                .message("simulated")
                .build(),
        );
        let raw = HttpResponse::new(StatusCode::try_from(400).unwrap(), SdkBody::empty());
        SdkError::service_error(err, raw)
    }

    #[test]
    fn test_throttling_maps_to_rate_limited() {
        for code in ["ThrottlingException", "ServiceQuotaExceededException"] {
            assert!(matches!(
                map_sdk_error(service_error(code)),
                GeneratorError::RateLimited
            ));
        }
    }

    #[test]
    fn test_validation_maps_to_invalid_request() {
        assert!(matches!(
            map_sdk_error(service_error("ValidationException")),
            GeneratorError::InvalidRequest(_)
        ));
    }

    #[test]
    fn test_access_denied_is_distinguished() {
        assert!(matches!(
            map_sdk_error(service_error("AccessDeniedException")),
            GeneratorError::AccessDenied(_)
        ));
    }

    #[test]
    fn test_unknown_codes_are_api_errors() {
        let err = map_sdk_error(service_error("InternalServerException"));
        match err {
            GeneratorError::ApiError(message) => assert!(message.contains("simulated")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
