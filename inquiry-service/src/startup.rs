//! Cold-start wiring and the Lambda runtime loop.
//!
//! AWS clients are built once per execution environment and shared by
//! reference across invocations.

use crate::config::InquiryConfig;
use crate::handlers::function_handler;
use crate::services::providers::bedrock::BedrockGenerator;
use crate::services::store::DynamoInquiryStore;
use crate::services::{InquiryFlow, InquiryProcessor, InquiryStore, RetrievalGenerator};
use aws_config::BehaviorVersion;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use service_core::error::AppError;
use service_core::observability::init_tracing;
use std::sync::Arc;

/// Application container holding the configured service handles.
pub struct Application {
    store: Arc<dyn InquiryStore>,
    generator: Arc<dyn RetrievalGenerator>,
}

impl Application {
    /// Build the application with DynamoDB and Bedrock clients.
    pub async fn build(config: InquiryConfig) -> Result<Self, AppError> {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        if sdk_config.region().is_none() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "AWS region is not configured"
            )));
        }

        let mut dynamo_config = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
        if let Some(endpoint_url) = &config.dynamodb.endpoint_url {
            tracing::info!(endpoint = %endpoint_url, "Using DynamoDB endpoint override");
            dynamo_config = dynamo_config.endpoint_url(endpoint_url);
        }
        let dynamo_client = aws_sdk_dynamodb::Client::from_conf(dynamo_config.build());

        let store: Arc<dyn InquiryStore> = Arc::new(DynamoInquiryStore::new(
            dynamo_client,
            &config.dynamodb.table_name,
        ));
        tracing::info!(
            table = %config.dynamodb.table_name,
            "Initialized DynamoDB inquiry store"
        );

        let bedrock_client = aws_sdk_bedrockagentruntime::Client::new(&sdk_config);
        let generator: Arc<dyn RetrievalGenerator> = Arc::new(BedrockGenerator::new(
            bedrock_client,
            config.bedrock.clone(),
        ));
        tracing::info!(
            knowledge_base_id = %config.bedrock.knowledge_base_id,
            model_arn = %config.bedrock.model_arn,
            "Initialized Bedrock generator"
        );

        Ok(Self::with_services(store, generator))
    }

    /// Build the application around existing handles (tests, local runs).
    pub fn with_services(
        store: Arc<dyn InquiryStore>,
        generator: Arc<dyn RetrievalGenerator>,
    ) -> Self {
        Self { store, generator }
    }

    pub fn processor<F: InquiryFlow>(&self, flow: F) -> InquiryProcessor<F> {
        InquiryProcessor::new(self.store.clone(), self.generator.clone(), flow)
    }

    /// Serve invocations of `flow` until the runtime shuts the process down.
    pub async fn run<F: InquiryFlow>(self, flow: F) -> Result<(), Error> {
        tracing::info!(flow = flow.name(), "Starting Lambda runtime");

        let processor = self.processor(flow);
        let processor = &processor;

        lambda_runtime::run(service_fn(
            move |event: LambdaEvent<serde_json::Value>| async move {
                function_handler(processor, event).await
            },
        ))
        .await
    }
}

/// Entry point shared by the function binaries.
pub async fn run_function<F: InquiryFlow>(flow: F) -> Result<(), Error> {
    let config = InquiryConfig::load();

    let common = config
        .as_ref()
        .map(|c| c.common.clone())
        .unwrap_or_default();
    init_tracing(flow.name(), &common.log_level, common.json_logs);

    let config = config.map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        e
    })?;

    app.run(flow).await
}
