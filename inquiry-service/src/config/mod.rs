use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Table used when `INQUIRY_TABLE` is not set outside production.
const DEFAULT_TABLE_NAME: &str = "InquiryTable";

#[derive(Debug, Clone, Deserialize)]
pub struct InquiryConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub dynamodb: DynamoConfig,
    pub bedrock: BedrockConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DynamoConfig {
    pub table_name: String,
    /// Endpoint override, e.g. `http://localhost:8000` for DynamoDB Local.
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BedrockConfig {
    /// Knowledge base consulted by RetrieveAndGenerate.
    pub knowledge_base_id: String,
    /// Foundation model ARN used to generate the response.
    pub model_arn: String,
}

impl InquiryConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(InquiryConfig {
            common: common_config,
            dynamodb: DynamoConfig {
                table_name: get_env("INQUIRY_TABLE", Some(DEFAULT_TABLE_NAME), is_prod)?,
                endpoint_url: env::var("DYNAMODB_ENDPOINT_URL")
                    .ok()
                    .filter(|url| !url.is_empty()),
            },
            bedrock: BedrockConfig {
                knowledge_base_id: get_env("KB_ID", None, is_prod)?,
                model_arn: get_env("MODEL_ARN", None, is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) if !val.is_empty() => Ok(val),
        _ => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
