//! Configuration loading from the environment.
//!
//! Kept to a single test: the process environment is shared by every test in
//! this binary.

use inquiry_service::config::InquiryConfig;

#[test]
fn load_reads_environment_and_applies_defaults() {
    std::env::set_var("ENVIRONMENT", "test");
    std::env::remove_var("INQUIRY_TABLE");
    std::env::remove_var("DYNAMODB_ENDPOINT_URL");
    std::env::remove_var("KB_ID");
    std::env::set_var("MODEL_ARN", "arn:aws:bedrock:ap-northeast-1::foundation-model/test");

    let err = InquiryConfig::load().expect_err("KB_ID has no default");
    assert!(err.to_string().contains("KB_ID"));

    std::env::set_var("KB_ID", "KB12345");
    let config = InquiryConfig::load().expect("Failed to load config");
    assert_eq!(config.dynamodb.table_name, "InquiryTable");
    assert!(config.dynamodb.endpoint_url.is_none());
    assert_eq!(config.bedrock.knowledge_base_id, "KB12345");

    std::env::set_var("INQUIRY_TABLE", "Inquiries-dev");
    std::env::set_var("DYNAMODB_ENDPOINT_URL", "http://localhost:8000");
    let config = InquiryConfig::load().expect("Failed to load config");
    assert_eq!(config.dynamodb.table_name, "Inquiries-dev");
    assert_eq!(
        config.dynamodb.endpoint_url.as_deref(),
        Some("http://localhost:8000")
    );

    std::env::set_var("ENVIRONMENT", "prod");
    std::env::remove_var("INQUIRY_TABLE");
    let err = InquiryConfig::load().expect_err("defaults are not used in prod");
    assert!(err.to_string().contains("INQUIRY_TABLE"));
}
