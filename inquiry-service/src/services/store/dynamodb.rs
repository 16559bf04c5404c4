//! DynamoDB-backed inquiry store.

use super::{InquiryStore, StoreError};
use crate::models::InquiryRecord;
use async_trait::async_trait;
use aws_sdk_dynamodb::{
    config::http::HttpResponse,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    types::AttributeValue,
    Client,
};
use std::collections::HashMap;

/// Partition key attribute of the inquiry table.
const KEY_ATTRIBUTE: &str = "id";

#[derive(Clone)]
pub struct DynamoInquiryStore {
    client: Client,
    table_name: String,
}

impl DynamoInquiryStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    fn key(id: &str) -> AttributeValue {
        AttributeValue::S(id.to_string())
    }
}

#[async_trait]
impl InquiryStore for DynamoInquiryStore {
    async fn get(&self, id: &str) -> Result<Option<InquiryRecord>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, Self::key(id))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    table = %self.table_name,
                    "GetItem failed: {}",
                    DisplayErrorContext(&e)
                );
                map_sdk_error(e)
            })?;

        Ok(output.item().map(|item| record_from_item(id, item)))
    }

    async fn update_field(&self, id: &str, field: &str, value: &str) -> Result<(), StoreError> {
        // Attribute names go through a placeholder; `Category` and friends are
        // not guaranteed to stay clear of DynamoDB reserved words.
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, Self::key(id))
            .update_expression("SET #field = :value")
            .expression_attribute_names("#field", field)
            .expression_attribute_values(":value", AttributeValue::S(value.to_string()))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    table = %self.table_name,
                    field = %field,
                    "UpdateItem failed: {}",
                    DisplayErrorContext(&e)
                );
                map_sdk_error(e)
            })?;

        Ok(())
    }
}

/// Build a record from a raw item. Non-string attributes are treated as absent.
pub(crate) fn record_from_item(id: &str, item: &HashMap<String, AttributeValue>) -> InquiryRecord {
    let string_attr = |name: &str| item.get(name).and_then(|value| value.as_s().ok()).cloned();

    InquiryRecord {
        id: string_attr(KEY_ATTRIBUTE).unwrap_or_else(|| id.to_string()),
        review_text: string_attr("reviewText"),
        answer: string_attr("answer"),
        category: string_attr("Category"),
    }
}

fn map_sdk_error<E>(err: SdkError<E, HttpResponse>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    let message = DisplayErrorContext(&err).to_string();
    match &err {
        SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
            StoreError::Unavailable(message)
        }
        SdkError::ServiceError(service) => match service.err().code() {
            Some(
                "ProvisionedThroughputExceededException"
                | "RequestLimitExceeded"
                | "ThrottlingException",
            ) => StoreError::Throttled(message),
            Some("ResourceNotFoundException") => StoreError::ResourceNotFound(message),
            _ => StoreError::RequestFailed(message),
        },
        _ => StoreError::RequestFailed(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::error::ErrorMetadata;
    use aws_sdk_dynamodb::operation::get_item::GetItemError;
    use aws_smithy_runtime_api::http::StatusCode;
    use aws_smithy_types::body::SdkBody;

    fn service_error(code: &str) -> SdkError<GetItemError, HttpResponse> {
        let err = GetItemError::generic(
            ErrorMetadata::builder()
                .code(code)
                .message("simulated")
                .build(),
        );
        let raw = HttpResponse::new(StatusCode::try_from(400).unwrap(), SdkBody::empty());
        SdkError::service_error(err, raw)
    }

    #[test]
    fn test_throughput_errors_map_to_throttled() {
        for code in [
            "ProvisionedThroughputExceededException",
            "RequestLimitExceeded",
            "ThrottlingException",
        ] {
            assert!(matches!(
                map_sdk_error(service_error(code)),
                StoreError::Throttled(_)
            ));
        }
    }

    #[test]
    fn test_missing_table_maps_to_resource_not_found() {
        assert!(matches!(
            map_sdk_error(service_error("ResourceNotFoundException")),
            StoreError::ResourceNotFound(_)
        ));
    }

    #[test]
    fn test_other_service_errors_keep_the_message() {
        let err = map_sdk_error(service_error("ValidationException"));
        match err {
            StoreError::RequestFailed(message) => assert!(message.contains("simulated")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    fn item(pairs: &[(&str, AttributeValue)]) -> HashMap<String, AttributeValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_record_from_full_item() {
        let raw = item(&[
            ("id", AttributeValue::S("abc123".into())),
            ("reviewText", AttributeValue::S("製品の使い方が分かりません".into())),
            ("answer", AttributeValue::S("マニュアルをご覧ください".into())),
            ("Category", AttributeValue::S("質問".into())),
        ]);

        let record = record_from_item("abc123", &raw);
        assert_eq!(record.id, "abc123");
        assert_eq!(record.review_text.as_deref(), Some("製品の使い方が分かりません"));
        assert_eq!(record.answer.as_deref(), Some("マニュアルをご覧ください"));
        assert_eq!(record.category.as_deref(), Some("質問"));
    }

    #[test]
    fn test_record_without_review_text() {
        let raw = item(&[("id", AttributeValue::S("abc123".into()))]);

        let record = record_from_item("abc123", &raw);
        assert!(record.review_text.is_none());
    }

    #[test]
    fn test_non_string_review_text_is_absent() {
        let raw = item(&[
            ("id", AttributeValue::S("abc123".into())),
            ("reviewText", AttributeValue::N("42".into())),
        ]);

        let record = record_from_item("abc123", &raw);
        assert!(record.review_text.is_none());
    }

    #[test]
    fn test_missing_key_attribute_uses_requested_id() {
        let raw = item(&[("reviewText", AttributeValue::S("text".into()))]);

        let record = record_from_item("req-1", &raw);
        assert_eq!(record.id, "req-1");
    }
}
