//! Lambda entry points shared by both functions.

use crate::error::InquiryError;
use crate::models::InquiryRequest;
use crate::services::{InquiryFlow, InquiryProcessor};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use service_core::error::AppError;
use service_core::response::ApiResponse;
use tracing::Instrument;
use validator::Validate;

/// Lambda `service_fn` target. The payload is taken as raw JSON so that a
/// malformed event still gets an envelope; this never returns `Err` itself.
pub async fn function_handler<F: InquiryFlow>(
    processor: &InquiryProcessor<F>,
    event: LambdaEvent<Value>,
) -> Result<ApiResponse, Error> {
    let LambdaEvent { payload, context } = event;
    let span = tracing::info_span!("invocation", request_id = %context.request_id);

    Ok(handle_payload(processor, payload).instrument(span).await)
}

/// Decode a raw event and handle it. Payloads that are not an object with a
/// string `id` are client errors.
pub async fn handle_payload<F: InquiryFlow>(
    processor: &InquiryProcessor<F>,
    payload: Value,
) -> ApiResponse {
    match parse_request(payload) {
        Ok(request) => handle(processor, request).await,
        Err(e) => AppError::from(e).into_response(),
    }
}

/// Validate the payload, run the flow and render the envelope.
pub async fn handle<F: InquiryFlow>(
    processor: &InquiryProcessor<F>,
    request: InquiryRequest,
) -> ApiResponse {
    let result = match inquiry_id(&request) {
        Ok(id) => processor.process(id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(outcome) => processor.flow().respond(outcome),
        Err(e) => AppError::from(e).into_response(),
    }
}

fn parse_request(payload: Value) -> Result<InquiryRequest, InquiryError> {
    serde_json::from_value(payload).map_err(|e| {
        tracing::debug!("Undecodable payload: {}", e);
        InquiryError::ClientError
    })
}

fn inquiry_id(request: &InquiryRequest) -> Result<&str, InquiryError> {
    request.validate().map_err(|e| {
        tracing::debug!("Invalid request: {}", e);
        InquiryError::ClientError
    })?;

    request.id.as_deref().ok_or(InquiryError::ClientError)
}
