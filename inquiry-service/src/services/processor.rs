//! Fetch → compose → generate → extract → persist, for one inquiry.

use super::flow::InquiryFlow;
use super::providers::RetrievalGenerator;
use super::store::InquiryStore;
use crate::error::InquiryError;
use std::sync::Arc;
use tracing::instrument;

/// Runs one [`InquiryFlow`] against injected store and generator handles.
///
/// Stages run strictly in order and the first failure ends the invocation.
/// Nothing is written unless every earlier stage succeeded. Concurrent runs
/// for the same id are not coordinated; the last write wins.
pub struct InquiryProcessor<F> {
    store: Arc<dyn InquiryStore>,
    generator: Arc<dyn RetrievalGenerator>,
    flow: F,
}

impl<F: InquiryFlow> InquiryProcessor<F> {
    pub fn new(
        store: Arc<dyn InquiryStore>,
        generator: Arc<dyn RetrievalGenerator>,
        flow: F,
    ) -> Self {
        Self {
            store,
            generator,
            flow,
        }
    }

    pub fn flow(&self) -> &F {
        &self.flow
    }

    #[instrument(skip(self), fields(flow = self.flow.name()))]
    pub async fn process(&self, inquiry_id: &str) -> Result<F::Outcome, InquiryError> {
        if inquiry_id.is_empty() {
            return Err(InquiryError::ClientError);
        }

        let record = self
            .store
            .get(inquiry_id)
            .await
            .map_err(InquiryError::UpstreamRead)?;

        let review_text = record
            .and_then(|record| record.review_text)
            .ok_or(InquiryError::NotFound)?;

        tracing::debug!(review_len = review_text.len(), "Fetched inquiry");

        let request_text = self.flow.compose(&review_text);

        let output = self
            .generator
            .generate(&request_text)
            .await
            .map_err(InquiryError::Generation)?;

        tracing::debug!(
            has_text = output.text.is_some(),
            citations = output.citation_count,
            session_id = output.session_id.as_deref().unwrap_or_default(),
            "Generation completed"
        );

        let value = self
            .flow
            .extract(output)
            .map_err(InquiryError::Generation)?;

        self.store
            .update_field(inquiry_id, self.flow.field(), self.flow.stored(&value))
            .await
            .map_err(InquiryError::UpstreamWrite)?;

        tracing::info!(field = self.flow.field(), "Inquiry updated");

        Ok(self.flow.outcome(inquiry_id, value))
    }
}
