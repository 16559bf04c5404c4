//! Mock provider implementation for testing.

use super::{GenerationOutput, GeneratorError, RetrievalGenerator};
use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Empty,
    Fail(String),
}

/// Scripted generator. Replies are consumed in order; the last one repeats.
pub struct MockGenerator {
    replies: Mutex<VecDeque<MockReply>>,
    requests: Mutex<Vec<String>>,
}

impl MockGenerator {
    fn scripted(replies: impl IntoIterator<Item = MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Always answer with `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::scripted([MockReply::Text(text.into())])
    }

    /// Answer with each text in turn.
    pub fn with_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::scripted(texts.into_iter().map(|t| MockReply::Text(t.into())))
    }

    /// Succeed without an output block.
    pub fn empty() -> Self {
        Self::scripted([MockReply::Empty])
    }

    /// Fail every call with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::scripted([MockReply::Fail(message.into())])
    }

    /// Texts received so far, in call order.
    pub async fn requests(&self) -> Vec<String> {
        self.requests.lock().await.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

#[async_trait]
impl RetrievalGenerator for MockGenerator {
    async fn generate(&self, text: &str) -> Result<GenerationOutput, GeneratorError> {
        self.requests.lock().await.push(text.to_string());

        let reply = {
            let mut replies = self.replies.lock().await;
            if replies.len() > 1 {
                replies.pop_front()
            } else {
                replies.front().cloned()
            }
        };

        match reply {
            Some(MockReply::Text(text)) => Ok(GenerationOutput {
                text: Some(text),
                session_id: Some("mock-session".to_string()),
                citation_count: 0,
            }),
            Some(MockReply::Empty) => Ok(GenerationOutput::default()),
            Some(MockReply::Fail(message)) => Err(GeneratorError::ApiError(message)),
            None => Err(GeneratorError::NotConfigured(
                "Mock generator has no scripted reply".to_string(),
            )),
        }
    }
}
