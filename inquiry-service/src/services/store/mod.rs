//! Inquiry record store abstraction.
//!
//! The processor only needs a keyed read and a single-attribute update, so the
//! trait is kept to those two calls. DynamoDB backs it in production; the
//! in-memory store backs tests and local runs.

pub mod dynamodb;
pub mod memory;

pub use dynamodb::DynamoInquiryStore;
pub use memory::InMemoryInquiryStore;

use crate::models::InquiryRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Error type for store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Throttled: {0}")]
    Throttled(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// Keyed access to inquiry records.
#[async_trait]
pub trait InquiryStore: Send + Sync {
    /// Read a record by id. `Ok(None)` when no item exists.
    async fn get(&self, id: &str) -> Result<Option<InquiryRecord>, StoreError>;

    /// Set one string attribute on the record, leaving the rest untouched.
    async fn update_field(&self, id: &str, field: &str, value: &str) -> Result<(), StoreError>;
}
