//! In-memory store for testing and local runs.

use super::{InquiryStore, StoreError};
use crate::models::InquiryRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

/// In-memory inquiry store with injectable failures and call counters.
#[derive(Default)]
pub struct InMemoryInquiryStore {
    records: RwLock<HashMap<String, InquiryRecord>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl InMemoryInquiryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = InquiryRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();

        Self {
            records: RwLock::new(records),
            ..Self::default()
        }
    }

    /// Snapshot of a stored record.
    pub async fn record(&self, id: &str) -> Option<InquiryRecord> {
        self.records.read().await.get(id).cloned()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InquiryStore for InMemoryInquiryStore {
    async fn get(&self, id: &str) -> Result<Option<InquiryRecord>, StoreError> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("Mock store read failure".to_string()));
        }

        Ok(self.records.read().await.get(id).cloned())
    }

    async fn update_field(&self, id: &str, field: &str, value: &str) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("Mock store write failure".to_string()));
        }

        // UpdateItem creates the item when the key is absent; mirror that.
        let mut records = self.records.write().await;
        let record = records.entry(id.to_string()).or_insert_with(|| InquiryRecord {
            id: id.to_string(),
            ..Default::default()
        });

        let slot = match field {
            "reviewText" => &mut record.review_text,
            "answer" => &mut record.answer,
            "Category" => &mut record.category,
            other => {
                return Err(StoreError::RequestFailed(format!(
                    "Unsupported attribute: {}",
                    other
                )))
            }
        };
        *slot = Some(value.to_string());

        Ok(())
    }
}
