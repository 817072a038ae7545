//! In-memory store backend
//!
//! Used by tests and local development; implements the same contract as
//! the MongoDB backend, including the ascending-timestamp sort.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::types::LocationRecord;
use crate::Result;

use super::LocationStore;

/// In-memory store keyed by common_id
#[derive(Default)]
pub struct MemoryStore {
    records: DashMap<String, Vec<LocationRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocationStore for MemoryStore {
    async fn insert(&self, record: LocationRecord) -> Result<String> {
        self.records
            .entry(record.common_id.clone())
            .or_default()
            .push(record);

        Ok(Uuid::new_v4().simple().to_string())
    }

    async fn find_by_common_id(&self, common_id: &str) -> Result<Vec<LocationRecord>> {
        let mut records = self
            .records
            .get(common_id)
            .map(|entry| entry.clone())
            .unwrap_or_default();

        // Stable sort: equal timestamps keep insertion order
        records.sort_by_key(|r| r.timestamp);

        Ok(records)
    }
}
