//! Location ledger service
//!
//! The domain layer between the HTTP handlers and the store: submission
//! constraints, server-side timestamping, and the fetch policy.

use std::sync::Arc;

use crate::store::LocationStore;
use crate::types::{Coordinates, LocationRecord};
use crate::{Error, Result};

/// Ledger over an injected store handle
pub struct Ledger {
    store: Arc<dyn LocationStore>,
}

impl Ledger {
    pub fn new(store: Arc<dyn LocationStore>) -> Self {
        Self { store }
    }

    /// Persist one location fix with a server-assigned UTC timestamp.
    ///
    /// A coordinate of exactly 0.0 is treated as a missing-value sentinel
    /// and rejected before anything is written. Retrying a failed request
    /// produces a distinct timestamp; submissions are not deduplicated.
    pub async fn submit(
        &self,
        common_id: String,
        latitude: f64,
        longitude: f64,
    ) -> Result<String> {
        if latitude == 0.0 || longitude == 0.0 {
            return Err(Error::InvalidCoordinates);
        }

        let record = LocationRecord::new(common_id, latitude, longitude);
        self.store.insert(record).await
    }

    /// All coordinate pairs recorded for `common_id`, ascending by timestamp.
    ///
    /// An id with no records fails with `PathNotFound` rather than yielding
    /// an empty path; records are create-only, so any known id has at least
    /// one record.
    pub async fn fetch_path(&self, common_id: &str) -> Result<Vec<Coordinates>> {
        let records = self.store.find_by_common_id(common_id).await?;

        if records.is_empty() {
            return Err(Error::PathNotFound(common_id.to_string()));
        }

        Ok(records.into_iter().map(|r| r.coordinates).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn test_ledger() -> Ledger {
        Ledger::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_submit_returns_record_id() {
        let ledger = test_ledger();

        let id = ledger
            .submit("rider-7".to_string(), 12.5, 77.2)
            .await
            .unwrap();
        assert!(!id.is_empty());
    }

    #[tokio::test]
    async fn test_zero_coordinates_rejected_and_not_persisted() {
        let ledger = test_ledger();

        let err = ledger.submit("b".to_string(), 0.0, 5.0).await.unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinates));

        let err = ledger.submit("b".to_string(), 5.0, 0.0).await.unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinates));

        // Nothing was written for this id
        let err = ledger.fetch_path("b").await.unwrap_err();
        assert!(matches!(err, Error::PathNotFound(_)));
    }

    #[tokio::test]
    async fn test_fetch_unknown_id_fails() {
        let ledger = test_ledger();

        let err = ledger.fetch_path("nobody").await.unwrap_err();
        assert!(matches!(err, Error::PathNotFound(_)));
    }

    #[tokio::test]
    async fn test_round_trip_preserves_submission_order() {
        let ledger = test_ledger();

        ledger.submit("a".to_string(), 1.0, 2.0).await.unwrap();
        ledger.submit("a".to_string(), 3.0, 4.0).await.unwrap();

        let path = ledger.fetch_path("a").await.unwrap();
        assert_eq!(path, vec![(1.0, 2.0), (3.0, 4.0)]);
    }

    #[tokio::test]
    async fn test_fetch_is_repeatable() {
        let ledger = test_ledger();

        ledger.submit("x".to_string(), 12.5, 77.2).await.unwrap();

        let first = ledger.fetch_path("x").await.unwrap();
        let second = ledger.fetch_path("x").await.unwrap();
        assert_eq!(first, second);
        assert!(first.contains(&(12.5, 77.2)));
    }
}
