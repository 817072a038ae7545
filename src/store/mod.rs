//! Store abstraction layer
//!
//! Provides a unified interface over MongoDB and an in-memory backend

use async_trait::async_trait;

use crate::types::LocationRecord;
use crate::Result;

pub mod memory;
pub mod mongo;

/// Location store trait
///
/// One handle is created at startup and shared by every request; the
/// backend owns connection pooling and write atomicity.
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Persist one record and return the generated id
    async fn insert(&self, record: LocationRecord) -> Result<String>;

    /// All records matching `common_id` exactly, ascending by timestamp.
    ///
    /// Order follows the stored wall-clock timestamp, not request arrival
    /// order; two submissions for the same id issued concurrently may
    /// persist in either timestamp order. Ties fall back to storage order.
    async fn find_by_common_id(&self, common_id: &str) -> Result<Vec<LocationRecord>>;
}

/// Store configuration
#[derive(Debug, Clone)]
pub enum StoreConfig {
    Mongo {
        uri: String,
        database: String,
        collection: String,
    },
    Memory,
}

/// Create a store backend from config
pub async fn create_store(config: StoreConfig) -> Result<Box<dyn LocationStore>> {
    match config {
        StoreConfig::Mongo {
            uri,
            database,
            collection,
        } => {
            let backend = mongo::MongoStore::connect(&uri, &database, &collection).await?;
            Ok(Box::new(backend))
        }
        StoreConfig::Memory => Ok(Box::new(memory::MemoryStore::new())),
    }
}
