//! MongoDB store backend

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::{Client, Collection};

use crate::types::LocationRecord;
use crate::{Error, Result};

use super::LocationStore;

/// MongoDB store backend
///
/// Holds a single long-lived client handle; pooling, timeouts, and retry
/// behaviour all belong to the driver.
pub struct MongoStore {
    collection: Collection<LocationRecord>,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| Error::store(format!("Mongo connect failed: {}", e)))?;

        let collection = client
            .database(database)
            .collection::<LocationRecord>(collection);

        Ok(Self { collection })
    }
}

#[async_trait]
impl LocationStore for MongoStore {
    async fn insert(&self, record: LocationRecord) -> Result<String> {
        let result = self
            .collection
            .insert_one(record)
            .await
            .map_err(|e| Error::store(format!("Mongo insert failed: {}", e)))?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string());

        Ok(id)
    }

    async fn find_by_common_id(&self, common_id: &str) -> Result<Vec<LocationRecord>> {
        let cursor = self
            .collection
            .find(doc! { "common_id": common_id })
            .sort(doc! { "timestamp": 1 })
            .await
            .map_err(|e| Error::store(format!("Mongo find failed: {}", e)))?;

        let records = cursor
            .try_collect()
            .await
            .map_err(|e| Error::store(format!("Mongo cursor read failed: {}", e)))?;

        Ok(records)
    }
}
