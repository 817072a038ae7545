//! Core types for geotrail

use chrono::{DateTime, Utc};
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use serde::{Deserialize, Serialize};

/// A single latitude/longitude pair, in that order
pub type Coordinates = (f64, f64);

/// Marker carried on every record for downstream geospatial tooling
pub const RECORD_TYPE_POINT: &str = "Point";

/// One persisted location fix
///
/// Records are immutable once written; there is no update or delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRecord {
    /// Caller-supplied entity identifier; many records share one id
    pub common_id: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub coordinates: Coordinates,
    /// Server-assigned at submission time; sole ordering key for a path
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub timestamp: DateTime<Utc>,
}

impl LocationRecord {
    /// Build a record stamped with the current UTC time
    pub fn new(common_id: String, latitude: f64, longitude: f64) -> Self {
        Self {
            common_id,
            record_type: RECORD_TYPE_POINT.to_string(),
            coordinates: (latitude, longitude),
            timestamp: Utc::now(),
        }
    }
}
