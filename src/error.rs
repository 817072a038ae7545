//! Error types for geotrail

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: latitude and longitude must be non-zero")]
    InvalidCoordinates,

    #[error("No records found for common_id: {0}")]
    PathNotFound(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl Error {
    pub fn store(msg: impl Into<String>) -> Self {
        Error::Store(msg.into())
    }
}
