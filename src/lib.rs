//! Geotrail - a location ledger service
//!
//! Geotrail records latitude/longitude fixes tagged with a caller-supplied
//! identifier and returns them as a path ordered by submission time:
//! - JSON HTTP API built on axum
//! - MongoDB persistence behind a swappable store trait
//! - Static frontend responder

pub mod api;
pub mod config;
pub mod error;
pub mod ledger;
pub mod store;
pub mod types;

pub use error::{Error, Result};
