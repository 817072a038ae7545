//! API server state

use std::sync::Arc;

use crate::ledger::Ledger;

/// API server state shared by every request handler
#[derive(Clone)]
pub struct AppState {
    /// Location ledger
    pub ledger: Arc<Ledger>,
}

impl AppState {
    pub fn new(ledger: Arc<Ledger>) -> Self {
        Self { ledger }
    }
}
