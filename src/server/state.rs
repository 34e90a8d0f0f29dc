//! Application state shared across HTTP handlers

use crate::core::Dispatcher;
use std::sync::Arc;

/// HTTP server state shared across handlers.
///
/// The dispatcher carries the shared HTTP client and the configured
/// template/method/credentials; every upload reuses it for a fresh run.
#[derive(Clone)]
pub struct AppState {
    /// Configured dispatcher, shared read-only
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// Create a new AppState around a configured dispatcher
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }
}
