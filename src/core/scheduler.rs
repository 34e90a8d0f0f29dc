//! Wave scheduler
//!
//! Drives the retry policy over the full identifier list under a
//! concurrency ceiling. The list is processed in consecutive windows of
//! at most `throttle` identifiers; each window runs fully in parallel
//! and a join barrier completes the whole window before the next one
//! starts. A single slow retrying identifier therefore stalls the start
//! of the next window; that matches the production behavior on purpose.

use crate::core::aggregator::SuccessSink;
use crate::core::executor::TransactionExecutor;
use crate::core::retry::RetryPolicy;
use crate::core::types::resolve_url;
use futures::future::join_all;
use tracing::debug;

/// Windowed dispatch over an ordered identifier list
#[derive(Debug, Clone)]
pub struct WaveScheduler {
    throttle: usize,
}

impl WaveScheduler {
    /// Create a scheduler with the given window size, clamped to at least 1
    pub fn new(throttle: usize) -> Self {
        Self {
            throttle: throttle.max(1),
        }
    }

    /// Configured window size
    pub fn throttle(&self) -> usize {
        self.throttle
    }

    /// Dispatch every identifier, window by window.
    ///
    /// Identifiers within a window run concurrently with no ordering
    /// guarantee; windows run strictly in list order. A failing unit
    /// never aborts its window or the run. An empty list completes as a
    /// no-op. Completion means the final window has fully joined.
    pub async fn run(
        &self,
        executor: &TransactionExecutor,
        policy: &RetryPolicy,
        target_url: &str,
        uuids: &[String],
        sink: SuccessSink,
    ) {
        for (index, window) in uuids.chunks(self.throttle).enumerate() {
            debug!(window = index, size = window.len(), "starting window");

            let units = window.iter().map(|uuid| {
                let url = resolve_url(target_url, uuid);
                let sink = sink.clone();
                async move {
                    if policy.dispatch(executor, &url).await {
                        sink.record().await;
                    }
                }
            });

            // Full barrier: wait for every unit in the window.
            join_all(units).await;
        }
    }
}
