//! Dispatch core
//!
//! The four pieces of a run, leaf-first: the transaction executor performs
//! one HTTP call, the retry policy wraps it with classification and a
//! fixed delay, the wave scheduler bounds how many run at once, and the
//! aggregator counts successes without racing the scheduler. `Dispatcher`
//! wires them together for one configuration.

pub mod aggregator;
pub mod executor;
pub mod retry;
pub mod scheduler;
pub mod types;

pub use aggregator::{SuccessAggregator, SuccessSink};
pub use executor::TransactionExecutor;
pub use retry::RetryPolicy;
pub use scheduler::WaveScheduler;
pub use types::{Credentials, DispatchSummary, Transaction, TransactionOutcome, resolve_url};

use crate::utils::error::Result;
use crate::utils::net::{self, HttpPoolConfig};
use std::io::BufRead;
use std::time::Instant;
use tracing::info;

/// Everything a dispatch run needs, supplied by the CLI or server layer
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// URL template with a `{uuid}` substitution marker
    pub target_url: String,
    /// HTTP method token (GET, POST, PUT, ...)
    pub method_type: String,
    /// Basic-auth credentials attached to every request
    pub credentials: Credentials,
    /// Window size: maximum concurrent in-flight requests
    pub throttle: usize,
    /// Attempt cap and inter-attempt delay
    pub retry: RetryPolicy,
}

/// A reusable dispatcher for one target/method/credential configuration.
///
/// Each call to [`dispatch`](Dispatcher::dispatch) is an independent run
/// with its own aggregator; multiple dispatchers can coexist in one
/// process since no state is global.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    executor: TransactionExecutor,
    policy: RetryPolicy,
    scheduler: WaveScheduler,
    target_url: String,
}

impl Dispatcher {
    /// Build a dispatcher, creating its shared HTTP client
    pub fn new(config: DispatcherConfig) -> Result<Self> {
        let client = net::build_client(&HttpPoolConfig::default())?;
        let executor = TransactionExecutor::new(client, &config.method_type, &config.credentials)?;

        Ok(Self {
            executor,
            policy: config.retry,
            scheduler: WaveScheduler::new(config.throttle),
            target_url: config.target_url,
        })
    }

    /// Run one batch over the given identifier list.
    ///
    /// Completes only after the final window has joined and the
    /// aggregator has drained every pending success signal.
    pub async fn dispatch(&self, uuids: &[String]) -> DispatchSummary {
        let start = Instant::now();
        let aggregator = SuccessAggregator::new();

        self.scheduler
            .run(
                &self.executor,
                &self.policy,
                &self.target_url,
                uuids,
                aggregator.sink(),
            )
            .await;

        let succeeded = aggregator.finish().await;
        let summary = DispatchSummary::new(uuids.len(), succeeded, start.elapsed());
        info!("{summary}");
        summary
    }
}

/// Read one identifier per line, skipping blank lines.
///
/// Used by both the CLI file path and the HTTP upload surface. The core
/// tolerates an empty result.
pub fn read_identifiers<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut uuids = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            uuids.push(line.to_string());
        }
    }
    Ok(uuids)
}
