//! Fixed-delay retry policy
//!
//! Wraps the transaction executor for one identifier: classify each
//! attempt as success, retryable failure or permanent failure, sleep a
//! fixed delay between retryable attempts, and stop after a bounded
//! number of attempts. There is no backoff growth and no jitter.

use crate::core::executor::TransactionExecutor;
use crate::core::types::TransactionOutcome;
use reqwest::StatusCode;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info};

/// Attempt cap per identifier
pub const MAX_RETRIES: u32 = 3;

/// Fixed delay between retryable attempts
pub const RETRY_DELAY: Duration = Duration::from_secs(3);

/// Retry policy applied to every identifier of a run.
///
/// The defaults mirror the production constants; tests inject shorter
/// delays so wall-clock assertions stay fast.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Maximum attempts per identifier
    pub max_retries: u32,
    /// Sleep between retryable attempts
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            retry_delay: RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Whether a status is transient and worth another attempt
    pub fn is_retryable(status: StatusCode) -> bool {
        matches!(
            status,
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT
        )
    }

    /// Drive the executor for one resolved URL until a terminal condition.
    ///
    /// Returns `true` when some attempt came back 200 within the budget.
    /// A non-retryable failure stops immediately; exhausting the budget on
    /// retryable statuses is logged as a terminal failure. Every attempt
    /// is logged with the URL, transaction id, status and attempt index.
    pub async fn dispatch(&self, executor: &TransactionExecutor, url: &str) -> bool {
        let mut retry_count: u32 = 0;

        loop {
            if retry_count == self.max_retries {
                error!(url = %url, "Failed after {} retries", self.max_retries);
                return false;
            }

            let transaction = executor.execute(url).await;

            match transaction.outcome {
                TransactionOutcome::Success => {
                    info!(
                        transaction_id = %transaction.transaction_id,
                        url = %url,
                        status = %transaction.status,
                        retry = retry_count,
                        "Request succeeded"
                    );
                    return true;
                }
                TransactionOutcome::Failed { error } => {
                    error!(
                        transaction_id = %transaction.transaction_id,
                        url = %url,
                        status = %transaction.status,
                        retry = retry_count,
                        "Error: {error}"
                    );

                    if !Self::is_retryable(transaction.status) {
                        // permanent error
                        return false;
                    }

                    sleep(self.retry_delay).await;
                    retry_count += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_production_constants() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.retry_delay, Duration::from_secs(3));
    }

    #[test]
    fn test_retryable_statuses() {
        assert!(RetryPolicy::is_retryable(StatusCode::SERVICE_UNAVAILABLE));
        assert!(RetryPolicy::is_retryable(StatusCode::GATEWAY_TIMEOUT));
    }

    #[test]
    fn test_everything_else_is_permanent() {
        for status in [
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
            StatusCode::MOVED_PERMANENTLY,
        ] {
            assert!(
                !RetryPolicy::is_retryable(status),
                "{status} must not be retried"
            );
        }
    }

    #[test]
    fn test_success_status_is_not_retryable() {
        assert!(!RetryPolicy::is_retryable(StatusCode::OK));
    }
}
