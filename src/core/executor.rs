//! Transaction executor
//!
//! Performs exactly one HTTP call for one resolved URL and reports the
//! status, a fresh correlation id and the outcome. Retrying is the retry
//! policy's job; nothing here loops.

use crate::core::types::{Credentials, Transaction, TransactionOutcome};
use crate::utils::error::{HitterError, Result};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use tracing::warn;
use uuid::Uuid;

/// Header carrying the per-attempt correlation id
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Executes single transactions against resolved URLs.
///
/// Holds the shared HTTP client, the request method and the precomputed
/// authorization header for the whole run.
#[derive(Debug, Clone)]
pub struct TransactionExecutor {
    client: Client,
    method: Method,
    authorization: HeaderValue,
}

impl TransactionExecutor {
    /// Create an executor for a run.
    ///
    /// `method_type` is any HTTP method token (GET, POST, PUT, ...); it is
    /// parsed, not validated against a fixed enum. The credentials are
    /// encoded once here and reused for every request.
    pub fn new(client: Client, method_type: &str, credentials: &Credentials) -> Result<Self> {
        let method = Method::from_bytes(method_type.as_bytes())
            .map_err(|e| HitterError::config(format!("invalid method type {method_type:?}: {e}")))?;
        let authorization = HeaderValue::from_str(&credentials.authorization())
            .map_err(|e| HitterError::config(format!("invalid credentials: {e}")))?;

        Ok(Self {
            client,
            method,
            authorization,
        })
    }

    /// Perform one HTTP call against `url`.
    ///
    /// Transport-level failures (malformed URL, connection refused, dial
    /// timeout) are reported with a synthetic internal-error status. A
    /// completed exchange reports the server's real status; only 200 is a
    /// success. The response body is drained on every path so the
    /// connection can go back to the pool.
    pub async fn execute(&self, url: &str) -> Transaction {
        let transaction_id = new_transaction_id();

        let result = self
            .client
            .request(self.method.clone(), url)
            .header(REQUEST_ID_HEADER, transaction_id.as_str())
            .header(AUTHORIZATION, self.authorization.clone())
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                return Transaction {
                    transaction_id,
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    outcome: TransactionOutcome::Failed {
                        error: format!("executing request returned error: {e}"),
                    },
                };
            }
        };

        let status = response.status();

        // Drain the body so the connection is reusable. A drain failure is
        // only worth a warning; it must never override the primary result.
        if let Err(e) = response.bytes().await {
            warn!(transaction_id = %transaction_id, url = %url, "failed to drain response body: {e}");
        }

        let outcome = if status == StatusCode::OK {
            TransactionOutcome::Success
        } else {
            TransactionOutcome::Failed {
                error: HitterError::Status(status).to_string(),
            }
        };

        Transaction {
            transaction_id,
            status,
            outcome,
        }
    }
}

/// Generate a fresh correlation id for one attempt.
///
/// Unique with overwhelming probability across a run; not a business key.
fn new_transaction_id() -> String {
    format!("tid_{}_endpoint-hitter", Uuid::new_v4().simple())
}
