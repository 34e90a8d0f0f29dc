//! Shared HTTP client construction
//!
//! One `reqwest::Client` is created per dispatcher and reused for every
//! transaction in a run, so TCP connections and DNS lookups are amortized
//! across the whole identifier list. The client is an explicit instance
//! handed to the executor, not a process-wide global, so independent runs
//! (and tests) never share state.

use crate::utils::error::Result;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// Configuration for the HTTP connection pool
#[derive(Debug, Clone)]
pub struct HttpPoolConfig {
    /// Maximum idle connections kept per host
    pub pool_max_idle_per_host: usize,
    /// Dial timeout for establishing a connection
    pub connect_timeout: Duration,
    /// TCP keepalive interval
    pub tcp_keepalive: Duration,
    /// User agent string
    pub user_agent: &'static str,
}

impl Default for HttpPoolConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: 50,
            connect_timeout: Duration::from_secs(30),
            tcp_keepalive: Duration::from_secs(30),
            user_agent: concat!("endpoint-hitter/", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Build the shared HTTP client used for a dispatch run.
///
/// Only transport-level timeouts are applied; there is no deadline on a
/// whole request-plus-retries sequence.
pub fn build_client(config: &HttpPoolConfig) -> Result<Client> {
    let client = ClientBuilder::new()
        .pool_max_idle_per_host(config.pool_max_idle_per_host)
        .connect_timeout(config.connect_timeout)
        .tcp_keepalive(config.tcp_keepalive)
        .tcp_nodelay(true)
        .user_agent(config.user_agent)
        .build()?;

    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_config_defaults() {
        let config = HttpPoolConfig::default();
        assert_eq!(config.pool_max_idle_per_host, 50);
        assert_eq!(config.connect_timeout, Duration::from_secs(30));
        assert_eq!(config.tcp_keepalive, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("endpoint-hitter/"));
    }

    #[test]
    fn test_build_client() {
        let client = build_client(&HttpPoolConfig::default());
        assert!(client.is_ok());
    }
}
