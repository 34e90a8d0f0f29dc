//! # endpoint-hitter
//!
//! Batch dispatcher for hitting a templated endpoint once per identifier.
//!
//! Given an ordered list of identifiers, each one is substituted into a
//! URL template and requested over HTTP, with a bounded number of
//! requests in flight at once (the "throttle"), fixed-delay retries for
//! transient failures (503/504), and an aggregate success rate reported
//! when the whole list is done.
//!
//! Runs either as a one-shot CLI batch over a local file or as an HTTP
//! service that dispatches a batch per uploaded identifier file.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use endpoint_hitter::core::{Credentials, Dispatcher, DispatcherConfig, RetryPolicy};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dispatcher = Dispatcher::new(DispatcherConfig {
//!         target_url: "https://host/content/{uuid}".to_string(),
//!         method_type: "POST".to_string(),
//!         credentials: Credentials::new("user", "password"),
//!         throttle: 100,
//!         retry: RetryPolicy::default(),
//!     })?;
//!
//!     let uuids = vec!["a".to_string(), "b".to_string()];
//!     let summary = dispatcher.dispatch(&uuids).await;
//!     println!("{summary}");
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use crate::config::Config;
pub use crate::core::{DispatchSummary, Dispatcher, DispatcherConfig};
pub use crate::utils::error::{HitterError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
