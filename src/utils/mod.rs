//! Utility modules for the endpoint hitter
//!
//! - **error**: Error handling
//! - **net**: Shared HTTP client construction

pub mod error;
pub mod net;

pub use error::{HitterError, Result};
pub use net::HttpPoolConfig;
