//! HTTP surface
//!
//! Exposes the dispatcher over HTTP: a multipart upload endpoint that
//! runs one batch per uploaded identifier file, plus a liveness check.

pub mod routes;
pub mod server;
pub mod state;

pub use server::HttpServer;
pub use state::AppState;
