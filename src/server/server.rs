//! HTTP server core implementation

use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{HitterError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, middleware::Logger, web};
use tracing::info;

/// HTTP server wrapping the dispatcher state
pub struct HttpServer {
    port: u16,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server around a configured dispatcher state
    pub fn new(port: u16, state: AppState) -> Self {
        Self { port, state }
    }

    /// Bind and run until the process is stopped.
    ///
    /// Dispatch runs triggered by uploads execute inside the request
    /// handlers; the server itself holds no run state.
    pub async fn start(self) -> Result<()> {
        let bind_addr = format!("0.0.0.0:{}", self.port);
        info!("Starting HTTP server on {bind_addr}");

        let state = web::Data::new(self.state);

        let server = ActixHttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .wrap(Logger::default())
                .configure(routes::configure_routes)
        })
        .bind(&bind_addr)?
        .run();

        info!("HTTP server listening on {bind_addr}");

        server
            .await
            .map_err(|e| HitterError::internal(format!("Server error: {e}")))?;

        info!("HTTP server stopped");
        Ok(())
    }
}
