//! HTTP route handlers

use crate::core::read_identifiers;
use crate::server::state::AppState;
use crate::utils::error::HitterError;
use actix_multipart::Multipart;
use actix_web::{HttpResponse, Result as ActixResult, web};
use futures::StreamExt;
use serde_json::json;
use tracing::{error, info};

/// Standard API response envelope
#[derive(Debug, Clone, serde::Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: serde::Serialize,
{
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Upload endpoint
///
/// Accepts multipart form data with a `file` field of newline-separated
/// identifiers and runs one dispatch over them, responding with the run
/// summary once the final window has completed.
pub async fn upload(
    state: web::Data<AppState>,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let mut file_data: Option<Vec<u8>> = None;

    while let Some(item) = payload.next().await {
        let mut field = match item {
            Ok(field) => field,
            Err(e) => {
                error!("Error reading multipart field: {e}");
                return Ok(HttpResponse::BadRequest().json(ApiResponse::<()>::error(format!(
                    "Invalid multipart data: {e}"
                ))));
            }
        };

        let field_name = match field.name() {
            Some(name) => name.to_string(),
            None => continue,
        };

        if field_name == "file" {
            let mut data = Vec::new();
            while let Some(chunk) = field.next().await {
                match chunk {
                    Ok(bytes) => data.extend_from_slice(&bytes),
                    Err(e) => {
                        error!("Error reading file chunk: {e}");
                        return Ok(HttpResponse::BadRequest()
                            .json(ApiResponse::<()>::error("Error reading file".to_string())));
                    }
                }
            }
            file_data = Some(data);
        }
    }

    let file_data = file_data
        .ok_or_else(|| HitterError::upload("multipart payload has no \"file\" field"))?;
    let uuids = read_identifiers(file_data.as_slice())?;

    info!(count = uuids.len(), "dispatching uploaded identifier list");
    let summary = state.dispatcher.dispatch(&uuids).await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(summary)))
}

/// Register the routes on an actix service config
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/__health", web::get().to(health_check))
        .route("/upload", web::post().to(upload));
}
