//! Health check endpoint.

use actix_web::{HttpResponse, web};
use forum_shared::HealthResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Reports server status and whether the storage backend answers.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.storage.ping().await?;

    let response = HealthResponse {
        status: "ok".to_string(),
        storage: state.storage.kind().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    Ok(HttpResponse::Ok().json(response))
}
