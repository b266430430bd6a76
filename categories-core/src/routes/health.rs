use axum::Json;

use crate::models::HealthResponse;

/// Liveness check. Always healthy while the process is serving.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = OK, description = "Healthcheck endpoint", body = HealthResponse)),
    tag = "system",
)]
pub async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "categories-api",
    })
}
