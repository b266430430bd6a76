use axum::Json;

use crate::models::RootResponse;

#[utoipa::path(
    get,
    path = "/",
    responses((status = OK, description = "Service identity", body = RootResponse)),
    tag = "system",
)]
pub async fn get_root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Categories API",
        status: "running",
    })
}
