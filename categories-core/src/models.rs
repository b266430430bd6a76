use serde::Serialize;
use utoipa::ToSchema;

/// Response for GET /
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    #[schema(value_type = String)]
    pub message: &'static str,
    #[schema(value_type = String)]
    pub status: &'static str,
}

/// Response for GET /health
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String)]
    pub status: &'static str,
    #[schema(value_type = String)]
    pub service: &'static str,
}

/// A single entry in the category directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Category {
    pub id: u32,
    #[schema(value_type = String)]
    pub name: &'static str,
    #[schema(value_type = String)]
    pub description: &'static str,
}

/// Error body returned by the API, e.g. `{"error": "Category not found"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
