use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors a request handler can return to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Category not found")]
    CategoryNotFound,
    #[error("Invalid category id: {0}")]
    InvalidCategoryId(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::CategoryNotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidCategoryId(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let resp = ApiError::CategoryNotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            resp.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_invalid_id_maps_to_400() {
        let err = ApiError::InvalidCategoryId("abc".to_string());
        assert_eq!(err.to_string(), "Invalid category id: abc");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
