use axum::extract::Path;
use axum::Json;

use crate::data::catalog;
use crate::error::ApiError;
use crate::models::{Category, ErrorResponse};

#[utoipa::path(
    get,
    path = "/api/categories",
    responses((status = OK, description = "All categories, in order", body = [Category])),
    tag = "categories",
)]
pub async fn get_categories() -> Json<&'static [Category]> {
    let categories = catalog::all();
    tracing::info!("Retrieved {} categories", categories.len());
    Json(categories)
}

#[utoipa::path(
    get,
    path = "/api/categories/{category_id}",
    params(("category_id" = i64, Path, description = "Category identifier")),
    responses(
        (status = OK, description = "The matching category", body = Category),
        (status = BAD_REQUEST, description = "Identifier is not an integer", body = ErrorResponse),
        (status = NOT_FOUND, description = "No category has this identifier", body = ErrorResponse),
    ),
    tag = "categories",
)]
pub async fn get_category(
    Path(category_id): Path<String>,
) -> Result<Json<&'static Category>, ApiError> {
    parse_category_id(&category_id)?
        .and_then(catalog::find)
        .map(Json)
        .ok_or(ApiError::CategoryNotFound)
}

/// Parse a path segment as an integer id.
///
/// An optional sign followed by digits is an integer. Integers too large for
/// `i64` can't match any category, so they come back as `Ok(None)`.
fn parse_category_id(raw: &str) -> Result<Option<i64>, ApiError> {
    let digits = raw.strip_prefix(&['+', '-'][..]).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidCategoryId(raw.to_string()));
    }
    Ok(raw.parse::<i64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_signed_integers() {
        assert_eq!(parse_category_id("3").unwrap(), Some(3));
        assert_eq!(parse_category_id("+3").unwrap(), Some(3));
        assert_eq!(parse_category_id("-1").unwrap(), Some(-1));
        assert_eq!(parse_category_id("007").unwrap(), Some(7));
    }

    #[test]
    fn test_parse_overflowing_integer_is_none() {
        assert_eq!(parse_category_id("99999999999999999999").unwrap(), None);
        assert_eq!(parse_category_id("-99999999999999999999").unwrap(), None);
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        for raw in ["abc", "1.5", "", "+", "-", "1e3", "3 ", "0x10", "--1"] {
            assert!(
                matches!(parse_category_id(raw), Err(ApiError::InvalidCategoryId(_))),
                "{raw:?} should be rejected"
            );
        }
    }
}
