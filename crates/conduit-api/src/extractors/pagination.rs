//! Pagination extractor
//!
//! Offset/limit pagination from query parameters, with the limit clamped
//! to a sane range.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size when the client does not ask for one
pub const DEFAULT_LIMIT: i64 = 20;

/// Upper bound on the page size
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Deserialize)]
struct PaginationParams {
    limit: Option<i64>,
    offset: Option<i64>,
}

/// Offset/limit pagination parsed from the query string
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Pagination {
    fn from_params(params: &PaginationParams) -> Self {
        Self {
            limit: params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
            offset: params.offset.unwrap_or(0).max(0),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Self::from_params(&params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let pagination = Pagination::from_params(&PaginationParams {
            limit: None,
            offset: None,
        });
        assert_eq!(pagination.limit, DEFAULT_LIMIT);
        assert_eq!(pagination.offset, 0);
    }

    #[test]
    fn test_limit_is_clamped() {
        let too_big = Pagination::from_params(&PaginationParams {
            limit: Some(10_000),
            offset: None,
        });
        assert_eq!(too_big.limit, MAX_LIMIT);

        let too_small = Pagination::from_params(&PaginationParams {
            limit: Some(0),
            offset: None,
        });
        assert_eq!(too_small.limit, 1);
    }

    #[test]
    fn test_negative_offset_is_floored() {
        let pagination = Pagination::from_params(&PaginationParams {
            limit: None,
            offset: Some(-5),
        });
        assert_eq!(pagination.offset, 0);
    }
}
