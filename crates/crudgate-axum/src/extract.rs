//! Handler-side extractors for the values written by the middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crudgate_core::error::AppError;
use crudgate_core::types::{FilterField, QueryOptions};

/// The request-derived equality filters, one per path parameter, in path
/// order.
#[derive(Debug, Clone)]
pub struct ParsedParams(pub Vec<FilterField>);

impl std::ops::Deref for ParsedParams {
    type Target = [FilterField];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The route's baseline query options with request-derived filters applied.
#[derive(Debug, Clone)]
pub struct ResolvedOptions(pub QueryOptions);

impl std::ops::Deref for ResolvedOptions {
    type Target = QueryOptions;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for ParsedParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ParsedParams>()
            .cloned()
            .ok_or_else(missing_layer)
    }
}

impl<S> FromRequestParts<S> for ResolvedOptions
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ResolvedOptions>()
            .cloned()
            .ok_or_else(missing_layer)
    }
}

fn missing_layer() -> AppError {
    AppError::internal("crud_params middleware is not installed on this route")
}
