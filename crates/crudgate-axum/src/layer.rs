//! Route-parameter middleware.
//!
//! Installed per route with `axum::middleware::from_fn_with_state`; runs the
//! core transform against the request's raw path parameters and stores the
//! results as request extensions before the handler runs. Validation
//! failures short-circuit the route with a 400 response.

use std::sync::Arc;

use axum::extract::{RawPathParams, Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crudgate_core::error::AppError;
use crudgate_core::params::parse_route_params;
use crudgate_core::schema::CrudOptions;

use crate::extract::{ParsedParams, ResolvedOptions};

/// Per-route middleware state: the static configuration bundle.
///
/// Cheap to clone; the underlying [`CrudOptions`] is shared read-only
/// across all requests to the route.
#[derive(Debug, Clone)]
pub struct RouteCrud(Arc<CrudOptions>);

impl RouteCrud {
    /// Wrap a route configuration for use as middleware state.
    pub fn new(config: CrudOptions) -> Self {
        Self(Arc::new(config))
    }

    /// Access the underlying configuration.
    pub fn config(&self) -> &CrudOptions {
        &self.0
    }
}

impl From<CrudOptions> for RouteCrud {
    fn from(config: CrudOptions) -> Self {
        Self::new(config)
    }
}

/// Validates path parameters and attaches [`ParsedParams`] and
/// [`ResolvedOptions`] to the request.
///
/// The transform itself is synchronous; this function is async only because
/// the middleware contract requires it.
pub async fn crud_params(
    State(crud): State<RouteCrud>,
    params: RawPathParams,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let parsed = parse_route_params(params.iter(), crud.config())?;

    tracing::debug!(filters = parsed.filters.len(), "Parsed route parameters");

    request.extensions_mut().insert(ParsedParams(parsed.filters));
    request.extensions_mut().insert(ResolvedOptions(parsed.options));

    Ok(next.run(request).await)
}
