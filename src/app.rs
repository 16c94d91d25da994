//! Demo router showing the crud_params middleware on real routes.
//!
//! Each resource route declares its own parameter schema and baseline
//! options; handlers echo the parsed values so the downstream contract is
//! directly observable.

use axum::routing::get;
use axum::{Json, Router, middleware as axum_middleware};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crudgate_axum::{ParsedParams, ResolvedOptions, RouteCrud, crud_params};
use crudgate_core::schema::{CrudOptions, ParamKind, ParamSchema};
use crudgate_core::types::{FilterField, QueryOptions, SortField};

/// Build the complete demo router.
pub fn build_router() -> Router {
    let api_routes = Router::new()
        .merge(user_routes())
        .merge(company_user_routes())
        .merge(post_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
}

/// `GET /users/{id}`: numeric id with a baseline soft-delete filter and
/// limits.
fn user_routes() -> Router {
    let crud = RouteCrud::new(
        CrudOptions::new()
            .with_params(ParamSchema::new().param("id", ParamKind::Number))
            .with_options(
                QueryOptions::new()
                    .with_filter(vec![FilterField::eq_bool("deleted", false)])
                    .with_sort(vec![SortField::desc("created_at")])
                    .with_limit(25)
                    .with_max_limit(100)
                    .with_cache_seconds(60),
            ),
    );

    Router::new()
        .route("/users/{id}", get(echo_parsed))
        .route_layer(axum_middleware::from_fn_with_state(crud, crud_params))
}

/// `GET /companies/{company_id}/users/{user_id}`: uuid plus number, with an
/// empty baseline.
fn company_user_routes() -> Router {
    let crud = RouteCrud::new(
        CrudOptions::new().with_params(
            ParamSchema::new()
                .param("company_id", ParamKind::Uuid)
                .param("user_id", ParamKind::Number),
        ),
    );

    Router::new()
        .route("/companies/{company_id}/users/{user_id}", get(echo_parsed))
        .route_layer(axum_middleware::from_fn_with_state(crud, crud_params))
}

/// `GET /posts/{slug}`: free-form text parameter.
fn post_routes() -> Router {
    let crud = RouteCrud::new(
        CrudOptions::new().with_params(ParamSchema::new().param("slug", ParamKind::Text)),
    );

    Router::new()
        .route("/posts/{slug}", get(echo_parsed))
        .route_layer(axum_middleware::from_fn_with_state(crud, crud_params))
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

/// Echoes the two request extensions written by the middleware.
async fn echo_parsed(
    ParsedParams(params): ParsedParams,
    ResolvedOptions(options): ResolvedOptions,
) -> Json<serde_json::Value> {
    Json(json!({
        "params": params,
        "options": options,
    }))
}

/// Liveness probe.
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
