//! # crudgate-axum
//!
//! Axum integration for crudgate. Provides the route-parameter middleware
//! (`crud_params`), the request extensions it writes, and handler-side
//! extractors for reading them.
//!
//! ```no_run
//! use axum::{Router, middleware, routing::get};
//! use crudgate_axum::{ParsedParams, RouteCrud, crud_params};
//! use crudgate_core::{CrudOptions, ParamKind, ParamSchema};
//!
//! async fn get_user(ParsedParams(filters): ParsedParams) -> String {
//!     format!("{} filter(s)", filters.len())
//! }
//!
//! let crud = RouteCrud::new(
//!     CrudOptions::new().with_params(ParamSchema::new().param("id", ParamKind::Number)),
//! );
//! let app: Router = Router::new()
//!     .route("/users/{id}", get(get_user))
//!     .route_layer(middleware::from_fn_with_state(crud, crud_params));
//! ```

pub mod extract;
pub mod layer;

pub use extract::{ParsedParams, ResolvedOptions};
pub use layer::{RouteCrud, crud_params};
