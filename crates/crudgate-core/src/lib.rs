//! # crudgate-core
//!
//! Core crate for crudgate. Contains the per-route parameter schema,
//! filter/options types, the route-parameter transform, and the unified
//! error system.
//!
//! This crate has **no** dependency on the crudgate integration crates.

pub mod error;
pub mod numeric;
pub mod params;
pub mod result;
pub mod schema;
pub mod types;

pub use error::AppError;
pub use params::{ParsedRequest, parse_route_params};
pub use result::AppResult;
pub use schema::{CrudOptions, ParamKind, ParamSchema};
