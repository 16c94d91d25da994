//! Demo server library for crudgate.
//!
//! Exposes the router and configuration so integration tests can drive the
//! application without binding a socket.

pub mod app;
pub mod config;

pub use app::build_router;
pub use config::AppConfig;
