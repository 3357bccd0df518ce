//! HTTP API module for the employee directory service.
//!
//! This module exposes the REST endpoints that reshape the upstream
//! directory: list, search, keyed lookup, salary aggregates, create and
//! delete.

mod handlers;
mod response;
mod state;

pub use handlers::create_router;
pub use response::ApiError;
pub use state::AppState;
