//! HTTP API module for the experience mod audit engine.
//!
//! This module provides the REST endpoint for running a full policy audit.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AuditRequest;
pub use response::ApiError;
pub use state::AppState;
