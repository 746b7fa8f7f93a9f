//! API module for the HTTP endpoints
//!
//! Read-only REST access to the same engine the MCP tools use.

pub mod http;
pub mod rest;
mod state;

pub use http::{create_router, serve};
pub use state::AppState;
