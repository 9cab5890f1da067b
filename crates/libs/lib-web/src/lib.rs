//! # Web Library
//!
//! HTTP server setup, middleware, and body extraction for the budget
//! tracker server. Business endpoints live outside this crate: callers
//! hand [`start_server`] an API router built against [`AppState`], and the
//! bootstrap merges it at the root path.

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod server;

pub use extract::JsonOrForm;
pub use server::{build_router, start_server, AppState, ServerConfig};
