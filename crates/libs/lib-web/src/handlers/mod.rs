//! # HTTP Request Handlers
//!
//! Handlers owned by the bootstrap itself. Business endpoints are not
//! defined here: they arrive through the API router merged by
//! [`crate::server::build_router`].
//!
//! - **[`health`]**: liveness probe
//!   - `GET /health` - Report that the server is up

pub mod health;
