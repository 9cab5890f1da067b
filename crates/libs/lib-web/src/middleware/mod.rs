//! # Middleware
//!
//! Axum middleware applied to every route by the server setup.

pub mod mw_req_stamp;

pub use mw_req_stamp::{stamp_req, RequestStamp};
