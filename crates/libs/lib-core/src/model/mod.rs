//! # Model Layer
//!
//! Database access for the application. Domain collections are owned by
//! the routes that use them; this layer provides the shared connection.

pub mod store;
