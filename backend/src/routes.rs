//! # API Routes
//!
//! Mount point for the application's business endpoints. The bootstrap
//! merges this router at the root path, typed against [`AppState`] so
//! handlers registered here extract the database handle and configuration
//! at their call boundary.
//!
//! Budgeting endpoints (transactions, balances) register on this router;
//! request bodies arrive through [`lib_web::JsonOrForm`] in either JSON or
//! URL-encoded form.

use axum::Router;
use lib_web::AppState;

/// Build the API route table merged at the root path.
pub fn api_router() -> Router<AppState> {
    Router::new()
}
