//! # Backend Service
//!
//! Thin entry point that delegates to lib-web for server setup.

use backend::routes;
use lib_web::{start_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    start_server(ServerConfig::default(), routes::api_router()).await
}
