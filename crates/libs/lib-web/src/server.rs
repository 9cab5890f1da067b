//! # Server Setup
//!
//! Server initialization, route registration, and HTTP server startup.
//!
//! [`start_server`] runs the one-time bootstrap sequence: resolve
//! configuration from the environment, create the database handle, build
//! the router around the caller's API routes, bind the listener, and
//! serve. There is no retry, restart, or shutdown handling at this layer.

// region: --- Imports
use std::net::{Ipv4Addr, SocketAddr};

use axum::extract::FromRef;
use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use lib_core::model::store;
use lib_core::{Config, Db};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::handlers;
use crate::middleware::stamp_req;
// endregion: --- Imports

// region: --- AppState
/// Application state shared across all routes.
///
/// Carries the long-lived database handle and the resolved configuration,
/// so routes mounted by the caller see both at their call boundary instead
/// of reaching for globals.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub config: Config,
}

impl FromRef<AppState> for Db {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
// endregion: --- AppState

// region: --- Server Configuration
/// Server configuration
pub struct ServerConfig {
    /// Directory served as static assets from the root path
    pub public_dir: String,
    /// Allowed CORS origins; empty means no CORS layer
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            public_dir: "public".to_string(),
            allowed_origins: Vec::new(),
        }
    }
}
// endregion: --- Server Configuration

// region: --- Server Setup
/// Initialize and start the HTTP server.
///
/// `api` is the externally defined route table; it is merged at the root
/// path and typed against [`AppState`] so its handlers can extract the
/// database handle and configuration.
///
/// # Errors
///
/// Returns an error if the tracing subscriber is already installed, the
/// database URI is malformed, or the listener fails to bind. An
/// unreachable database is not an error: the driver connects lazily and
/// the server starts serving regardless (a background probe logs the
/// outcome).
pub async fn start_server(server_config: ServerConfig, api: Router<AppState>) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(lib_core::config::DEFAULT_LOG_LEVEL));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(port = config.port, "configuration loaded");

    let db = store::connect(&config.mongodb_uri).await?;

    // Fire-and-forget connectivity probe. Startup never waits on the
    // database; static assets are served while it comes up.
    tokio::spawn({
        let db = db.clone();
        async move {
            match store::ping(&db).await {
                Ok(()) => info!(db = %db.name(), "database connection established"),
                Err(err) => warn!(error = %err, "database unreachable, continuing to serve"),
            }
        }
    });

    let state = AppState { db, config: config.clone() };
    let app = build_router(state, api, &server_config);

    let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port))).await?;
    let port = listener.local_addr()?.port();

    info!("{}", ready_message(port));

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the application router: caller-supplied API routes merged at the
/// root path, a liveness route, and the static file service as fallback.
pub fn build_router(state: AppState, api: Router<AppState>, server_config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/health", get(handlers::health::health))
        .merge(api)
        .fallback_service(ServeDir::new(&server_config.public_dir))
        .with_state(state)
        // Request stamping (adds request ID) - must be first
        .layer(axum::middleware::from_fn(stamp_req))
        .layer(TraceLayer::new_for_http());

    if !server_config.allowed_origins.is_empty() {
        app = app.layer(cors_layer(&server_config.allowed_origins));
    }

    app
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Startup line emitted once the listener is bound.
fn ready_message(port: u16) -> String {
    format!("App running on http://localhost:{port}")
}
// endregion: --- Server Setup

// endregion: --- Tests
