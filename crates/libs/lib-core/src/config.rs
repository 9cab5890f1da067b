//! # Application Configuration
//!
//! Configuration is resolved from environment variables at startup. Every
//! value has a development default, so an empty environment yields a
//! server that listens on port 3005 and targets a local MongoDB instance.
//!
//! The resolved [`Config`] travels inside the application state rather
//! than through globals, so anything mounting routes sees its dependency
//! on the configuration explicitly.

use lib_utils::{get_env_or, get_env_parse_or};

/// Port the HTTP listener binds when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3005;

/// Connection string used when `MONGODB_URI` is unset.
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost/budget";

/// Tracing filter used when `LOG_LEVEL` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// HTTP listener port (`PORT`)
    pub port: u16,

    /// MongoDB connection string (`MONGODB_URI`)
    ///
    /// The database name is taken from the URI path; `connect` falls back
    /// to `budget` when the path is empty.
    pub mongodb_uri: String,

    /// Tracing filter directive (`LOG_LEVEL`)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparseable values fall back to their defaults, so this
    /// never fails.
    pub fn from_env() -> Self {
        Self {
            port: get_env_parse_or("PORT", DEFAULT_PORT),
            mongodb_uri: get_env_or("MONGODB_URI", DEFAULT_MONGODB_URI),
            log_level: get_env_or("LOG_LEVEL", DEFAULT_LOG_LEVEL),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    // `PORT` and `MONGODB_URI` are process-global, so tests touching them
    // must not interleave.
    fn env_lock() -> MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_port_defaults_to_3005_when_unset() {
        let _guard = env_lock();
        env::remove_var("PORT");

        let config = Config::from_env();

        assert_eq!(config.port, 3005);
    }

    #[test]
    fn test_port_resolves_from_environment() {
        let _guard = env_lock();
        env::set_var("PORT", "8080");

        let config = Config::from_env();
        env::remove_var("PORT");

        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_mongodb_uri_defaults_to_local_budget_db() {
        let _guard = env_lock();
        env::remove_var("MONGODB_URI");

        let config = Config::from_env();

        assert_eq!(config.mongodb_uri, "mongodb://localhost/budget");
    }

    #[test]
    fn test_mongodb_uri_resolves_from_environment() {
        let _guard = env_lock();
        env::set_var("MONGODB_URI", "mongodb://db.example.com/budget");

        let config = Config::from_env();
        env::remove_var("MONGODB_URI");

        assert_eq!(config.mongodb_uri, "mongodb://db.example.com/budget");
    }
}
// endregion: --- Tests
