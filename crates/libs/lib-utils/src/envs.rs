//! # Environment Variables
//!
//! Utilities for reading environment variables with fallback defaults.

use std::env;
use std::str::FromStr;

/// Get an environment variable, falling back to a default when unset.
pub fn get_env_or(name: &'static str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get and parse an environment variable, falling back to a default when
/// the variable is unset or does not parse as `T`.
pub fn get_env_parse_or<T: FromStr>(name: &'static str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|val| val.parse::<T>().ok())
        .unwrap_or(default)
}

// region:    --- Tests
#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable name so tests can run in parallel
    // without stepping on shared process state.

    #[test]
    fn test_get_env_or_returns_default_when_unset() {
        assert_eq!(get_env_or("LIB_UTILS_TEST_UNSET", "fallback"), "fallback");
    }

    #[test]
    fn test_get_env_or_returns_value_when_set() {
        env::set_var("LIB_UTILS_TEST_SET", "value");
        assert_eq!(get_env_or("LIB_UTILS_TEST_SET", "fallback"), "value");
    }

    #[test]
    fn test_get_env_parse_or_parses_value() {
        env::set_var("LIB_UTILS_TEST_PARSE", "8080");
        assert_eq!(get_env_parse_or::<u16>("LIB_UTILS_TEST_PARSE", 3005), 8080);
    }

    #[test]
    fn test_get_env_parse_or_defaults_on_garbage() {
        env::set_var("LIB_UTILS_TEST_GARBAGE", "not-a-number");
        assert_eq!(get_env_parse_or::<u16>("LIB_UTILS_TEST_GARBAGE", 3005), 3005);
    }

    #[test]
    fn test_get_env_parse_or_defaults_when_unset() {
        assert_eq!(get_env_parse_or::<u16>("LIB_UTILS_TEST_MISSING", 3005), 3005);
    }
}
// endregion: --- Tests
