//! Standard environment provider backed by `std::env`.
//!
//! This is the provider used in production builds: every lookup goes straight
//! to the real process environment.

use crate::{EnvError, EnvProvider, Result};
use std::collections::BTreeMap;

/// Standard environment provider that uses `std::env`
pub struct StandardEnv;

impl StandardEnv {
    /// Creates a new standard environment provider
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StandardEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvProvider for StandardEnv {
    fn var(&self, name: &str) -> Result<String> {
        std::env::var(name).map_err(|_| EnvError::NotFound(name.to_string()))
    }

    fn vars(&self) -> BTreeMap<String, String> {
        std::env::vars().collect()
    }
}

static PROVIDER: StandardEnv = StandardEnv::new();

/// Get an environment variable as a string
///
/// # Errors
///
/// * If the environment variable is not found
pub fn var(name: &str) -> Result<String> {
    PROVIDER.var(name)
}

/// Get an environment variable with a default value
pub fn var_or(name: &str, default: &str) -> String {
    PROVIDER.var_or(name, default)
}

/// Get an environment variable parsed as a specific type
///
/// # Errors
///
/// * If the environment variable is not found
/// * If the environment variable value cannot be parsed to the target type
pub fn var_parse<T>(name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    PROVIDER.var_parse(name)
}

/// Get an environment variable parsed with a default value
pub fn var_parse_or<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    PROVIDER.var_parse_or(name, default)
}

/// Get an optional environment variable parsed as a specific type
///
/// # Errors
///
/// * If the environment variable exists but cannot be parsed to the target type
pub fn var_parse_opt<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    PROVIDER.var_parse_opt(name)
}

/// Check if an environment variable exists
pub fn var_exists(name: &str) -> bool {
    PROVIDER.var_exists(name)
}

/// Get all environment variables
pub fn vars() -> BTreeMap<String, String> {
    PROVIDER.vars()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(name: &str, value: &str) {
        // SAFETY: tests touching the process environment run serially
        unsafe {
            std::env::set_var(name, value);
        }
    }

    fn remove(name: &str) {
        // SAFETY: tests touching the process environment run serially
        unsafe {
            std::env::remove_var(name);
        }
    }

    #[test_log::test]
    #[serial_test::serial]
    fn var_reads_the_process_environment() {
        set("QUID_ENV_TEST_VAR", "hello");
        assert_eq!(var("QUID_ENV_TEST_VAR").unwrap(), "hello");
        remove("QUID_ENV_TEST_VAR");
        assert!(matches!(
            var("QUID_ENV_TEST_VAR"),
            Err(EnvError::NotFound(_))
        ));
    }

    #[test_log::test]
    #[serial_test::serial]
    fn var_or_falls_back_when_missing() {
        remove("QUID_ENV_TEST_MISSING");
        assert_eq!(var_or("QUID_ENV_TEST_MISSING", "fallback"), "fallback");
    }

    #[test_log::test]
    #[serial_test::serial]
    fn var_parse_reports_parse_failures() {
        set("QUID_ENV_TEST_PORT", "8080");
        assert_eq!(var_parse::<u16>("QUID_ENV_TEST_PORT").unwrap(), 8080);

        set("QUID_ENV_TEST_PORT", "not-a-number");
        assert!(matches!(
            var_parse::<u16>("QUID_ENV_TEST_PORT"),
            Err(EnvError::ParseError(..))
        ));
        remove("QUID_ENV_TEST_PORT");
    }

    #[test_log::test]
    #[serial_test::serial]
    fn var_parse_opt_distinguishes_missing_from_malformed() {
        remove("QUID_ENV_TEST_OPT");
        assert_eq!(var_parse_opt::<u64>("QUID_ENV_TEST_OPT").unwrap(), None);

        set("QUID_ENV_TEST_OPT", "42");
        assert_eq!(var_parse_opt::<u64>("QUID_ENV_TEST_OPT").unwrap(), Some(42));

        set("QUID_ENV_TEST_OPT", "nope");
        assert!(var_parse_opt::<u64>("QUID_ENV_TEST_OPT").is_err());
        remove("QUID_ENV_TEST_OPT");
    }

    #[test_log::test]
    #[serial_test::serial]
    fn var_exists_tracks_the_environment() {
        set("QUID_ENV_TEST_EXISTS", "1");
        assert!(var_exists("QUID_ENV_TEST_EXISTS"));
        assert!(vars().contains_key("QUID_ENV_TEST_EXISTS"));
        remove("QUID_ENV_TEST_EXISTS");
        assert!(!var_exists("QUID_ENV_TEST_EXISTS"));
    }
}
