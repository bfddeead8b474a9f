//! Simulator environment for testing.
//!
//! This module provides a configurable environment with deterministic defaults
//! for testing. It maintains its own set of environment variables separate from
//! the system environment, allowing for controlled and reproducible tests.
//!
//! The simulator initializes from a snapshot of the real environment and then
//! overlays deterministic defaults for the simulation seed variables.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "simulator")]
//! # {
//! use quid_env::simulator::{set_var, var};
//!
//! set_var("QUID_DOC_EXAMPLE", "on");
//! assert_eq!(var("QUID_DOC_EXAMPLE").unwrap(), "on");
//! # }
//! ```

use crate::{EnvError, EnvProvider, Result};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Simulator environment provider with configurable variables
pub struct SimulatorEnv {
    vars: Arc<RwLock<BTreeMap<String, String>>>,
}

impl SimulatorEnv {
    /// Creates a new simulator environment provider with default values
    ///
    /// Initializes from a snapshot of the real environment variables, then
    /// overlays deterministic defaults for the simulation seeds.
    #[must_use]
    pub fn new() -> Self {
        let mut vars: BTreeMap<String, String> = std::env::vars().collect();

        Self::set_simulator_defaults(&mut vars);

        Self {
            vars: Arc::new(RwLock::new(vars)),
        }
    }

    /// Set a variable for testing
    ///
    /// # Panics
    ///
    /// * If the internal `RwLock` is poisoned
    pub fn set_var(&self, name: &str, value: &str) {
        self.vars
            .write()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }

    /// Remove a variable
    ///
    /// # Panics
    ///
    /// * If the internal `RwLock` is poisoned
    pub fn remove_var(&self, name: &str) {
        self.vars.write().unwrap().remove(name);
    }

    /// Clear all variables
    ///
    /// # Panics
    ///
    /// * If the internal `RwLock` is poisoned
    pub fn clear(&self) {
        self.vars.write().unwrap().clear();
    }

    /// Reset to defaults
    ///
    /// # Panics
    ///
    /// * If the internal `RwLock` is poisoned
    pub fn reset(&self) {
        let mut vars = self.vars.write().unwrap();
        *vars = std::env::vars().collect();
        Self::set_simulator_defaults(&mut vars);
    }

    fn set_simulator_defaults(vars: &mut BTreeMap<String, String>) {
        // Deterministic seeds for reproducible simulation runs
        vars.entry("SIMULATOR_SEED".to_string())
            .or_insert_with(|| "12345".to_string());
        vars.entry("SIMULATOR_UUID_SEED".to_string())
            .or_insert_with(|| "54321".to_string());

        log::debug!(
            "Set simulator environment defaults: {} variables",
            vars.len()
        );
    }
}

impl Default for SimulatorEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvProvider for SimulatorEnv {
    /// Get an environment variable as a string
    ///
    /// # Errors
    ///
    /// * If the environment variable is not found
    ///
    /// # Panics
    ///
    /// * If the internal `RwLock` is poisoned
    fn var(&self, name: &str) -> Result<String> {
        self.vars
            .read()
            .unwrap()
            .get(name)
            .cloned()
            .ok_or_else(|| EnvError::NotFound(name.to_string()))
    }

    /// Get all environment variables
    ///
    /// # Panics
    ///
    /// * If the internal `RwLock` is poisoned
    fn vars(&self) -> BTreeMap<String, String> {
        self.vars.read().unwrap().clone()
    }
}

static PROVIDER: std::sync::LazyLock<SimulatorEnv> = std::sync::LazyLock::new(SimulatorEnv::new);

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

/// Set a variable in the shared simulator environment
pub fn set_var(name: &str, value: &str) {
    PROVIDER.set_var(name, value);
}

/// Remove a variable from the shared simulator environment
pub fn remove_var(name: &str) {
    PROVIDER.remove_var(name);
}

/// Clear the shared simulator environment
pub fn clear() {
    PROVIDER.clear();
}

/// Reset the shared simulator environment to defaults
pub fn reset() {
    PROVIDER.reset();
}

#[cfg(test)]
mod tests {
    use super::*;

    // Constructing a `SimulatorEnv` snapshots the process environment, so
    // these serialize against the `standard` tests that mutate it.

    #[test_log::test]
    #[serial_test::serial]
    fn new_seeds_deterministic_defaults() {
        let env = SimulatorEnv::new();
        assert_eq!(env.var("SIMULATOR_SEED").unwrap(), "12345");
        assert_eq!(env.var("SIMULATOR_UUID_SEED").unwrap(), "54321");
    }

    #[test_log::test]
    #[serial_test::serial]
    fn set_and_remove_are_isolated_from_the_process_environment() {
        let env = SimulatorEnv::new();
        env.set_var("QUID_SIM_ONLY", "yes");
        assert_eq!(env.var("QUID_SIM_ONLY").unwrap(), "yes");
        assert!(std::env::var("QUID_SIM_ONLY").is_err());

        env.remove_var("QUID_SIM_ONLY");
        assert!(matches!(
            env.var("QUID_SIM_ONLY"),
            Err(EnvError::NotFound(_))
        ));
    }

    #[test_log::test]
    #[serial_test::serial]
    fn reset_restores_defaults_after_clear() {
        let env = SimulatorEnv::new();
        env.clear();
        assert!(env.var("SIMULATOR_SEED").is_err());

        env.reset();
        assert_eq!(env.var("SIMULATOR_SEED").unwrap(), "12345");
    }

    #[test_log::test]
    #[serial_test::serial]
    fn parse_combinators_read_simulated_values() {
        let env = SimulatorEnv::new();
        env.set_var("QUID_SIM_PORT", "9090");
        assert_eq!(env.var_parse::<u16>("QUID_SIM_PORT").unwrap(), 9090);
        assert_eq!(env.var_parse_or::<u64>("SIMULATOR_UUID_SEED", 0), 54321);
        assert!(env.var_exists("SIMULATOR_SEED"));
        assert!(env.vars().len() >= 2);
    }

    #[test_log::test]
    #[serial_test::serial]
    fn shared_provider_round_trips_variables() {
        set_var("QUID_SIM_SHARED", "1");
        assert!(var_exists("QUID_SIM_SHARED"));
        assert_eq!(var_or("QUID_SIM_SHARED", "0"), "1");
        remove_var("QUID_SIM_SHARED");
        assert!(!var_exists("QUID_SIM_SHARED"));
    }
}
