//! Environment variable access with swappable providers.
//!
//! This crate abstracts environment variable lookup behind the [`EnvProvider`]
//! trait so that code can read configuration the same way whether it is backed
//! by the real process environment (the `std` feature) or by a deterministic
//! in-memory environment for testing and simulation (the `simulator` feature).
//!
//! The crate root re-exports the free functions of the active provider; the
//! simulator takes precedence when both features are enabled.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(any(feature = "std", feature = "simulator"))]
//! # {
//! use quid_env::var_parse_or;
//!
//! let port: u16 = var_parse_or("QUID_EXAMPLE_PORT", 8080);
//! assert_eq!(port, 8080);
//! # }
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;

use thiserror::Error;

#[cfg(feature = "std")]
pub mod standard;

#[cfg(feature = "simulator")]
pub mod simulator;

/// An error that occurred while reading an environment variable.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The environment variable is not set.
    #[error("Environment variable not found: {0}")]
    NotFound(String),
    /// The environment variable is set but its value failed to parse.
    #[error("Failed to parse environment variable {0}: {1}")]
    ParseError(String, String),
}

pub type Result<T, E = EnvError> = std::result::Result<T, E>;

/// A source of environment variables.
///
/// Implementors only supply [`var`](EnvProvider::var) and
/// [`vars`](EnvProvider::vars); the parsing and defaulting combinators are
/// provided.
pub trait EnvProvider {
    /// Get an environment variable as a string
    ///
    /// # Errors
    ///
    /// * If the environment variable is not found
    fn var(&self, name: &str) -> Result<String>;

    /// Get all environment variables
    fn vars(&self) -> BTreeMap<String, String>;

    /// Get an environment variable with a default value
    fn var_or(&self, name: &str, default: &str) -> String {
        self.var(name).unwrap_or_else(|_| default.to_string())
    }

    /// Get an environment variable parsed as a specific type
    ///
    /// # Errors
    ///
    /// * If the environment variable is not found
    /// * If the environment variable value cannot be parsed to the target type
    fn var_parse<T>(&self, name: &str) -> Result<T>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.var(name)?
            .parse()
            .map_err(|e: T::Err| EnvError::ParseError(name.to_string(), e.to_string()))
    }

    /// Get an environment variable parsed with a default value
    fn var_parse_or<T>(&self, name: &str, default: T) -> T
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        self.var_parse(name).unwrap_or(default)
    }

    /// Get an optional environment variable parsed as a specific type
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` if the variable exists and parses successfully
    /// * `Ok(None)` if the variable doesn't exist
    /// * `Err(EnvError::ParseError)` if the variable exists but can't be parsed
    ///
    /// # Errors
    ///
    /// * If the environment variable exists but cannot be parsed to the target type
    fn var_parse_opt<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match self.var(name) {
            Ok(value) => value
                .parse()
                .map(Some)
                .map_err(|e: T::Err| EnvError::ParseError(name.to_string(), e.to_string())),
            Err(_) => Ok(None),
        }
    }

    /// Check if an environment variable exists
    fn var_exists(&self, name: &str) -> bool {
        self.var(name).is_ok()
    }
}

#[allow(unused)]
macro_rules! impl_env {
    ($module:ident $(,)?) => {
        pub use $module::{var, var_exists, var_or, var_parse, var_parse_opt, var_parse_or, vars};
    };
}

#[cfg(feature = "simulator")]
impl_env!(simulator);

#[cfg(all(not(feature = "simulator"), feature = "std"))]
impl_env!(standard);
