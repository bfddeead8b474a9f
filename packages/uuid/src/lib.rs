//! UUID generation utilities with optional deterministic simulation mode.
//!
//! This crate provides a 128-bit [`Uuid`] value type with random (version 4)
//! generation that can switch between entropy-backed generation (via the
//! `rand` feature) and deterministic generation (via the `simulator` feature)
//! for testing and simulation purposes.
//!
//! Parsing is lenient and total: any string produces a value, with non-hex
//! characters skipped and missing bytes padded with zeros, so identifiers can
//! be constructed from text without an error path.
//!
//! # Features
//!
//! * `rand` - Entropy-backed random UUID generation
//! * `simulator` - Deterministic UUID generation with a configurable seed
//! * `serde` - Serde serialization/deserialization support
//! * `uuid` - Conversions to and from the standard `uuid` crate
//!
//! # Examples
//!
//! ```
//! use quid::Uuid;
//!
//! // Generate a UUID (random or deterministic based on feature flags)
//! # #[cfg(any(feature = "rand", feature = "simulator"))]
//! # {
//! let id = quid::new_v4();
//! let id_string = quid::new_v4_string();
//!
//! // Use in data structures
//! assert!(!id.is_nil());
//! # }
//!
//! // Parse a UUID from a string; lenient parsing never fails
//! let parsed: Uuid = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
//! assert_eq!(parsed.to_string(), "550e8400-e29b-41d4-a716-446655440000");
//! ```

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod uuid;

pub use quid_random::GenericRng;

pub use self::uuid::Uuid;

#[cfg(feature = "rand")]
pub mod rand;

#[cfg(feature = "simulator")]
pub mod simulator;

#[allow(unused)]
macro_rules! impl_uuid {
    ($module:ident $(,)?) => {
        pub use $module::{new_v4, new_v4_string};
    };
}

#[cfg(feature = "simulator")]
impl_uuid!(simulator);

#[cfg(all(not(feature = "simulator"), feature = "rand"))]
impl_uuid!(rand);

impl Uuid {
    /// Generates a new random UUID v4.
    ///
    /// This is a convenience method that calls the appropriate backend
    /// based on feature flags (simulator or entropy-backed).
    ///
    /// # Examples
    ///
    /// ```
    /// # #[cfg(any(feature = "rand", feature = "simulator"))]
    /// # {
    /// use quid::Uuid;
    ///
    /// let uuid = Uuid::new_v4();
    /// assert_eq!(uuid.get_version_num(), 4);
    /// # }
    /// ```
    #[cfg(any(feature = "simulator", feature = "rand"))]
    #[must_use]
    pub fn new_v4() -> Self {
        new_v4()
    }
}
