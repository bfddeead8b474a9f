//! Random number generation with swappable backends.
//!
//! This crate defines [`GenericRng`], a minimal shareable random-bit source,
//! and selects a concrete [`Rng`] implementation by feature flag:
//!
//! * `rand` - entropy-seeded generation backed by `rand::rngs::SmallRng`
//! * `simulator` - deterministic generation for reproducible simulation runs
//!
//! The simulator takes precedence when both features are enabled, so a whole
//! dependency tree can be flipped into deterministic mode with one feature.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

#[cfg(feature = "rand")]
pub mod rand;

#[cfg(feature = "simulator")]
pub mod simulator;

/// A shareable source of random bits.
///
/// Implementations serialize access internally, so a single instance can be
/// consulted from multiple threads without external locking.
pub trait GenericRng: Send + Sync {
    fn next_u32(&self) -> u32;

    fn next_u64(&self) -> u64;

    /// Fill `dest` with random bytes
    fn fill_bytes(&self, dest: &mut [u8]);
}

#[derive(Clone)]
pub struct RngWrapper<R: GenericRng>(R);

impl<R: GenericRng> GenericRng for RngWrapper<R> {
    #[inline]
    fn next_u32(&self) -> u32 {
        self.0.next_u32()
    }

    #[inline]
    fn next_u64(&self) -> u64 {
        self.0.next_u64()
    }

    #[inline]
    fn fill_bytes(&self, dest: &mut [u8]) {
        self.0.fill_bytes(dest);
    }
}

#[allow(unused)]
macro_rules! impl_rng {
    ($type:ty $(,)?) => {
        pub type Rng = RngWrapper<$type>;

        impl Default for Rng {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Rng {
            #[must_use]
            pub fn new() -> Self {
                Self::from_seed(None)
            }

            pub fn from_seed<S: Into<Option<u64>>>(seed: S) -> Self {
                Self(<$type>::new(seed.into()))
            }

            #[inline]
            #[must_use]
            pub fn next_u32(&self) -> u32 {
                <Self as GenericRng>::next_u32(self)
            }

            #[inline]
            #[must_use]
            pub fn next_u64(&self) -> u64 {
                <Self as GenericRng>::next_u64(self)
            }

            #[inline]
            pub fn fill_bytes(&self, dest: &mut [u8]) {
                <Self as GenericRng>::fill_bytes(self, dest);
            }
        }
    };
}

#[cfg(feature = "simulator")]
impl_rng!(simulator::SimulatorRng);

#[cfg(all(not(feature = "simulator"), feature = "rand"))]
impl_rng!(rand::RandRng);
