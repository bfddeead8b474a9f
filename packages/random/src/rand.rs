//! Standard random number generation backend using `rand::rngs::SmallRng`.
//!
//! This is the production backend: generators are seeded from OS entropy
//! unless an explicit seed is supplied, and a process-wide shared generator
//! is available through [`rng`].
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "rand")]
//! # {
//! use quid_random::rand::rng;
//!
//! let random_gen = rng();
//! let value = random_gen.next_u32();
//! # }
//! ```

use std::sync::{Arc, Mutex};

use rand::{RngCore, SeedableRng, rngs::SmallRng};

/// Re-export of the `rand` crate for access to distribution types and traits.
///
/// This allows users to reach `rand`'s types without adding `rand` as a
/// separate dependency.
pub use rand;

use crate::GenericRng;

/// The process-wide random number generator instance.
pub static RNG: std::sync::LazyLock<crate::Rng> = std::sync::LazyLock::new(crate::Rng::new);

/// Returns a clone of the process-wide random number generator.
///
/// Clones share state, so every caller draws from one entropy-seeded stream.
#[must_use]
pub fn rng() -> crate::Rng {
    RNG.clone()
}

/// The underlying random number generator implementation using `rand::rngs::SmallRng`.
#[derive(Clone)]
pub struct RandRng(Arc<Mutex<SmallRng>>);

impl RandRng {
    /// Creates a new random number generator from an optional seed.
    ///
    /// If `None` is provided, the generator is seeded from OS entropy.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self(Arc::new(Mutex::new(
            seed.map_or_else(SmallRng::from_os_rng, SmallRng::seed_from_u64),
        )))
    }
}

impl GenericRng for RandRng {
    /// # Panics
    ///
    /// * If the internal mutex is poisoned
    fn next_u32(&self) -> u32 {
        self.0.lock().unwrap().next_u32()
    }

    /// # Panics
    ///
    /// * If the internal mutex is poisoned
    fn next_u64(&self) -> u64 {
        self.0.lock().unwrap().next_u64()
    }

    /// # Panics
    ///
    /// * If the internal mutex is poisoned
    fn fill_bytes(&self, dest: &mut [u8]) {
        self.0.lock().unwrap().fill_bytes(dest);
    }
}

impl ::rand::RngCore for RandRng {
    fn next_u32(&mut self) -> u32 {
        <Self as GenericRng>::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        <Self as GenericRng>::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        <Self as GenericRng>::fill_bytes(self, dest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn seeded_generators_reproduce_the_same_sequence() {
        let rng1 = RandRng::new(Some(12345));
        let rng2 = RandRng::new(Some(12345));

        let values1: Vec<u32> = (0..10).map(|_| rng1.next_u32()).collect();
        let values2: Vec<u32> = (0..10).map(|_| rng2.next_u32()).collect();

        assert_eq!(
            values1, values2,
            "Same seed should produce same sequence in rand backend"
        );
    }

    #[test_log::test]
    fn different_seeds_produce_different_sequences() {
        let rng1 = RandRng::new(Some(12345));
        let rng2 = RandRng::new(Some(54321));

        let values1: Vec<u64> = (0..10).map(|_| rng1.next_u64()).collect();
        let values2: Vec<u64> = (0..10).map(|_| rng2.next_u64()).collect();

        assert_ne!(
            values1, values2,
            "Different seeds should produce different sequences"
        );
    }

    #[test_log::test]
    fn entropy_seeded_generator_produces_values() {
        let rng = RandRng::new(None);

        let _value = rng.next_u32();
        let _value = rng.next_u64();
    }

    #[test_log::test]
    fn fill_bytes_fills_the_whole_buffer() {
        let rng = RandRng::new(Some(42));
        let mut buffer = [0_u8; 32];

        rng.fill_bytes(&mut buffer);

        assert!(
            buffer.iter().any(|&x| x != 0),
            "Fill should produce non-zero bytes"
        );
    }

    #[test_log::test]
    fn global_rng_clones_share_state() {
        let rng1 = rng();
        let rng2 = rng();

        let val1 = rng1.next_u64();
        let val2 = rng2.next_u64();

        assert_ne!(val1, val2, "Clones draw from one shared stream");
    }

    #[test_log::test]
    fn rng_core_interface_matches_generic_rng() {
        use ::rand::RngCore;

        let mut rng = RandRng::new(Some(7));
        let expected = RandRng::new(Some(7));

        assert_eq!(RngCore::next_u32(&mut rng), expected.next_u32());
        assert_eq!(RngCore::next_u64(&mut rng), expected.next_u64());

        let mut buffer = [0_u8; 16];
        RngCore::fill_bytes(&mut rng, &mut buffer);
        let mut expected_buffer = [0_u8; 16];
        expected.fill_bytes(&mut expected_buffer);
        assert_eq!(buffer, expected_buffer);
    }
}
