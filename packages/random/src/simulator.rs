//! Deterministic simulation backend for reproducible random sequences.
//!
//! This module provides a deterministic random number generator suitable for
//! simulations that require reproducible random sequences. The initial seed
//! can be configured via the `SIMULATOR_SEED` environment variable; without it
//! a seed is drawn from entropy once and reused for the whole process.
//!
//! # Thread-local state
//!
//! Each thread owns its seed and generator so multi-threaded simulations stay
//! deterministic per thread. [`reset_seed`] advances a thread to the next seed
//! drawn from the shared initial generator.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "simulator")]
//! # {
//! use quid_random::simulator::rng;
//!
//! let random_gen = rng();
//! let value = random_gen.next_u32();
//! # }
//! ```

use std::{
    cell::{Cell, RefCell},
    sync::{Arc, LazyLock, Mutex},
};

use rand::{RngCore, SeedableRng, rngs::SmallRng};

use crate::GenericRng;

/// The simulator random number generator implementation.
///
/// Seeded explicitly or from the current thread seed, never from entropy, so
/// sequences are reproducible run to run.
#[derive(Clone)]
pub struct SimulatorRng(Arc<Mutex<SmallRng>>);

static INITIAL_SEED: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("SIMULATOR_SEED").ok().map_or_else(
        || SmallRng::from_os_rng().next_u64(),
        |x| x.parse::<u64>().unwrap(),
    )
});

static INITIAL_RNG: LazyLock<Mutex<SmallRng>> =
    LazyLock::new(|| Mutex::new(SmallRng::seed_from_u64(*INITIAL_SEED)));

/// Returns the initial seed used for simulation.
///
/// This seed is either read from the `SIMULATOR_SEED` environment variable
/// or generated from entropy once per process.
#[must_use]
pub fn initial_seed() -> u64 {
    *INITIAL_SEED
}

thread_local! {
    static SEED: Cell<u64> = Cell::new(*INITIAL_SEED);

    static RNG: RefCell<crate::Rng> = RefCell::new(crate::Rng::new());
}

/// Returns a clone of the thread-local random number generator for simulation.
///
/// Clones share state with the thread generator.
#[must_use]
pub fn rng() -> crate::Rng {
    RNG.with_borrow(Clone::clone)
}

/// Generates a new seed value from the shared initial generator.
///
/// # Panics
///
/// * If the initial generator mutex is poisoned
#[must_use]
pub fn gen_seed() -> u64 {
    INITIAL_RNG.lock().unwrap().next_u64()
}

/// Returns the current thread-local seed value.
#[must_use]
pub fn seed() -> u64 {
    SEED.get()
}

/// Advances the thread to a freshly generated seed and re-seeds its generator.
pub fn reset_seed() {
    let seed = gen_seed();
    log::debug!("reset_seed to seed={seed}");
    SEED.set(seed);
    RNG.with_borrow_mut(|x| *x = crate::Rng::from_seed(seed));
}

impl SimulatorRng {
    /// Creates a new simulator random number generator from an optional seed.
    ///
    /// If `None` is provided, the current thread-local seed is used.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self(Arc::new(Mutex::new(SmallRng::seed_from_u64(
            seed.unwrap_or_else(crate::simulator::seed),
        ))))
    }
}

impl GenericRng for SimulatorRng {
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

impl ::rand::RngCore for SimulatorRng {
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
