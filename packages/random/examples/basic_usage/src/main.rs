#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Basic usage example for `quid_random`
//!
//! This example demonstrates the core functionality of the `quid_random`
//! library:
//! - Creating entropy-seeded and explicitly seeded generators
//! - Generating random integers
//! - Filling byte buffers
//! - Sharing one generator across clones

use quid_random::{Rng, rand::rng};

fn main() {
    println!("=== quid_random Basic Usage Example ===\n");

    println!("1. Entropy-Seeded Generation:");
    entropy_seeded_generation();
    println!();

    println!("2. Seeded Generation (Reproducible):");
    seeded_generation();
    println!();

    println!("3. Filling Byte Buffers:");
    buffer_filling();
    println!();

    println!("4. Sharing the Process-Wide Generator:");
    shared_generator();
    println!();

    println!("=== Example Complete ===");
}

/// Demonstrates generating values from a fresh entropy-seeded generator
fn entropy_seeded_generation() {
    let rng = Rng::new();

    let value_u32 = rng.next_u32();
    let value_u64 = rng.next_u64();

    println!("  Random u32: {value_u32}");
    println!("  Random u64: {value_u64}");
}

/// Demonstrates seeded generation for reproducible results
fn seeded_generation() {
    let seed = 42_u64;
    let rng1 = Rng::from_seed(seed);
    let rng2 = Rng::from_seed(seed);

    let values1: Vec<u64> = (0..3).map(|_| rng1.next_u64()).collect();
    let values2: Vec<u64> = (0..3).map(|_| rng2.next_u64()).collect();

    println!("  Generator 1 (seed={seed}): {values1:?}");
    println!("  Generator 2 (seed={seed}): {values2:?}");

    assert_eq!(values1, values2);
    println!("  Both generators produced the same sequence");
}

/// Demonstrates filling a byte buffer with random data
fn buffer_filling() {
    let rng = Rng::from_seed(7);

    let mut bytes = [0_u8; 8];
    rng.fill_bytes(&mut bytes);

    print!("  8 random bytes:");
    for byte in bytes {
        print!(" {byte:02x}");
    }
    println!();
}

/// Demonstrates that clones of the shared generator advance one stream
fn shared_generator() {
    let first = rng();
    let second = rng();

    let a = first.next_u64();
    let b = second.next_u64();

    println!("  Draw from first clone:  {a}");
    println!("  Draw from second clone: {b}");
    println!("  The clones share state, so the draws differ");
}
