#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Simulator testing example for `quid_env`
//!
//! This example demonstrates using `quid_env` in simulator mode for testing.
//! The simulator provides:
//! - Deterministic seed defaults for reproducible runs
//! - Setting and removing variables without touching the process environment
//! - Reset functionality for test isolation

#[cfg(feature = "simulator")]
use quid_env::simulator::{clear, remove_var, reset, set_var};
#[cfg(feature = "simulator")]
use quid_env::{var, var_exists, var_parse};

#[cfg(not(feature = "simulator"))]
fn main() {
    println!("=== quid_env Simulator Testing Example ===\n");
    println!("Simulator mode is not enabled, so there is nothing to show.");
    println!("\nRun in simulator mode with:");
    println!(
        "cargo run --manifest-path packages/env/examples/simulator_testing/Cargo.toml --features simulator"
    );
}

#[cfg(feature = "simulator")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== quid_env Simulator Testing Example ===\n");

    println!("1. Deterministic defaults:");
    let seed: u64 = var_parse("SIMULATOR_SEED")?;
    println!("   SIMULATOR_SEED: {seed}");

    let uuid_seed: u64 = var_parse("SIMULATOR_UUID_SEED")?;
    println!("   SIMULATOR_UUID_SEED: {uuid_seed}");

    println!("\n2. Setting variables without touching the process environment:");
    set_var("TEST_ENDPOINT", "http://localhost:8080");
    println!("   TEST_ENDPOINT: {}", var("TEST_ENDPOINT")?);
    println!(
        "   Process env untouched: {:?}",
        std::env::var("TEST_ENDPOINT").ok()
    );

    remove_var("TEST_ENDPOINT");
    println!(
        "   After remove_var, exists: {}",
        var_exists("TEST_ENDPOINT")
    );

    println!("\n3. Test isolation with reset:");
    set_var("SIMULATOR_UUID_SEED", "99");
    let overridden: u64 = var_parse("SIMULATOR_UUID_SEED")?;
    println!("   Overridden seed: {overridden}");

    reset();
    let restored: u64 = var_parse("SIMULATOR_UUID_SEED")?;
    println!("   After reset: {restored}");

    println!("\n4. Clearing every variable:");
    clear();
    println!(
        "   After clear, SIMULATOR_SEED exists: {}",
        var_exists("SIMULATOR_SEED")
    );

    reset();
    println!(
        "   After reset, SIMULATOR_SEED exists: {}",
        var_exists("SIMULATOR_SEED")
    );

    println!("\n=== Example Complete ===");

    Ok(())
}
