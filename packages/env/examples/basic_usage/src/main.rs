//! Basic usage example for `quid_env`
//!
//! This example demonstrates standard environment variable access:
//! - Reading variables as strings
//! - Falling back to defaults
//! - Parsing variables to concrete types
//! - Checking variable existence and handling errors

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use quid_env::standard::{var, var_exists, var_or, var_parse, var_parse_opt, var_parse_or};

fn main() {
    println!("=== quid_env Basic Usage Example ===\n");

    // Seed a few variables so the example has something to read. In real
    // usage these come from the shell.
    unsafe {
        std::env::set_var("QUID_WORKERS", "4");
        std::env::set_var("QUID_VERBOSE", "true");
    }

    println!("1. Reading variables as strings:");
    match var("QUID_WORKERS") {
        Ok(workers) => println!("   QUID_WORKERS = {workers}"),
        Err(e) => println!("   Error: {e}"),
    }

    println!("\n2. Falling back to defaults:");
    let label = var_or("QUID_LABEL", "unnamed");
    println!("   QUID_LABEL = {label} (using default)");

    println!("\n3. Parsing to concrete types:");
    match var_parse::<usize>("QUID_WORKERS") {
        Ok(workers) => println!("   QUID_WORKERS as usize = {workers}"),
        Err(e) => println!("   Error: {e}"),
    }
    let verbose: bool = var_parse_or("QUID_VERBOSE", false);
    println!("   QUID_VERBOSE as bool = {verbose}");
    let retries: u32 = var_parse_or("QUID_RETRIES", 3);
    println!("   QUID_RETRIES = {retries} (using default)");

    println!("\n4. Optional variables:");
    match var_parse_opt::<u64>("QUID_TIMEOUT_SECS") {
        Ok(Some(timeout)) => println!("   QUID_TIMEOUT_SECS = {timeout}"),
        Ok(None) => println!("   QUID_TIMEOUT_SECS not set"),
        Err(e) => println!("   Error: {e}"),
    }

    println!("\n5. Existence checks and error handling:");
    println!("   QUID_WORKERS exists: {}", var_exists("QUID_WORKERS"));
    println!("   QUID_MISSING exists: {}", var_exists("QUID_MISSING"));
    match var("QUID_MISSING") {
        Ok(value) => println!("   Found value: {value}"),
        Err(e) => println!("   Expected error: {e}"),
    }

    unsafe {
        std::env::set_var("QUID_BAD_NUMBER", "not-a-number");
    }
    match var_parse::<u32>("QUID_BAD_NUMBER") {
        Ok(value) => println!("   Parsed value: {value}"),
        Err(e) => println!("   Expected parse error: {e}"),
    }

    println!("\n=== Example Complete ===");
}
