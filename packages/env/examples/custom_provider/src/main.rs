//! Custom provider example for `quid_env`
//!
//! This example demonstrates implementing the `EnvProvider` trait for custom
//! variable sources:
//! - A fixture provider with predefined values for tests
//! - A layered provider that falls back from one source to another

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;

use quid_env::{EnvError, EnvProvider, Result};

/// An in-memory provider with a fixed set of variables.
struct FixtureEnv {
    vars: BTreeMap<String, String>,
}

impl FixtureEnv {
    fn new(entries: &[(&str, &str)]) -> Self {
        Self {
            vars: entries
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
        }
    }
}

impl EnvProvider for FixtureEnv {
    fn var(&self, name: &str) -> Result<String> {
        self.vars
            .get(name)
            .cloned()
            .ok_or_else(|| EnvError::NotFound(name.to_string()))
    }

    fn vars(&self) -> BTreeMap<String, String> {
        self.vars.clone()
    }
}

/// A provider that consults `overrides` first and `base` second.
struct LayeredEnv<A: EnvProvider, B: EnvProvider> {
    overrides: A,
    base: B,
}

impl<A: EnvProvider, B: EnvProvider> EnvProvider for LayeredEnv<A, B> {
    fn var(&self, name: &str) -> Result<String> {
        self.overrides.var(name).or_else(|_| self.base.var(name))
    }

    fn vars(&self) -> BTreeMap<String, String> {
        let mut all = self.base.vars();
        all.extend(self.overrides.vars());
        all
    }
}

fn main() {
    println!("=== quid_env Custom Provider Example ===\n");

    println!("1. Fixture provider:");
    let fixture = FixtureEnv::new(&[
        ("SERVICE_NAME", "quid-demo"),
        ("SERVICE_PORT", "8080"),
        ("SERVICE_VERBOSE", "true"),
    ]);
    println!("   SERVICE_NAME = {}", fixture.var_or("SERVICE_NAME", "?"));
    println!(
        "   SERVICE_PORT as u16 = {}",
        fixture.var_parse_or::<u16>("SERVICE_PORT", 0)
    );
    println!(
        "   SERVICE_VERBOSE as bool = {}",
        fixture.var_parse_or("SERVICE_VERBOSE", false)
    );
    println!(
        "   SERVICE_REGION = {} (not set, default used)",
        fixture.var_or("SERVICE_REGION", "local")
    );

    println!("\n2. Layered provider (overrides win):");
    let layered = LayeredEnv {
        overrides: FixtureEnv::new(&[("SERVICE_PORT", "9090")]),
        base: fixture,
    };
    println!(
        "   SERVICE_PORT = {} (from overrides)",
        layered.var_or("SERVICE_PORT", "?")
    );
    println!(
        "   SERVICE_NAME = {} (from base)",
        layered.var_or("SERVICE_NAME", "?")
    );
    println!("   All visible variables: {:?}", layered.vars().keys());

    println!("\n3. Errors still surface through the provided methods:");
    match layered.var("SERVICE_MISSING") {
        Ok(value) => println!("   Found value: {value}"),
        Err(e) => println!("   Expected error: {e}"),
    }

    println!("\n=== Example Complete ===");
}
