#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Basic usage example for `quid`
//!
//! This example demonstrates the core functionality of the `quid` library:
//! - Generating random (version 4) identifiers
//! - Formatting identifiers as simple, hyphenated, and braced strings
//! - Lenient parsing that never fails
//! - Ordering identifiers and using them as collection keys
//! - Injecting a seeded generator for reproducible identifiers

use std::collections::BTreeMap;

use quid::Uuid;
use quid_random::Rng;

fn main() {
    println!("=== quid Basic Usage Example ===\n");

    println!("1. Generating identifiers:");
    let id = Uuid::new_v4();
    println!("   Generated: {id}");
    println!("   Version:   {}", id.get_version_num());
    println!("   As string: {}", quid::new_v4_string());

    println!("\n2. Text forms:");
    let sample = Uuid::from_u128(0x550e_8400_e29b_41d4_a716_4466_5544_0000);
    println!("   simple:     {}", sample.simple());
    println!("   hyphenated: {}", sample.hyphenated());
    println!("   braced:     {}", sample.braced());

    println!("\n3. Lenient parsing (never fails):");
    let from_canonical = Uuid::parse_lossy("550e8400-e29b-41d4-a716-446655440000");
    println!("   Canonical input:  {from_canonical}");

    let from_messy = Uuid::parse_lossy("  {550E8400-e29b-41d4 / a716:446655440000}  ");
    println!("   Messy input:      {from_messy}");
    assert_eq!(from_canonical, from_messy);

    let from_short = Uuid::parse_lossy("1234");
    println!("   Short input:      {from_short} (zero padded)");

    let from_garbage = Uuid::parse_lossy("nothing to show: ?!?!");
    println!("   Garbage input:    {from_garbage} (no hex digits, so nil)");
    assert!(from_garbage.is_nil());

    println!("\n4. Ordering and collections:");
    let mut labels = BTreeMap::new();
    labels.insert(Uuid::nil(), "nil");
    labels.insert(sample, "sample");
    labels.insert(Uuid::max(), "max");
    for (key, label) in &labels {
        println!("   {key} => {label}");
    }

    println!("\n5. Reproducible identifiers from a seeded source:");
    let first = Uuid::new_v4_with(&Rng::from_seed(12345));
    let second = Uuid::new_v4_with(&Rng::from_seed(12345));
    println!("   First:  {first}");
    println!("   Second: {second}");
    assert_eq!(first, second);
    println!("   Identical seeds produce identical identifiers");

    println!("\n=== Example Complete ===");
}
