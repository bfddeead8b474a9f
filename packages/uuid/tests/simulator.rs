#![cfg(feature = "simulator")]

use quid::Uuid;
use quid_random::Rng;

// Exactly one test may touch the shared simulator generator: its stream
// position is process-wide, so a second consumer would race this one.
#[test_log::test]
fn simulated_generation_reproduces_the_seeded_stream() {
    let seed = quid_env::var_parse_or("SIMULATOR_UUID_SEED", 12345u64);

    let reference = Rng::from_seed(seed);
    let expected = [
        Uuid::new_v4_with(&reference),
        Uuid::new_v4_with(&reference),
    ];

    let actual = [quid::simulator::new_v4(), quid::simulator::new_v4()];
    assert_eq!(actual, expected, "seed {seed} should pin the UUID stream");
    assert_eq!(actual[0].get_version_num(), 4);

    // The string helper keeps drawing from the same stream.
    let third = quid::simulator::new_v4_string();
    assert_eq!(third, Uuid::new_v4_with(&reference).to_string());
}
