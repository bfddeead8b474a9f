use quid::Uuid;

#[cfg(any(feature = "rand", feature = "simulator"))]
#[test_log::test]
fn generated_uuids_are_well_formed() {
    for _ in 0..100 {
        let uuid = quid::new_v4();
        assert_eq!(uuid.get_version_num(), 4, "version bits should read 4");
        assert_eq!(
            uuid.as_bytes()[8] & 0xc0,
            0x80,
            "variant bits should be 10 (RFC 4122)"
        );
        assert!(!uuid.is_nil());
    }
}

#[cfg(any(feature = "rand", feature = "simulator"))]
#[test_log::test]
fn generated_uuids_are_unique() {
    let mut uuids = std::collections::BTreeSet::new();
    for _ in 0..100 {
        let uuid = quid::new_v4();
        assert!(uuids.insert(uuid), "Generated duplicate UUID: {uuid}");
    }
    assert_eq!(uuids.len(), 100);
}

#[cfg(any(feature = "rand", feature = "simulator"))]
#[test_log::test]
fn generated_uuids_round_trip_through_every_text_form() {
    for _ in 0..10 {
        let uuid = quid::new_v4();
        assert_eq!(Uuid::parse_lossy(&uuid.simple()), uuid);
        assert_eq!(Uuid::parse_lossy(&uuid.hyphenated()), uuid);
        assert_eq!(Uuid::parse_lossy(&uuid.braced()), uuid);
        assert_eq!(uuid.hyphenated().parse::<Uuid>().unwrap(), uuid);
    }
}

#[cfg(any(feature = "rand", feature = "simulator"))]
#[test_log::test]
fn method_and_free_function_share_a_backend() {
    let from_method = Uuid::new_v4();
    let from_function = quid::new_v4();

    assert_eq!(from_method.get_version_num(), 4);
    assert_eq!(from_function.get_version_num(), 4);
    assert_ne!(
        from_method, from_function,
        "Consecutive draws come from one advancing stream"
    );
}

#[cfg(any(feature = "rand", feature = "simulator"))]
#[test_log::test]
fn new_v4_string_is_hyphenated() {
    let uuid_string = quid::new_v4_string();

    assert_eq!(uuid_string.len(), 36);
    assert_eq!(Uuid::parse_lossy(&uuid_string).to_string(), uuid_string);
}

#[cfg(any(feature = "rand", feature = "simulator"))]
#[test_log::test]
fn generated_batches_sort_consistently() {
    let mut ids: Vec<Uuid> = (0..50).map(|_| quid::new_v4()).collect();
    ids.sort();

    for pair in ids.windows(2) {
        assert!(pair[0] <= pair[1]);
        assert_eq!(pair[0] < pair[1], pair[0] != pair[1]);
    }
}

#[test_log::test]
fn identifiers_work_as_map_keys() {
    let mut labels = std::collections::BTreeMap::new();
    labels.insert(Uuid::nil(), "nil");
    labels.insert(Uuid::from_u128(0x550e_8400_e29b_41d4_a716_4466_5544_0000), "sample");
    labels.insert(Uuid::max(), "max");

    let key: Uuid = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
    assert_eq!(labels.get(&key), Some(&"sample"));
    assert_eq!(labels.get(&Uuid::nil()), Some(&"nil"));

    // BTreeMap iterates in key order: nil first, max last.
    let ordered: Vec<&str> = labels.values().copied().collect();
    assert_eq!(ordered, ["nil", "sample", "max"]);
}
