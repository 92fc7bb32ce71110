//! Payer pool construction.

use std::collections::BTreeSet;

use cbs_generate::{MAX_PAYER_NAME_DRAWS, PAYER_POOL_SIZE, PayerPool, seeded_rng};
use cbs_model::SynthError;

#[test]
fn initialize_builds_twenty_five_distinct_names() {
    let mut rng = seeded_rng(123);
    let pool = PayerPool::initialize(&mut rng).expect("pool");
    assert_eq!(pool.len(), PAYER_POOL_SIZE);
    let unique: BTreeSet<&String> = pool.names().iter().collect();
    assert_eq!(unique.len(), PAYER_POOL_SIZE);
    assert!(pool.names().iter().all(|name| !name.trim().is_empty()));
}

#[test]
fn initialize_is_reproducible() {
    let first = PayerPool::initialize(&mut seeded_rng(42)).unwrap();
    let second = PayerPool::initialize(&mut seeded_rng(42)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn choose_returns_pool_members() {
    let pool = PayerPool::from_names(["Acme Health", "Civic Care"]).unwrap();
    let mut rng = seeded_rng(4);
    let mut seen = BTreeSet::new();
    for _ in 0..200 {
        let name: &str = pool.choose(&mut rng);
        assert!(pool.names().iter().any(|candidate| candidate == name));
        seen.insert(name.to_string());
    }
    assert_eq!(seen.len(), 2);
}

#[test]
fn duplicates_are_skipped_in_first_seen_order() {
    let names = ["Alpha", "Beta", "Alpha", "Gamma", "Beta", "Delta"];
    let mut cursor = names.iter().cycle();
    let pool = PayerPool::from_source(&mut seeded_rng(0), 4, 10, |_| {
        cursor.next().unwrap().to_string()
    })
    .unwrap();
    assert_eq!(pool.names(), &["Alpha", "Beta", "Gamma", "Delta"]);
}

#[test]
fn exhausted_source_is_fatal() {
    let err = PayerPool::from_source(
        &mut seeded_rng(0),
        PAYER_POOL_SIZE,
        MAX_PAYER_NAME_DRAWS,
        |_| "Only Payer Inc".to_string(),
    )
    .unwrap_err();
    match err {
        SynthError::PayerPoolExhausted {
            unique,
            required,
            attempts,
        } => {
            assert_eq!(unique, 1);
            assert_eq!(required, PAYER_POOL_SIZE);
            assert_eq!(attempts, MAX_PAYER_NAME_DRAWS);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn from_names_deduplicates() {
    let pool = PayerPool::from_names(["Acme", "Acme", "Zenith"]).unwrap();
    assert_eq!(pool.names(), &["Acme", "Zenith"]);
}

#[test]
fn from_names_rejects_empty_list() {
    let names: [&str; 0] = [];
    assert!(PayerPool::from_names(names).is_err());
}

#[test]
fn choose_returns_pool_member() {
    let pool = PayerPool::from_names(["Acme", "Zenith"]).unwrap();
    let mut rng = seeded_rng(8);
    for _ in 0..50 {
        let name = pool.choose(&mut rng);
        assert!(name == "Acme" || name == "Zenith");
    }
}
