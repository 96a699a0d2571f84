//! Integration tests for the quote service library.

use mindful_quotes::{QuoteService, ServiceConfig, FALLBACK_QUOTE};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::thread;

#[test]
fn test_basic_workflow() {
    let service = QuoteService::default();

    // The built-in collection is fixed at 25 entries
    assert_eq!(service.quote_count(), 25);

    // Listing matches the count and preserves insertion order
    let quotes = service.all_quotes();
    assert_eq!(quotes.len(), 25);
    assert_eq!(
        quotes.first().map(String::as_str),
        Some("🧘 Take a breath. This moment is all there is.")
    );
    assert_eq!(
        quotes.last().map(String::as_str),
        Some("🎋 Simplicity is the ultimate sophistication.")
    );

    // A pick is always a member of the collection
    let quote = service.random_quote();
    assert!(quotes.contains(&quote));
}

#[test]
fn test_thousand_picks_are_all_members() {
    let service = QuoteService::default();
    let members: HashSet<String> = service.all_quotes().into_iter().collect();

    for _ in 0..1000 {
        assert!(members.contains(&service.random_quote()));
    }
}

#[test]
fn test_picks_are_approximately_uniform() {
    // Seeded so the test is reproducible run to run
    let service = QuoteService::new(ServiceConfig::new().seed(0xC0FFEE).build());
    let k = service.quote_count();
    assert_eq!(k, 25);

    let trials = 10_000;
    let mut counts: HashMap<String, u32> = HashMap::new();
    for _ in 0..trials {
        *counts.entry(service.random_quote()).or_default() += 1;
    }

    // Every quote should appear, each near trials/k. The tolerance is
    // generous: +/- 50% of the expected frequency.
    assert_eq!(counts.len(), k);
    let expected = (trials / k as u32) as i64;
    for (quote, count) in counts {
        let delta = (count as i64 - expected).abs();
        assert!(
            delta < expected / 2,
            "quote {:?} picked {} times, expected about {}",
            quote,
            count,
            expected
        );
    }
}

#[test]
fn test_listing_is_a_defensive_copy() {
    let service = QuoteService::default();

    let mut copy = service.all_quotes();
    copy[0] = "tampered".to_string();
    copy.push("appended".to_string());
    copy.truncate(3);

    // None of that is visible to the service or later callers
    let fresh = service.all_quotes();
    assert_eq!(fresh.len(), 25);
    assert_eq!(
        fresh.first().map(String::as_str),
        Some("🧘 Take a breath. This moment is all there is.")
    );
    assert!(!service.all_quotes().contains(&"tampered".to_string()));
}

#[test]
fn test_count_is_stable() {
    let service = QuoteService::default();

    let first = service.quote_count();
    for _ in 0..100 {
        let _ = service.random_quote();
        assert_eq!(service.quote_count(), first);
    }
}

#[test]
fn test_empty_collection_serves_fallback() {
    // Structurally unreachable in normal use; forced here
    let service = QuoteService::new(ServiceConfig::new().quotes(vec![]).build());

    assert_eq!(service.quote_count(), 0);
    assert!(service.all_quotes().is_empty());
    for _ in 0..10 {
        assert_eq!(service.random_quote(), FALLBACK_QUOTE);
    }

    let stats = service.stats();
    assert_eq!(stats.picks, 10);
    assert_eq!(stats.fallbacks, 10);
}

#[test]
fn test_custom_collection() {
    let service = QuoteService::new(
        ServiceConfig::new()
            .quotes(vec!["first".to_string(), "second".to_string()])
            .build(),
    );

    assert_eq!(service.quote_count(), 2);
    assert_eq!(service.all_quotes(), vec!["first", "second"]);

    let quote = service.random_quote();
    assert!(quote == "first" || quote == "second");
}

#[test]
fn test_seeded_sequences_replay() {
    let a = QuoteService::new(ServiceConfig::new().seed(2024).build());
    let b = QuoteService::new(ServiceConfig::new().seed(2024).build());

    let picks_a: Vec<String> = (0..100).map(|_| a.random_quote()).collect();
    let picks_b: Vec<String> = (0..100).map(|_| b.random_quote()).collect();
    assert_eq!(picks_a, picks_b);
}

#[test]
fn test_concurrent_picks() {
    let service = Arc::new(QuoteService::default());
    let members: HashSet<String> = service.all_quotes().into_iter().collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                let mut picks = Vec::with_capacity(500);
                for _ in 0..500 {
                    picks.push(service.random_quote());
                }
                picks
            })
        })
        .collect();

    for handle in handles {
        for pick in handle.join().expect("Thread panicked") {
            assert!(members.contains(&pick));
        }
    }

    assert_eq!(service.stats().picks, 8 * 500);
}

#[test]
fn test_clone_shares_state() {
    let service1 = QuoteService::default();
    let service2 = service1.clone();

    let _ = service1.random_quote();
    let _ = service2.random_quote();

    // Picks through either handle land in the same stats
    assert_eq!(service1.stats().picks, 2);
    assert_eq!(service1.stats(), service2.stats());
}

#[test]
fn test_stats_accuracy() {
    let service = QuoteService::default();

    let _ = service.random_quote();
    let _ = service.random_quote();
    let _ = service.all_quotes();
    let _ = service.quote_count();

    let stats = service.stats();
    assert_eq!(stats.picks, 2);
    assert_eq!(stats.listings, 1);
    assert_eq!(stats.count_queries, 1);
    assert_eq!(stats.fallbacks, 0);
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any pick from a non-empty collection is a member of that collection.
        #[test]
        fn pick_is_always_a_member(
            quotes in prop::collection::vec(".{1,40}", 1..30),
            seed in any::<u64>(),
        ) {
            let service = QuoteService::new(
                ServiceConfig::new().quotes(quotes.clone()).seed(seed).build(),
            );
            let quote = service.random_quote();
            prop_assert!(quotes.contains(&quote));
        }

        /// Listings always have exactly `quote_count()` entries, in input order.
        #[test]
        fn listing_matches_count_and_order(
            quotes in prop::collection::vec(".{0,40}", 0..30),
        ) {
            let service = QuoteService::new(ServiceConfig::new().quotes(quotes.clone()).build());
            prop_assert_eq!(service.all_quotes().len(), service.quote_count());
            prop_assert_eq!(service.all_quotes(), quotes);
        }
    }
}
