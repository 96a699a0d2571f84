//! Statistics and metrics for the quote service.
//!
//! This module provides atomic counters for tracking service operations,
//! enabling observability without impacting performance.

use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics for quote service operations.
///
/// All counters are atomic and can be safely accessed from multiple threads.
/// Use `QuoteService::stats()` to get a snapshot of the current statistics.
///
/// # Example
/// ```ignore
/// let service = QuoteService::default();
/// let _ = service.random_quote();
/// let stats = service.stats();
/// println!("Picks served: {}", stats.picks);
/// ```
#[derive(Debug, Default)]
pub struct ServiceStats {
    /// Number of random picks served.
    picks: AtomicU64,

    /// Number of full-collection listings served.
    listings: AtomicU64,

    /// Number of count queries answered.
    count_queries: AtomicU64,

    /// Number of picks that served the fallback quote (empty collection).
    fallbacks: AtomicU64,
}

impl ServiceStats {
    /// Create a new stats instance with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a random pick.
    pub fn record_pick(&self) {
        self.picks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a full-collection listing.
    pub fn record_listing(&self) {
        self.listings.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a count query.
    pub fn record_count_query(&self) {
        self.count_queries.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a pick that served the fallback quote.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    // Getters for reading statistics

    /// Get the number of random picks served.
    pub fn picks(&self) -> u64 {
        self.picks.load(Ordering::Relaxed)
    }

    /// Get the number of listings served.
    pub fn listings(&self) -> u64 {
        self.listings.load(Ordering::Relaxed)
    }

    /// Get the number of count queries answered.
    pub fn count_queries(&self) -> u64 {
        self.count_queries.load(Ordering::Relaxed)
    }

    /// Get the number of fallback picks served.
    pub fn fallbacks(&self) -> u64 {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Create a snapshot of the current statistics.
    /// This is useful for serialization or logging.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            picks: self.picks(),
            listings: self.listings(),
            count_queries: self.count_queries(),
            fallbacks: self.fallbacks(),
        }
    }
}

/// A point-in-time snapshot of service statistics.
///
/// Unlike `ServiceStats`, this struct contains plain values (not atomics)
/// and can be easily serialized or logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub picks: u64,
    pub listings: u64,
    pub count_queries: u64,
    pub fallbacks: u64,
}
