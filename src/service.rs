//! The main service interface.
//!
//! This module provides the primary `QuoteService` type that users interact
//! with. It wraps the immutable collection and a private random generator
//! behind a clean, thread-safe API.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};

use crate::collection::{QuoteCollection, FALLBACK_QUOTE};
use crate::config::ServiceConfig;
use crate::stats::{ServiceStats, StatsSnapshot};

/// A thread-safe, in-memory quote service with uniform random selection.
///
/// # Features
/// - **Thread-safe**: Can be safely shared across threads using `Arc<QuoteService>` or cloning.
/// - **Uniform selection**: Every quote has equal probability per pick.
/// - **Defensive copies**: Listings are independently owned; caller mutation never leaks back.
/// - **Statistics**: Track picks, listings, count queries, and fallback serves.
///
/// # Example
/// ```
/// use mindful_quotes::{QuoteService, ServiceConfig};
///
/// // Create a service over the built-in collection
/// let service = QuoteService::default();
///
/// // Basic operations
/// let quote = service.random_quote();
/// assert!(service.all_quotes().contains(&quote));
/// assert_eq!(service.quote_count(), 25);
///
/// // Deterministic picks for reproducible tests
/// let seeded = QuoteService::new(ServiceConfig::new().seed(42).build());
/// let replay = QuoteService::new(ServiceConfig::new().seed(42).build());
/// assert_eq!(seeded.random_quote(), replay.random_quote());
/// ```
#[derive(Debug, Clone)]
pub struct QuoteService {
    /// Shared internal state.
    inner: Arc<Inner>,
}

/// Internal state shared between service clones.
#[derive(Debug)]
struct Inner {
    /// The immutable backing collection.
    collection: QuoteCollection,

    /// Private random generator, advanced on each pick.
    /// The mutex is held only for the index draw.
    rng: Mutex<StdRng>,

    /// Statistics for service operations.
    stats: Arc<ServiceStats>,
}

impl QuoteService {
    /// Create a new service with the given configuration.
    ///
    /// The random generator is seeded once here: from the configured seed
    /// when one is set, from OS entropy otherwise. Construction always
    /// succeeds; there are no error conditions.
    ///
    /// # Example
    /// ```
    /// use mindful_quotes::{QuoteService, ServiceConfig};
    ///
    /// let service = QuoteService::new(ServiceConfig::default());
    /// assert_eq!(service.quote_count(), 25);
    /// ```
    pub fn new(config: ServiceConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            inner: Arc::new(Inner {
                collection: config.collection,
                rng: Mutex::new(rng),
                stats: Arc::new(ServiceStats::new()),
            }),
        }
    }

    /// Pick one quote uniformly at random.
    ///
    /// Every quote in the collection has selection probability `1/N` per
    /// call; calls are independent beyond the generator's sequence
    /// advancing. If the collection is empty, the fixed fallback quote is
    /// returned instead of an error, so this operation never fails.
    ///
    /// # Example
    /// ```
    /// use mindful_quotes::QuoteService;
    ///
    /// let service = QuoteService::default();
    /// let quote = service.random_quote();
    /// assert!(!quote.is_empty());
    /// ```
    pub fn random_quote(&self) -> String {
        self.inner.stats.record_pick();

        if self.inner.collection.is_empty() {
            self.inner.stats.record_fallback();
            return FALLBACK_QUOTE.to_string();
        }

        let index = {
            // A poisoned lock only means another pick panicked mid-draw;
            // the generator state is still usable.
            let mut rng = self
                .inner
                .rng
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            rng.random_range(0..self.inner.collection.len())
        };

        self.inner
            .collection
            .get(index)
            .unwrap_or(FALLBACK_QUOTE)
            .to_string()
    }

    /// List every quote, in insertion order.
    ///
    /// Returns a fresh, independently-owned vector: mutating it never
    /// alters the service's collection and is not visible to subsequent
    /// calls or other callers.
    ///
    /// # Example
    /// ```
    /// use mindful_quotes::QuoteService;
    ///
    /// let service = QuoteService::default();
    /// let mut quotes = service.all_quotes();
    /// quotes.clear();
    /// assert_eq!(service.quote_count(), 25); // unaffected
    /// ```
    pub fn all_quotes(&self) -> Vec<String> {
        self.inner.stats.record_listing();
        self.inner.collection.to_vec()
    }

    /// Get the number of quotes in the collection.
    ///
    /// Stable for the lifetime of the service.
    ///
    /// # Example
    /// ```
    /// use mindful_quotes::QuoteService;
    ///
    /// let service = QuoteService::default();
    /// assert_eq!(service.quote_count(), service.all_quotes().len());
    /// ```
    pub fn quote_count(&self) -> usize {
        self.inner.stats.record_count_query();
        self.inner.collection.len()
    }

    /// Get a snapshot of the service statistics.
    ///
    /// Returns a point-in-time snapshot of picks, listings, count queries,
    /// and fallback serves.
    ///
    /// # Example
    /// ```
    /// use mindful_quotes::QuoteService;
    ///
    /// let service = QuoteService::default();
    /// let _ = service.random_quote();
    ///
    /// let stats = service.stats();
    /// assert_eq!(stats.picks, 1);
    /// ```
    pub fn stats(&self) -> StatsSnapshot {
        self.inner.stats.snapshot()
    }

    /// Get a reference to the internal statistics counter.
    ///
    /// This is useful for integrating with external metrics systems.
    pub fn stats_ref(&self) -> Arc<ServiceStats> {
        Arc::clone(&self.inner.stats)
    }
}

impl Default for QuoteService {
    fn default() -> Self {
        Self::new(ServiceConfig::default())
    }
}
