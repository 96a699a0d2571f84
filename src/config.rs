//! Configuration for the quote service.
//!
//! This module provides a builder pattern for configuring service behavior:
//! which collection backs the service and how its random generator is seeded.

use crate::collection::QuoteCollection;

/// Configuration for creating a new service instance.
///
/// Use the builder pattern to construct configuration:
///
/// ```
/// use mindful_quotes::ServiceConfig;
///
/// let config = ServiceConfig::new()
///     .quotes(vec!["only quote".to_string()])
///     .seed(42)
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    /// The collection backing the service.
    /// Defaults to the built-in 25-entry quote set.
    pub(crate) collection: QuoteCollection,

    /// Seed for the random generator.
    /// `None` means seed from OS entropy at construction time.
    pub(crate) seed: Option<u64>,
}

impl ServiceConfig {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the collection backing the service.
    ///
    /// Replaces the built-in quote set with the given collection.
    pub fn collection(mut self, collection: QuoteCollection) -> Self {
        self.collection = collection;
        self
    }

    /// Set the backing collection from a plain list of quotes.
    ///
    /// Convenience wrapper around [`ServiceConfig::collection`]. An empty
    /// list is allowed; random picks then serve the fallback quote.
    pub fn quotes(self, quotes: Vec<String>) -> Self {
        self.collection(QuoteCollection::from_quotes(quotes))
    }

    /// Seed the random generator with a fixed value.
    ///
    /// Services built from the same seed and collection produce identical
    /// pick sequences. Leave unset for OS-entropy seeding in normal use.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Self {
        self
    }

    /// Get the configured collection.
    pub fn get_collection(&self) -> &QuoteCollection {
        &self.collection
    }

    /// Get the configured seed, if set.
    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }
}
