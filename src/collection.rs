//! The immutable quote collection and the built-in data set.
//!
//! This module provides the low-level storage for the service: an ordered
//! sequence of quote strings that is fixed at construction time and never
//! mutated afterwards.

use std::sync::Arc;

/// Fallback returned by a random pick when the backing collection is empty.
///
/// Duplicates the first built-in entry verbatim.
pub const FALLBACK_QUOTE: &str = "🧘 Take a breath. This moment is all there is.";

/// Built-in mindfulness quotes inspired by Zen, Stoicism, and mindfulness practices.
const BUILTIN_QUOTES: [&str; 25] = [
    "🧘 Take a breath. This moment is all there is.",
    "🌱 What you resist persists. What you accept transforms.",
    "⭐ The present moment is the only time over which we have dominion. - Thich Nhat Hanh",
    "🍃 Wherever you are, be there totally. - Eckhart Tolle",
    "🌊 You have power over your mind—not outside events. Realize this, and you will find strength. - Marcus Aurelius",
    "🎯 The best way to take care of the future is to take care of the present moment.",
    "🌸 Peace comes from within. Do not seek it without. - Buddha",
    "🕯️ Between stimulus and response there is a space. In that space is our power to choose our response.",
    "🌿 Mindfulness is about being fully awake in our lives.",
    "⚡ This too shall pass. Notice what arises, and let it go.",
    "🎋 The mind is everything. What you think you become. - Buddha",
    "🌅 Each morning we are born again. What we do today is what matters most.",
    "🪨 Be like water making its way through cracks. - Bruce Lee",
    "🌊 Flow with whatever may happen and let your mind be free.",
    "⭐ The quieter you become, the more you are able to hear.",
    "🌱 In the beginner's mind there are many possibilities, in the expert's mind there are few. - Shunryu Suzuki",
    "🕊️ Let go or be dragged. - Zen Proverb",
    "🌸 The only way out is through.",
    "🎯 Focus on the step in front of you, not the whole staircase.",
    "🌿 Breathe in calm, breathe out chaos.",
    "⚖️ Balance is not something you find, it's something you create.",
    "🌊 When you realize nothing is lacking, the whole world belongs to you. - Lao Tzu",
    "🪷 Muddy water is best cleared by leaving it alone. - Alan Watts",
    "🌅 Every moment is a fresh beginning. - T.S. Eliot",
    "🎋 Simplicity is the ultimate sophistication.",
];

/// An immutable, ordered collection of quote strings.
///
/// The collection is fixed at construction time. Cloning a `QuoteCollection`
/// is cheap: clones share the same underlying storage via `Arc`, and since
/// the storage is never mutated, sharing is safe without any locking.
///
/// # Example
/// ```
/// use mindful_quotes::QuoteCollection;
///
/// let collection = QuoteCollection::builtin();
/// assert_eq!(collection.len(), 25);
///
/// let custom = QuoteCollection::from_quotes(vec!["hello".to_string()]);
/// assert_eq!(custom.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct QuoteCollection {
    /// The stored quotes, in insertion order. Shared and never mutated.
    quotes: Arc<[String]>,
}

impl QuoteCollection {
    /// Create a collection holding the built-in 25-entry quote set.
    pub fn builtin() -> Self {
        Self {
            quotes: BUILTIN_QUOTES.iter().map(|q| q.to_string()).collect(),
        }
    }

    /// Create a collection from an arbitrary list of quotes.
    ///
    /// The list is taken as-is: order is preserved, duplicates are kept,
    /// and an empty list is allowed (random picks then serve the fallback).
    ///
    /// # Arguments
    /// * `quotes` - The quotes to store, in the order they should be listed.
    pub fn from_quotes(quotes: Vec<String>) -> Self {
        Self {
            quotes: quotes.into(),
        }
    }

    /// Get the quote at the given index, if it exists.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.quotes.get(index).map(String::as_str)
    }

    /// Get the number of quotes in the collection.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Copy the collection into a fresh, independently-owned `Vec`.
    ///
    /// The returned vector shares nothing with the collection: the caller
    /// can push, truncate, or overwrite entries without affecting the
    /// stored quotes or any other caller.
    ///
    /// # Example
    /// ```
    /// use mindful_quotes::QuoteCollection;
    ///
    /// let collection = QuoteCollection::builtin();
    /// let mut copy = collection.to_vec();
    /// copy.clear();
    /// assert_eq!(collection.len(), 25); // unaffected
    /// ```
    pub fn to_vec(&self) -> Vec<String> {
        self.quotes.to_vec()
    }

    /// View the stored quotes as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.quotes
    }
}

impl Default for QuoteCollection {
    fn default() -> Self {
        Self::builtin()
    }
}

impl From<Vec<String>> for QuoteCollection {
    fn from(quotes: Vec<String>) -> Self {
        Self::from_quotes(quotes)
    }
}
