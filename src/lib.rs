//! # Mindful Quotes
//!
//! A tiny, thread-safe, in-memory quote service for Rust with uniform
//! random selection over a fixed mindfulness quote collection.
//!
//! ## Features
//!
//! - **Thread-safe**: Share across threads with `Clone` (uses `Arc` internally)
//! - **Uniform selection**: Every quote has equal probability per pick
//! - **Defensive copies**: Listings are independently owned by the caller
//! - **Deterministic mode**: Seed the generator for reproducible picks in tests
//! - **Statistics**: Track picks, listings, count queries, and fallback serves
//! - **Zero unsafe code**: Built entirely with safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use mindful_quotes::{QuoteService, ServiceConfig};
//!
//! // Create a service over the built-in 25-quote collection
//! let service = QuoteService::default();
//!
//! // Pick and enumerate
//! println!("{}", service.random_quote());
//! for quote in service.all_quotes() {
//!     println!("{}", quote);
//! }
//! println!("{} quotes available", service.quote_count());
//!
//! // Deterministic picks for tests
//! let seeded = QuoteService::new(ServiceConfig::new().seed(42).build());
//! let replay = QuoteService::new(ServiceConfig::new().seed(42).build());
//! assert_eq!(seeded.random_quote(), replay.random_quote());
//! ```
//!
//! ## Thread Safety
//!
//! The service is safe to share across threads. Cloning a `QuoteService`
//! creates a new handle to the same underlying collection and generator:
//!
//! ```rust
//! use mindful_quotes::QuoteService;
//! use std::thread;
//!
//! let service = QuoteService::default();
//!
//! let handles: Vec<_> = (0..4).map(|_| {
//!     let service = service.clone();
//!     thread::spawn(move || service.random_quote())
//! }).collect();
//!
//! for handle in handles {
//!     let quote = handle.join().unwrap();
//!     assert!(service.all_quotes().contains(&quote));
//! }
//! ```

// Public API - stable in v1.0.0
pub mod cli;
pub mod collection;
pub mod config;
pub mod service;
pub mod stats;

pub use cli::{Cli, QuoteCommand};
pub use collection::{QuoteCollection, FALLBACK_QUOTE};
pub use config::ServiceConfig;
pub use service::QuoteService;
pub use stats::{ServiceStats, StatsSnapshot};
