//! Quotebook - categorised random quote viewer
//!
//! Loads a plain-text quotes asset made of `[Category]` headers followed by
//! one quote per line, and serves random quotes from it, either from one
//! selected category or from a randomly chosen one. The same quote is never
//! shown twice in a row when the pool holds more than one.
//!
//! # Quick Start
//!
//! ```rust
//! use quotebook::store::QuoteStore;
//!
//! let mut store = QuoteStore::new();
//! let result = store.load("[Wisdom]\nKnow thyself.\nLess is more.\n");
//! assert!(result.is_success());
//!
//! store.filter_quotes("Wisdom");
//! store.next_quote();
//! println!("{}", store.current_quote());
//! ```
//!
//! The `cli` module holds the terminal front end used by the `quotebook`
//! binary.

pub mod cli;
pub mod logging;
pub mod store;

// Re-export commonly used types for convenience
pub use store::{LoadResult, QuoteSource, QuoteStore, StoreError, StoreSnapshot};
