//! Quote Store Module
//!
//! Parsing of the categorised quotes asset and the browsing state built on
//! top of it.
//!
//! ## Module Structure
//!
//! - `parser` - Line-oriented asset parser producing a `Catalog`
//! - `source` - Where the raw asset text comes from
//! - `quote_store` - Selection state and operations used by the UI
//! - `error` - Source and store error types
//! - `messages` - Fixed display strings

pub mod error;
pub mod messages;
pub mod parser;
pub mod quote_store;
pub mod source;

pub use error::{SourceError, StoreError};
pub use parser::Catalog;
pub use quote_store::{LoadResult, LoadSummary, QuoteStore, StoreSnapshot};
pub use source::{BundledSource, FileSource, QuoteSource, TextSource};
