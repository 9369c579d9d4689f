//! Store Error Types
//!
//! Failure taxonomy for loading and browsing quotes. None of these are
//! propagated to the presentation layer as hard failures: the store absorbs
//! them into `has_data` and the current display text.

use thiserror::Error;

use super::messages;

/// Errors produced while reading the quote source asset
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("quote source not found: {0}")]
    NotFound(String),
    #[error("failed to read quote source: {0}")]
    Io(#[from] std::io::Error),
    #[error("quote source is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Errors the quote store can end up in
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("quote resource is missing")]
    ResourceMissing,
    #[error("quote resource could not be read: {detail}")]
    ResourceUnreadable { detail: String },
    #[error("quote data is malformed: {categories} categories, {quotes} quotes")]
    MalformedData { categories: usize, quotes: usize },
    #[error("no quotes available in pool '{}'", .category.as_deref().unwrap_or("<all>"))]
    EmptyPool { category: Option<String> },
}

impl StoreError {
    /// Message shown to the user in place of a quote.
    ///
    /// Read errors keep their detail out of the display text; it only goes
    /// to the log.
    pub fn display_message(&self) -> &'static str {
        match self {
            Self::ResourceMissing => messages::RESOURCE_MISSING,
            Self::ResourceUnreadable { .. } => messages::RESOURCE_UNREADABLE,
            Self::MalformedData { .. } => messages::MALFORMED_DATA,
            Self::EmptyPool { category: Some(_) } => messages::EMPTY_CATEGORY,
            Self::EmptyPool { category: None } => messages::NO_QUOTES_ANYWHERE,
        }
    }
}

impl From<SourceError> for StoreError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::NotFound(_) => StoreError::ResourceMissing,
            SourceError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                StoreError::ResourceMissing
            }
            other => StoreError::ResourceUnreadable {
                detail: other.to_string(),
            },
        }
    }
}
