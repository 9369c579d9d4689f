//! Quote Sources
//!
//! The store never locates its asset itself; callers hand it a
//! [`QuoteSource`] that knows how to produce the raw text.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::SourceError;

/// Quotes asset compiled into the binary
const BUNDLED_QUOTES: &str = include_str!("../../assets/quotes.txt");

/// Anything that can produce the raw text of a quotes asset
pub trait QuoteSource {
    /// Read the whole asset as UTF-8 text
    fn read_text(&self) -> Result<String, SourceError>;

    /// Human readable origin, used in log lines
    fn describe(&self) -> String;
}

/// The asset shipped with the application
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledSource;

impl QuoteSource for BundledSource {
    fn read_text(&self) -> Result<String, SourceError> {
        Ok(BUNDLED_QUOTES.to_string())
    }

    fn describe(&self) -> String {
        "bundled quotes.txt".to_string()
    }
}

/// A quotes file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuoteSource for FileSource {
    fn read_text(&self) -> Result<String, SourceError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(SourceError::Io(e)),
        };
        Ok(String::from_utf8(bytes)?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory text, for tests and embedding callers
#[derive(Debug, Clone, Default)]
pub struct TextSource {
    text: String,
}

impl TextSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl QuoteSource for TextSource {
    fn read_text(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory text ({} bytes)", self.text.len())
    }
}
