//! Quote Asset Parser
//!
//! Single-pass, line-oriented parser for the bundled quotes text:
//!
//! ```text
//! [Category Name]
//! quote line 1
//! quote line 2
//!
//! [Another Category]
//! quote line 1
//! ```
//!
//! Blank lines are ignored, `[name]` lines open (or reopen) a category and
//! every other line is a quote belonging to the most recent category.
//! Malformed headers and quotes that appear before any header are skipped.

use std::collections::HashMap;

use log::{debug, warn};

/// Line separators other than `\n` that also end a line
const EXTRA_LINE_BREAKS: [char; 6] = ['\r', '\u{0B}', '\u{0C}', '\u{85}', '\u{2028}', '\u{2029}'];

/// Parsed quote data: category names in first-seen order plus their quotes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    order: Vec<String>,
    quotes: HashMap<String, Vec<String>>,
}

/// What a single trimmed line turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    Blank,
    Header(&'a str),
    MalformedHeader,
    Quote(&'a str),
}

impl<'a> ParsedLine<'a> {
    /// Classify one line of the asset
    pub fn classify(line: &'a str) -> Self {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Self::Blank;
        }

        if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
            let name = trimmed[1..trimmed.len() - 1].trim();
            if name.is_empty() {
                Self::MalformedHeader
            } else {
                Self::Header(name)
            }
        } else {
            Self::Quote(trimmed)
        }
    }
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the full text of a quotes asset
    pub fn parse(text: &str) -> Self {
        let mut catalog = Self::new();
        let mut current: Option<String> = None;

        for (index, raw_line) in text.lines().enumerate() {
            let line_number = index + 1;

            for line in raw_line.split(EXTRA_LINE_BREAKS) {
                match ParsedLine::classify(line) {
                    ParsedLine::Blank => {}
                    ParsedLine::Header(name) => {
                        if catalog.open_category(name) {
                            debug!("Found category '{}' (line {})", name, line_number);
                        } else {
                            debug!("Reopened category '{}' (line {})", name, line_number);
                        }
                        current = Some(name.to_string());
                    }
                    ParsedLine::MalformedHeader => {
                        warn!("Invalid category header (line {}): {}", line_number, line.trim());
                    }
                    ParsedLine::Quote(quote) => match current.as_deref() {
                        Some(category) => catalog.push_quote(category, quote),
                        None => {
                            warn!("Discarding line outside any category (line {}): {}", line_number, quote);
                        }
                    },
                }
            }
        }

        catalog
    }

    /// Register a category, returning true if it was not seen before
    fn open_category(&mut self, name: &str) -> bool {
        if self.quotes.contains_key(name) {
            return false;
        }
        self.quotes.insert(name.to_string(), Vec::new());
        self.order.push(name.to_string());
        true
    }

    fn push_quote(&mut self, category: &str, quote: &str) {
        if let Some(quotes) = self.quotes.get_mut(category) {
            quotes.push(quote.to_string());
        }
    }

    /// Category names in first-seen order, including empty ones
    pub fn categories(&self) -> &[String] {
        &self.order
    }

    /// Quotes stored under a category
    pub fn quotes(&self, category: &str) -> Option<&[String]> {
        self.quotes.get(category).map(Vec::as_slice)
    }

    /// Number of quotes in a category, 0 when unknown
    pub fn quote_count(&self, category: &str) -> usize {
        self.quotes.get(category).map_or(0, Vec::len)
    }

    /// Total number of quotes across every category
    pub fn total_quotes(&self) -> usize {
        self.quotes.values().map(Vec::len).sum()
    }

    /// Categories that hold at least one quote, in display order
    pub fn non_empty_categories(&self) -> Vec<&str> {
        self.order
            .iter()
            .filter(|name| self.quote_count(name) > 0)
            .map(String::as_str)
            .collect()
    }

    /// True when there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.order.is_empty() || self.total_quotes() == 0
    }
}
