//! View Models
//!
//! Plain data derived from the store for the terminal renderer, kept free of
//! any terminal I/O so it can be checked directly.

use std::fmt;

use rand::Rng;

use super::config::AppConfig;
use crate::store::{QuoteStore, StoreSnapshot};

/// Shown in the category menu when the asset declared no categories
pub const NO_CATEGORIES: &str = "No categories found, check the quotes file format";
/// Status line while no usable data is loaded
pub const DATA_ERROR_STATUS: &str = "Data load error: check the quotes file";
/// Label used when no category filter is active
pub const ALL_CATEGORIES: &str = "All";

/// Top level tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    About,
}

impl Tab {
    pub fn titles() -> Vec<&'static str> {
        vec!["Home", "About"]
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::About => 1,
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::Home => Self::About,
            Self::About => Self::Home,
        }
    }
}

/// Everything the home tab renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub title: String,
    pub quote: String,
    /// Quote card uses the error style
    pub is_error: bool,
    pub next_enabled: bool,
    pub status_line: String,
}

impl HomeView {
    pub fn new(config: &AppConfig, snapshot: &StoreSnapshot) -> Self {
        let status_line = if snapshot.has_data {
            format!(
                "Current category: {}",
                snapshot.active_category.as_deref().unwrap_or(ALL_CATEGORIES)
            )
        } else {
            DATA_ERROR_STATUS.to_string()
        };

        Self {
            title: config.title.clone(),
            quote: snapshot.current_quote.clone(),
            is_error: !snapshot.has_data,
            next_enabled: snapshot.has_data,
            status_line,
        }
    }
}

/// One row of the category menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: String,
    pub count: usize,
}

impl fmt::Display for CategoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.count)
    }
}

/// Category menu rows in display order, empty categories included
pub fn category_entries<R: Rng>(store: &QuoteStore<R>) -> Vec<CategoryEntry> {
    store
        .categories()
        .iter()
        .map(|name| CategoryEntry {
            name: name.clone(),
            count: store.quote_count(name),
        })
        .collect()
}

/// Lines for the about tab
pub fn about_lines(config: &AppConfig) -> Vec<String> {
    let mut lines = vec![config.about_text.clone(), String::new()];
    lines.extend(config.get_summary());
    lines
}
