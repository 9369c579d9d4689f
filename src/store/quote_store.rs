//! Quote Store
//!
//! Owns the parsed catalog together with the browsing state the UI renders:
//! the active category filter, the index of the quote on screen, its text,
//! and whether any usable data was loaded.
//!
//! Every failure is absorbed into that state. Callers render
//! [`QuoteStore::current_quote`] whatever it holds and keep the "next"
//! control disabled while [`QuoteStore::has_data`] is false. Mutating calls
//! notify subscribed listeners with a fresh [`StoreSnapshot`].

use log::{debug, error, info, warn};
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::error::StoreError;
use super::messages;
use super::parser::Catalog;
use super::source::QuoteSource;

/// Immutable copy of the observable store state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub current_quote: String,
    pub has_data: bool,
    pub active_category: Option<String>,
}

/// Counts reported after a successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub categories: usize,
    pub quotes: usize,
}

/// Outcome of a load attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResult {
    Loaded(LoadSummary),
    Failed(StoreError),
}

impl LoadResult {
    /// Check if usable data was loaded
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Short description suitable for a log line or status bar
    pub fn message(&self) -> String {
        match self {
            Self::Loaded(summary) => format!(
                "Loaded {} categories, {} quotes",
                summary.categories, summary.quotes
            ),
            Self::Failed(err) => err.to_string(),
        }
    }
}

type Listener = Box<dyn FnMut(&StoreSnapshot)>;

/// Categorised quote store with random, non-repeating selection
pub struct QuoteStore<R: Rng = ThreadRng> {
    catalog: Catalog,
    active_category: Option<String>,
    current_index: usize,
    current_quote: String,
    has_data: bool,
    rng: R,
    listeners: Vec<Listener>,
}

impl QuoteStore<ThreadRng> {
    /// Create an empty store backed by the thread-local RNG
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for QuoteStore<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuoteStore<R> {
    /// Create an empty store drawing from the given RNG
    pub fn with_rng(rng: R) -> Self {
        Self {
            catalog: Catalog::new(),
            active_category: None,
            current_index: 0,
            current_quote: messages::LOADING.to_string(),
            has_data: false,
            rng,
            listeners: Vec::new(),
        }
    }

    /// Read a source and load its text.
    ///
    /// A source that cannot be found or read leaves the store empty with
    /// `has_data` false; the read error detail is only logged.
    pub fn load_from_source(&mut self, source: &dyn QuoteSource) -> LoadResult {
        match source.read_text() {
            Ok(text) => {
                debug!("Read quotes from {}", source.describe());
                self.load(&text)
            }
            Err(e) => {
                error!("Failed to read quotes from {}: {}", source.describe(), e);
                self.reset(Catalog::new());
                let result = self.fail(StoreError::from(e));
                self.notify();
                result
            }
        }
    }

    /// Replace all store state with the contents of `raw_text`
    pub fn load(&mut self, raw_text: &str) -> LoadResult {
        self.reset(Catalog::parse(raw_text));

        let categories = self.catalog.categories().len();
        let quotes = self.catalog.total_quotes();

        let result = if self.catalog.is_empty() {
            error!(
                "Parse error: found {} categories but {} quotes in total",
                categories, quotes
            );
            self.fail(StoreError::MalformedData { categories, quotes })
        } else {
            info!("Loaded {} categories, {} quotes", categories, quotes);
            self.has_data = true;
            self.pick_initial();
            if self.has_data {
                LoadResult::Loaded(LoadSummary { categories, quotes })
            } else {
                LoadResult::Failed(StoreError::EmptyPool { category: None })
            }
        };

        self.notify();
        result
    }

    /// Show a random quote from a random non-empty category
    pub fn select_initial(&mut self) {
        if !self.has_data {
            return;
        }
        self.pick_initial();
        self.notify();
    }

    /// Advance to a different random quote within the current pool.
    ///
    /// With no usable filter a non-empty category is picked at random and
    /// becomes the active one. When the pool holds at least two quotes the
    /// quote on screen is never picked again.
    pub fn next_quote(&mut self) {
        if !self.has_data {
            self.current_quote = messages::NO_DATA.to_string();
            self.notify();
            return;
        }

        let active_usable = self
            .active_category
            .as_deref()
            .map_or(false, |name| self.catalog.quote_count(name) > 0);

        if !active_usable {
            match self.random_category() {
                Some(category) => self.active_category = Some(category),
                None => {
                    self.mark_pool_exhausted();
                    self.notify();
                    return;
                }
            }
        }

        let category = self.active_category.clone().unwrap_or_default();
        let len = self.catalog.quote_count(&category);
        self.current_index = self.index_excluding_current(len);
        self.show_current(&category);
        debug!("Next quote: {}", self.current_quote);
        self.notify();
    }

    /// Restrict selection to `category` and show a random quote from it.
    ///
    /// The category becomes active even when it is unknown or empty, in which
    /// case the display switches to the empty-category message and the quote
    /// index is left alone.
    pub fn filter_quotes(&mut self, category: &str) {
        if !self.has_data {
            return;
        }

        self.active_category = Some(category.to_string());
        let len = self.catalog.quote_count(category);
        if len == 0 {
            let err = StoreError::EmptyPool {
                category: Some(category.to_string()),
            };
            warn!("{}", err);
            self.current_quote = err.display_message().to_string();
        } else {
            self.current_index = self.rng.gen_range(0..len);
            self.show_current(category);
            debug!("Switched to category '{}': {}", category, self.current_quote);
        }
        self.notify();
    }

    /// Number of quotes stored for a category, 0 when unknown
    pub fn quote_count(&self, category: &str) -> usize {
        self.catalog.quote_count(category)
    }

    /// Category names in first-seen order, including empty categories
    pub fn categories(&self) -> &[String] {
        self.catalog.categories()
    }

    pub fn current_quote(&self) -> &str {
        &self.current_quote
    }

    pub fn has_data(&self) -> bool {
        self.has_data
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Copy the observable state
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            current_quote: self.current_quote.clone(),
            has_data: self.has_data,
            active_category: self.active_category.clone(),
        }
    }

    /// Register a callback run after every mutating call
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreSnapshot) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn reset(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        self.active_category = None;
        self.current_index = 0;
        self.has_data = false;
    }

    fn fail(&mut self, err: StoreError) -> LoadResult {
        self.has_data = false;
        self.current_quote = err.display_message().to_string();
        LoadResult::Failed(err)
    }

    fn pick_initial(&mut self) {
        let Some(category) = self.random_category() else {
            self.mark_pool_exhausted();
            return;
        };

        let len = self.catalog.quote_count(&category);
        self.current_index = self.rng.gen_range(0..len);
        self.show_current(&category);
        self.active_category = Some(category);
    }

    fn random_category(&mut self) -> Option<String> {
        self.catalog
            .non_empty_categories()
            .choose(&mut self.rng)
            .map(|name| name.to_string())
    }

    fn mark_pool_exhausted(&mut self) {
        let err = StoreError::EmptyPool { category: None };
        error!("{}", err);
        self.has_data = false;
        self.current_quote = err.display_message().to_string();
    }

    /// Uniform index in `0..len`, skipping the current one when possible
    fn index_excluding_current(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        if self.current_index >= len {
            return self.rng.gen_range(0..len);
        }
        let pick = self.rng.gen_range(0..len - 1);
        if pick >= self.current_index {
            pick + 1
        } else {
            pick
        }
    }

    fn show_current(&mut self, category: &str) {
        if let Some(quote) = self
            .catalog
            .quotes(category)
            .and_then(|quotes| quotes.get(self.current_index))
        {
            self.current_quote = quote.clone();
        }
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for listener in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::source::{FileSource, TextSource};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::tempdir;

    const SAMPLE: &str = "[Wisdom]\nw1\nw2\nw3\n\n[Humor]\nh1\n\n[Empty]\n\n[Code]\nc1\nc2\n";

    fn seeded_store() -> QuoteStore<StdRng> {
        QuoteStore::with_rng(StdRng::seed_from_u64(42))
    }

    fn loaded_store(text: &str) -> QuoteStore<StdRng> {
        let mut store = seeded_store();
        store.load(text);
        store
    }

    #[test]
    fn test_new_store_is_loading() {
        let store = seeded_store();
        assert!(!store.has_data());
        assert_eq!(store.current_quote(), messages::LOADING);
        assert!(store.categories().is_empty());
    }

    #[test]
    fn test_load_round_trip() {
        let mut store = seeded_store();
        let result = store.load(SAMPLE);

        assert!(result.is_success());
        assert_eq!(
            result,
            LoadResult::Loaded(LoadSummary {
                categories: 4,
                quotes: 6
            })
        );
        assert_eq!(store.categories(), &["Wisdom", "Humor", "Empty", "Code"]);
        assert_eq!(store.quote_count("Wisdom"), 3);
        assert_eq!(store.quote_count("Humor"), 1);
        assert_eq!(store.quote_count("Empty"), 0);
        assert_eq!(store.quote_count("Code"), 2);
        assert_eq!(store.quote_count("Unknown"), 0);
    }

    #[test]
    fn test_initial_selection_comes_from_non_empty_category() {
        for seed in 0..50 {
            let mut store = QuoteStore::with_rng(StdRng::seed_from_u64(seed));
            store.load(SAMPLE);

            assert!(store.has_data());
            let active = store.active_category().unwrap().to_string();
            assert_ne!(active, "Empty");
            let quotes = store.catalog().quotes(&active).unwrap();
            assert!(store.current_index() < quotes.len());
            assert_eq!(store.current_quote(), quotes[store.current_index()]);
        }
    }

    #[test]
    fn test_next_quote_never_repeats() {
        let mut store = loaded_store(SAMPLE);
        store.filter_quotes("Wisdom");

        let mut previous = store.current_quote().to_string();
        for _ in 0..200 {
            store.next_quote();
            let current = store.current_quote().to_string();
            assert_ne!(current, previous);
            assert!(["w1", "w2", "w3"].contains(&current.as_str()));
            assert_eq!(store.active_category(), Some("Wisdom"));
            previous = current;
        }
    }

    #[test]
    fn test_next_quote_two_quote_pool_alternates() {
        let mut store = loaded_store(SAMPLE);
        store.filter_quotes("Code");

        let first = store.current_quote().to_string();
        store.next_quote();
        let second = store.current_quote().to_string();
        store.next_quote();
        assert_ne!(first, second);
        assert_eq!(store.current_quote(), first);
    }

    #[test]
    fn test_single_quote_is_stable() {
        let mut store = loaded_store(SAMPLE);
        store.filter_quotes("Humor");
        assert_eq!(store.current_quote(), "h1");

        for _ in 0..10 {
            store.next_quote();
            assert_eq!(store.current_quote(), "h1");
            assert!(store.has_data());
        }
    }

    #[test]
    fn test_empty_input_fails() {
        let mut store = seeded_store();
        let result = store.load("");

        assert!(!result.is_success());
        assert_eq!(
            result,
            LoadResult::Failed(StoreError::MalformedData {
                categories: 0,
                quotes: 0
            })
        );
        assert!(!store.has_data());
        assert_eq!(store.current_quote(), messages::MALFORMED_DATA);

        store.next_quote();
        assert!(!store.has_data());
        assert_eq!(store.current_quote(), messages::NO_DATA);
    }

    #[test]
    fn test_headerless_and_quoteless_input_fails() {
        let mut store = loaded_store("no headers here\nat all\n");
        assert!(!store.has_data());
        assert!(!store.current_quote().is_empty());

        let result = store.load("[Lonely]\n\n[Also Lonely]\n");
        assert_eq!(
            result,
            LoadResult::Failed(StoreError::MalformedData {
                categories: 2,
                quotes: 0
            })
        );
        assert!(!store.has_data());
    }

    #[test]
    fn test_filter_unknown_category() {
        let mut store = loaded_store(SAMPLE);
        let index_before = store.current_index();

        store.filter_quotes("Nonexistent");
        assert_eq!(store.active_category(), Some("Nonexistent"));
        assert_eq!(store.current_index(), index_before);
        assert_eq!(store.current_quote(), messages::EMPTY_CATEGORY);
        assert!(store.has_data());
    }

    #[test]
    fn test_filter_empty_category_then_next_falls_back() {
        let mut store = loaded_store(SAMPLE);
        store.filter_quotes("Empty");
        assert_eq!(store.current_quote(), messages::EMPTY_CATEGORY);

        store.next_quote();
        let active = store.active_category().unwrap().to_string();
        assert!(["Wisdom", "Humor", "Code"].contains(&active.as_str()));
        let quotes = store.catalog().quotes(&active).unwrap();
        assert!(quotes.iter().any(|q| q == store.current_quote()));
    }

    #[test]
    fn test_filter_without_data_is_noop() {
        let mut store = loaded_store("");
        let before = store.snapshot();
        store.filter_quotes("Wisdom");
        assert_eq!(store.snapshot(), before);
        assert_eq!(store.active_category(), None);
    }

    #[test]
    fn test_malformed_header_tolerance() {
        let store = loaded_store("stray\n[A]\nhello\n[]\nworld\n");
        assert!(store.has_data());
        assert_eq!(store.categories(), &["A"]);
        assert_eq!(store.quote_count("A"), 2);
        assert_eq!(store.active_category(), Some("A"));
        assert!(["hello", "world"].contains(&store.current_quote()));
    }

    #[test]
    fn test_reload_replaces_state() {
        let mut store = loaded_store(SAMPLE);
        store.filter_quotes("Wisdom");

        let result = store.load("[Fresh]\nnew quote\n");
        assert!(result.is_success());
        assert_eq!(store.categories(), &["Fresh"]);
        assert_eq!(store.active_category(), Some("Fresh"));
        assert_eq!(store.current_quote(), "new quote");
        assert_eq!(store.quote_count("Wisdom"), 0);
    }

    #[test]
    fn test_select_initial_requires_data() {
        let mut store = loaded_store("");
        store.select_initial();
        assert!(!store.has_data());
        assert_eq!(store.active_category(), None);

        let mut store = loaded_store(SAMPLE);
        store.filter_quotes("Nonexistent");
        store.select_initial();
        assert_ne!(store.active_category(), Some("Nonexistent"));
        assert_ne!(store.current_quote(), messages::EMPTY_CATEGORY);
    }

    #[test]
    fn test_listeners_receive_snapshots() {
        let seen: Rc<RefCell<Vec<StoreSnapshot>>> = Rc::new(RefCell::new(Vec::new()));
        let mut store = seeded_store();
        let sink = Rc::clone(&seen);
        store.subscribe(move |snapshot| sink.borrow_mut().push(snapshot.clone()));

        store.load(SAMPLE);
        store.filter_quotes("Humor");
        store.next_quote();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!(seen.iter().all(|s| s.has_data));
        assert_eq!(seen[1].active_category.as_deref(), Some("Humor"));
        assert_eq!(seen[1].current_quote, "h1");
        assert_eq!(seen[2], store.snapshot());
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = tempdir().unwrap();
        let mut store = seeded_store();
        let result = store.load_from_source(&FileSource::new(temp_dir.path().join("quotes.txt")));

        assert_eq!(result, LoadResult::Failed(StoreError::ResourceMissing));
        assert!(!store.has_data());
        assert_eq!(store.current_quote(), messages::RESOURCE_MISSING);
    }

    #[test]
    fn test_load_from_unreadable_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("quotes.txt");
        std::fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        let mut store = loaded_store(SAMPLE);
        let result = store.load_from_source(&FileSource::new(&path));

        assert!(matches!(
            result,
            LoadResult::Failed(StoreError::ResourceUnreadable { .. })
        ));
        assert!(!store.has_data());
        assert!(store.categories().is_empty());
        assert_eq!(store.current_quote(), messages::RESOURCE_UNREADABLE);
    }

    #[test]
    fn test_load_from_text_source() {
        let mut store = seeded_store();
        let result = store.load_from_source(&TextSource::new(SAMPLE));
        assert!(result.is_success());
        assert_eq!(result.message(), "Loaded 4 categories, 6 quotes");
    }

    #[test]
    fn test_index_exclusion_is_uniform_over_others() {
        let mut store = loaded_store("[A]\n0\n1\n2\n3\n");
        store.filter_quotes("A");
        store.current_index = 1;

        let mut hits = [0usize; 4];
        for _ in 0..4000 {
            hits[store.index_excluding_current(4)] += 1;
        }
        assert_eq!(hits[1], 0);
        for (index, count) in hits.iter().enumerate() {
            if index != 1 {
                assert!(*count > 1000, "index {} hit {} times", index, count);
            }
        }
    }
}
