//! Fixed display strings shown in place of a quote.

/// Shown before the first load completes
pub const LOADING: &str = "Loading...";
pub const RESOURCE_MISSING: &str = "Error: the quotes file could not be found";
pub const RESOURCE_UNREADABLE: &str = "Error: the quotes file could not be read";
pub const MALFORMED_DATA: &str = "Error: the quotes file is not formatted correctly";
pub const NO_DATA: &str = "No quote data available";
pub const EMPTY_CATEGORY: &str = "There are no quotes in this category";
pub const NO_QUOTES_ANYWHERE: &str = "None of the categories contain any quotes";
