//! Quotebook - Main Entry Point
//!
//! Loads configuration, starts file logging, reads the quotes asset once and
//! hands the loaded store to the terminal viewer.

use std::process;

use log::{info, warn};
use quotebook::cli::{AppConfig, QuoteApp, CONFIG_FILE_NAME};
use quotebook::logging;
use quotebook::store::{BundledSource, FileSource, QuoteSource, QuoteStore};

fn main() {
    let config = match AppConfig::load(CONFIG_FILE_NAME) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            eprintln!("Fix or remove {} and restart.", CONFIG_FILE_NAME);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init(&config) {
        eprintln!(
            "WARNING: cannot open log file {}: {}",
            config.log_file.display(),
            e
        );
        eprintln!("Continuing without logging...");
    }

    let source = quote_source(&config);
    let mut store = QuoteStore::new();
    let result = store.load_from_source(source.as_ref());
    if result.is_success() {
        info!("{}", result.message());
    } else {
        warn!("Starting without quote data: {}", result.message());
    }

    let mut app = QuoteApp::new(config, store);
    if let Err(e) = app.run() {
        eprintln!("\nERROR: Quotebook encountered an error: {}", e);
        eprintln!("Please check your terminal compatibility and try again.");
        process::exit(1);
    }
}

/// The configured quotes file, or the bundled asset when none is set
fn quote_source(config: &AppConfig) -> Box<dyn QuoteSource> {
    match &config.quotes_file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(BundledSource),
    }
}
