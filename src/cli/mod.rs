//! Terminal Presentation Module
//!
//! Full-screen terminal front end for the quote store: a home tab showing the
//! current quote, an about tab, and menus for categories and commands.
//!
//! ## Module Structure
//!
//! - `config` - Display, source and logging configuration
//! - `commands` - Command definitions, key bindings and parsing
//! - `view` - View models derived from store state
//! - `app` - Event loop and rendering

pub mod app;
pub mod commands;
pub mod config;
pub mod view;

pub use app::QuoteApp;
pub use commands::{CommandParser, CommandResult, QuoteCommand};
pub use config::{AppConfig, CONFIG_FILE_NAME};
pub use view::{CategoryEntry, HomeView, Tab};
