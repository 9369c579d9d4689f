//! Quote Viewer Commands
//!
//! Command definitions and parsing for the quote viewer. Commands reach the
//! app either as single key presses or as `/command` entries picked from the
//! command menu.

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Available viewer commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteCommand {
    Next,
    Categories,
    Home,
    About,
    SwitchTab,
    Help,
    Quit,
}

impl QuoteCommand {
    /// Parse a command name into a QuoteCommand
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "next" | "n" => Some(Self::Next),
            "categories" | "category" | "cat" | "c" => Some(Self::Categories),
            "home" => Some(Self::Home),
            "about" | "a" => Some(Self::About),
            "tab" => Some(Self::SwitchTab),
            "help" | "h" | "?" => Some(Self::Help),
            "quit" | "exit" | "q" => Some(Self::Quit),
            _ => None,
        }
    }

    /// Map a key press to a command
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(Self::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Enter => Some(Self::Next),
            KeyCode::Char('c') => Some(Self::Categories),
            KeyCode::Char('h') | KeyCode::Left => Some(Self::Home),
            KeyCode::Char('a') | KeyCode::Right => Some(Self::About),
            KeyCode::Tab | KeyCode::BackTab => Some(Self::SwitchTab),
            KeyCode::Char('?') => Some(Self::Help),
            KeyCode::Char('q') | KeyCode::Esc => Some(Self::Quit),
            _ => None,
        }
    }

    /// Get command description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Next => "Show another quote",
            Self::Categories => "Choose a category",
            Self::Home => "Go to the quote screen",
            Self::About => "Go to the about screen",
            Self::SwitchTab => "Switch between tabs",
            Self::Help => "Show key bindings",
            Self::Quit => "Exit the application",
        }
    }

    /// Keys bound to the command, for the help listing
    pub fn keys(&self) -> &'static str {
        match self {
            Self::Next => "n / Space / Enter",
            Self::Categories => "c",
            Self::Home => "h / ←",
            Self::About => "a / →",
            Self::SwitchTab => "Tab",
            Self::Help => "?",
            Self::Quit => "q / Esc / Ctrl+C",
        }
    }

    /// Only `Next` depends on loaded quote data
    pub fn requires_data(&self) -> bool {
        matches!(self, Self::Next)
    }

    /// Get all available commands
    pub fn all_commands() -> Vec<Self> {
        vec![
            Self::Next,
            Self::Categories,
            Self::Home,
            Self::About,
            Self::SwitchTab,
            Self::Help,
            Self::Quit,
        ]
    }

    /// Get formatted command list for the command menu
    pub fn get_command_menu() -> Vec<String> {
        Self::all_commands()
            .into_iter()
            .map(|cmd| format!("/{} - {}", cmd.name(), cmd.description()))
            .collect()
    }

    /// Get help lines for every command
    pub fn get_help_text() -> Vec<String> {
        Self::all_commands()
            .into_iter()
            .map(|cmd| format!("{:<18} {}", cmd.keys(), cmd.description()))
            .collect()
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Next => "next",
            Self::Categories => "categories",
            Self::Home => "home",
            Self::About => "about",
            Self::SwitchTab => "tab",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}

impl fmt::Display for QuoteCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Next => "Next",
            Self::Categories => "Categories",
            Self::Home => "Home",
            Self::About => "About",
            Self::SwitchTab => "SwitchTab",
            Self::Help => "Help",
            Self::Quit => "Quit",
        };
        write!(f, "{}", name)
    }
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Info(String),
    Warning(String),
    Exit,
    NoOp,
}

impl CommandResult {
    /// Get the message content if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Info(msg) | Self::Warning(msg) => Some(msg),
            Self::Exit | Self::NoOp => None,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

/// Command parser and utilities
pub struct CommandParser;

impl CommandParser {
    /// Parse a `/command` line, or a command menu entry, into a command
    pub fn parse_command_line(input: &str) -> Option<QuoteCommand> {
        let trimmed = input.trim();
        let without_prefix = trimmed.strip_prefix('/')?;
        let name = without_prefix
            .split(" - ")
            .next()
            .and_then(|part| part.split_whitespace().next())?;

        QuoteCommand::from_str(name)
    }
}
