//! Application Configuration
//!
//! Display settings, the optional quotes file override and logging options.
//! Everything has a default so the app runs without any configuration file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "quotebook.json";

/// Configuration for the quote viewer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub about_text: String,
    pub frame_color: String,
    pub text_color: String,
    pub error_color: String,
    /// Quotes file to read instead of the bundled asset
    pub quotes_file: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Quotebook".to_string(),
            about_text: "Quotebook - a random quote for every moment".to_string(),
            frame_color: "Blue".to_string(),
            text_color: "White".to_string(),
            error_color: "Red".to_string(),
            quotes_file: None,
            log_file: PathBuf::from("quotebook.log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a JSON file, falling back to defaults when it
    /// does not exist
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid configuration in {}: {}", path.display(), e),
            )
        })
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Get frame color as Color
    pub fn get_frame_color(&self) -> Color {
        parse_color(&self.frame_color, Color::Blue)
    }

    /// Get text color as Color
    pub fn get_text_color(&self) -> Color {
        parse_color(&self.text_color, Color::White)
    }

    /// Get error color as Color
    pub fn get_error_color(&self) -> Color {
        parse_color(&self.error_color, Color::Red)
    }

    /// Get configuration summary for display
    pub fn get_summary(&self) -> Vec<String> {
        let quotes = self
            .quotes_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "bundled".to_string());

        vec![
            format!("Title: {}", self.title),
            format!("Frame Color: {}", self.frame_color),
            format!("Text Color: {}", self.text_color),
            format!("Error Color: {}", self.error_color),
            format!("Quotes File: {}", quotes),
            format!("Log File: {}", self.log_file.display()),
            format!("Log Level: {}", self.log_level),
        ]
    }
}

fn parse_color(name: &str, fallback: Color) -> Color {
    match name {
        "Black" => Color::Black,
        "White" => Color::White,
        "Gray" => Color::Gray,
        "DarkGray" => Color::DarkGray,
        "Blue" => Color::Blue,
        "DarkBlue" => Color::Indexed(18),
        "Cyan" => Color::Cyan,
        "Green" => Color::Green,
        "Magenta" => Color::Magenta,
        "Red" => Color::Red,
        "Yellow" => Color::Yellow,
        _ => fallback,
    }
}
