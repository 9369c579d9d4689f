//! Logger setup. Log output goes to a file so it never draws over the
//! terminal UI.

use std::fs::OpenOptions;
use std::io;

use log::LevelFilter;

use crate::cli::AppConfig;

/// Parse a level name, defaulting to `info` for anything unrecognised
pub fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

/// Initialise `env_logger` writing to the configured log file
pub fn init(config: &AppConfig) -> io::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    env_logger::Builder::new()
        .filter_level(parse_level(&config.log_level))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level(" off "), LevelFilter::Off);
        assert_eq!(parse_level("chatty"), LevelFilter::Info);
    }
}
