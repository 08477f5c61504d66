//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. The contacts file location is not configurable: it is always
//! `contacts.csv` in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the import/export file.
pub const CONTACTS_FILE_NAME: &str = "contacts.csv";

/// Accepted values for `LOG_LEVEL`.
const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Configuration for a contact book session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CSV file used by Export and Import
    pub contacts_path: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from the environment and working directory.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let working_dir = env::current_dir().map_err(ConfigError::WorkingDirectory)?;

        let log_level = match env::var("LOG_LEVEL") {
            Ok(level) => Self::parse_log_level(&level)?,
            Err(_) => "error".to_string(),
        };

        Ok(Config {
            log_level,
            ..Config::for_directory(&working_dir)
        })
    }

    /// Default configuration rooted at `dir`.
    pub fn for_directory(dir: &Path) -> Self {
        Config {
            contacts_path: dir.join(CONTACTS_FILE_NAME),
            log_level: "error".to_string(),
        }
    }

    /// Validate a log level name.
    fn parse_log_level(value: &str) -> ConfigResult<String> {
        let level = value.trim().to_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(level)
        } else {
            Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), value),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_for_directory() {
        let config = Config::for_directory(Path::new("/srv/book"));
        assert_eq!(config.contacts_path, PathBuf::from("/srv/book/contacts.csv"));
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_uses_working_directory() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "Debug");

        let config = Config::from_env().unwrap();
        let cwd = env::current_dir().unwrap();
        assert_eq!(config.contacts_path, cwd.join("contacts.csv"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "loud");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "LOG_LEVEL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(Config::parse_log_level(" WARN ").unwrap(), "warn");
        assert!(Config::parse_log_level("").is_err());
    }
}
