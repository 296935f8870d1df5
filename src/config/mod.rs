//! Server configuration
//!
//! Loaded once at startup from the environment (and an optional `.env`
//! file), then passed explicitly to whatever needs it.

pub mod env;

use crate::core::{Logger, DEBUG_TIME_FORMAT};
use crate::error::{KageError, Result};
use crate::{fatal, success};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

impl ServerConfig {
    /// Parse configuration from `lookup`
    ///
    /// `PORT` falls back to [`DEFAULT_PORT`] when unset or not a valid port
    /// number. A `PORT` that is set but empty, or zero, is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port(env::string_var(&lookup, "PORT"))?;
        let debug = env::bool_var(&lookup, "DEBUG", false);

        Ok(Self { port, debug })
    }

    /// Load from `.env` and the process environment
    ///
    /// Exits the process when the port is unusable.
    pub fn load() -> Self {
        // A missing .env file is fine; variables already set take precedence.
        let _ = dotenvy::dotenv();
        Self::load_with(|key| std::env::var(key).ok())
    }

    /// Load through `lookup`, reporting the outcome on a "Config" logger
    pub fn load_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = env::bool_var(&lookup, "DEBUG", false);
        let log = subsystem_logger("Config", debug);

        match Self::from_lookup(&lookup) {
            Ok(config) => {
                success!(log, "Configuration loaded successfully");
                config
            }
            Err(err) => fatal!(log, "{}", err),
        }
    }

    /// Logger for `subsystem`, timestamped when running in debug mode
    pub fn logger(&self, subsystem: &str) -> Logger {
        subsystem_logger(subsystem, self.debug)
    }
}

fn subsystem_logger(subsystem: &str, debug: bool) -> Logger {
    let log = Logger::new().with_prefix(subsystem);
    if debug {
        log.with_timestamp().with_time_format(DEBUG_TIME_FORMAT)
    } else {
        log
    }
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    match raw.as_deref() {
        None => Ok(DEFAULT_PORT),
        Some("") => Err(KageError::PortNotSet),
        Some(value) => match value.parse::<u16>() {
            Ok(0) => Err(KageError::PortNotSet),
            Ok(port) => Ok(port),
            Err(_) => Ok(DEFAULT_PORT),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TimestampFormat;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 3000);
        assert!(!config.debug);
    }

    #[test]
    fn test_explicit_values() {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("PORT", " 8080 "), ("DEBUG", "true")]))
                .unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.debug);
    }

    #[test]
    fn test_non_numeric_port_falls_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "abc")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);

        let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_zero_or_empty_port_is_rejected() {
        for value in ["0", "", "   "] {
            let result = ServerConfig::from_lookup(lookup_from(&[("PORT", value)]));
            assert!(
                matches!(result, Err(KageError::PortNotSet)),
                "PORT={:?} should be rejected",
                value
            );
        }
    }

    #[test]
    fn test_invalid_debug_falls_back() {
        let config = ServerConfig::from_lookup(lookup_from(&[("DEBUG", "yes")])).unwrap();
        assert!(!config.debug);
    }

    #[test]
    fn test_load_with_valid_config() {
        let config = ServerConfig::load_with(lookup_from(&[("PORT", "4000")]));
        assert_eq!(config.port, 4000);
    }

    #[test]
    fn test_subsystem_logger_follows_debug_mode() {
        let config = ServerConfig {
            port: DEFAULT_PORT,
            debug: true,
        };
        let log = config.logger("Main Process");
        assert_eq!(log.prefix(), Some("Main Process"));
        assert!(log.config().timestamp);
        assert_eq!(
            log.config().time_format,
            TimestampFormat::from(DEBUG_TIME_FORMAT)
        );

        let log = ServerConfig::default().logger("Main Process");
        assert!(!log.config().timestamp);
    }
}
