//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! None - everything has a default for local development.
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite:domain_rotator.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CHECK_INTERVAL_SECS` - Seconds between scheduled health-check runs
//!   (default: 300)
//! - `PROBE_TIMEOUT_SECS` - Per-domain probe timeout (default: 5, max: 60)
//! - `PROBE_CONCURRENCY` - Probes in flight per run (default: 8, max: 64)
//! - `RECHECK_UNSAFE` - Re-probe domains already marked unsafe (default:
//!   false)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Interval between scheduled health-check runs, in seconds.
    pub check_interval_secs: u64,
    /// Outbound probe timeout per domain, in seconds.
    pub probe_timeout_secs: u64,
    /// Maximum probes in flight during a health-check run.
    pub probe_concurrency: usize,
    /// When true, runs re-probe domains already classified `unsafe` instead
    /// of skipping them.
    pub recheck_unsafe: bool,
    pub db_max_connections: u32,
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:domain_rotator.db".to_string()),
            listen_addr: env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string()),
            check_interval_secs: env_parse("CHECK_INTERVAL_SECS", 300),
            probe_timeout_secs: env_parse("PROBE_TIMEOUT_SECS", 5),
            probe_concurrency: env_parse("PROBE_CONCURRENCY", 8),
            recheck_unsafe: env_flag("RECHECK_UNSAFE"),
            db_max_connections: env_parse("DB_MAX_CONNECTIONS", 5),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is outside its supported range.
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.check_interval_secs == 0 {
            anyhow::bail!("CHECK_INTERVAL_SECS must be greater than 0");
        }

        if self.probe_timeout_secs == 0 || self.probe_timeout_secs > 60 {
            anyhow::bail!(
                "PROBE_TIMEOUT_SECS must be between 1 and 60, got {}",
                self.probe_timeout_secs
            );
        }

        if self.probe_concurrency == 0 || self.probe_concurrency > 64 {
            anyhow::bail!(
                "PROBE_CONCURRENCY must be between 1 and 64, got {}",
                self.probe_concurrency
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Check interval: {}s", self.check_interval_secs);
        tracing::info!(
            "  Probe: {}s timeout, {} in flight, recheck_unsafe={}",
            self.probe_timeout_secs,
            self.probe_concurrency,
            self.recheck_unsafe
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            database_url: "sqlite:test.db".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            check_interval_secs: 300,
            probe_timeout_secs: 5,
            probe_concurrency: 8,
            recheck_unsafe: false,
            db_max_connections: 5,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());
        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:3000".to_string();

        config.log_format = "yaml".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.check_interval_secs = 0;
        assert!(config.validate().is_err());
        config.check_interval_secs = 60;

        config.probe_timeout_secs = 61;
        assert!(config.validate().is_err());
        config.probe_timeout_secs = 5;

        config.probe_concurrency = 0;
        assert!(config.validate().is_err());
        config.probe_concurrency = 65;
        assert!(config.validate().is_err());
        config.probe_concurrency = 8;

        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("LISTEN");
            env::remove_var("CHECK_INTERVAL_SECS");
            env::remove_var("RECHECK_UNSAFE");
        }

        let config = Config::from_env();
        assert_eq!(config.database_url, "sqlite:domain_rotator.db");
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.check_interval_secs, 300);
        assert_eq!(config.probe_timeout_secs, 5);
        assert!(!config.recheck_unsafe);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATABASE_URL", "sqlite:custom.db");
            env::set_var("CHECK_INTERVAL_SECS", "60");
            env::set_var("RECHECK_UNSAFE", "true");
        }

        let config = Config::from_env();
        assert_eq!(config.database_url, "sqlite:custom.db");
        assert_eq!(config.check_interval_secs, 60);
        assert!(config.recheck_unsafe);

        // Cleanup
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("CHECK_INTERVAL_SECS");
            env::remove_var("RECHECK_UNSAFE");
        }
    }

    #[test]
    #[serial]
    fn test_invalid_numbers_fall_back_to_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("CHECK_INTERVAL_SECS", "not-a-number");
        }

        let config = Config::from_env();
        assert_eq!(config.check_interval_secs, 300);

        unsafe {
            env::remove_var("CHECK_INTERVAL_SECS");
        }
    }
}
