//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Nothing is required; every variable has a default.
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export MAX_CODE_BYTES="51200"
//! export VIEWER_BASE_URL="https://www.plantuml.com/plantuml/svg/"
//! ```
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAX_CODE_BYTES` - Diagram size ceiling in UTF-8 bytes (default: 51200)
//! - `VIEWER_BASE_URL` - Prefix the token is appended to
//!   (default: `https://www.plantuml.com/plantuml/svg/`)
//! - `BODY_LIMIT_BYTES` - Maximum request body size (default: 1048576)

use anyhow::Result;
use std::env;
use url::Url;

use crate::domain::entities::DEFAULT_VIEWER_BASE_URL;
use crate::domain::validation::DEFAULT_MAX_CODE_BYTES;

const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Room for the `{"plantumlCode":""}` wrapper and surrounding whitespace.
const BODY_ENVELOPE_BYTES: usize = 64;

/// Smallest body limit that still admits every diagram of `max_code_bytes`.
///
/// A control character costs six bytes once JSON-escaped (`\u0001`), so the
/// worst case is six times the ceiling plus the wrapping object.
pub fn min_body_limit_bytes(max_code_bytes: usize) -> usize {
    max_code_bytes
        .saturating_mul(6)
        .saturating_add(BODY_ENVELOPE_BYTES)
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Ceiling applied by the validator, in UTF-8 bytes of the raw input.
    pub max_code_bytes: usize,
    /// Viewer URL prefix. Must end with `/` since tokens are appended as-is.
    pub viewer_base_url: String,
    /// Bodies above this size are rejected before JSON parsing.
    /// At least [`min_body_limit_bytes`] of `max_code_bytes`.
    pub body_limit_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            max_code_bytes: DEFAULT_MAX_CODE_BYTES,
            viewer_base_url: DEFAULT_VIEWER_BASE_URL.to_string(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let max_code_bytes = env::var("MAX_CODE_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CODE_BYTES);

        let viewer_base_url =
            env::var("VIEWER_BASE_URL").unwrap_or_else(|_| DEFAULT_VIEWER_BASE_URL.to_string());

        let body_limit_bytes = env::var("BODY_LIMIT_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BODY_LIMIT_BYTES);

        Self {
            listen_addr,
            log_level,
            log_format,
            max_code_bytes,
            viewer_base_url,
            body_limit_bytes,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `max_code_bytes` is zero
    /// - `viewer_base_url` is not an http(s) URL ending with `/`
    /// - `body_limit_bytes` is smaller than `max_code_bytes`
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.max_code_bytes == 0 {
            anyhow::bail!("MAX_CODE_BYTES must be greater than 0");
        }

        let viewer = Url::parse(&self.viewer_base_url).map_err(|e| {
            anyhow::anyhow!(
                "VIEWER_BASE_URL is not a valid URL ('{}'): {}",
                self.viewer_base_url,
                e
            )
        })?;

        if viewer.scheme() != "http" && viewer.scheme() != "https" {
            anyhow::bail!(
                "VIEWER_BASE_URL must use http or https, got '{}'",
                self.viewer_base_url
            );
        }

        if !self.viewer_base_url.ends_with('/') {
            anyhow::bail!(
                "VIEWER_BASE_URL must end with '/', got '{}'",
                self.viewer_base_url
            );
        }

        let min_body_limit = min_body_limit_bytes(self.max_code_bytes);
        if self.body_limit_bytes < min_body_limit {
            anyhow::bail!(
                "BODY_LIMIT_BYTES ({}) must be at least {} to fit an escaped diagram of MAX_CODE_BYTES ({})",
                self.body_limit_bytes,
                min_body_limit,
                self.max_code_bytes
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Max code size: {} bytes", self.max_code_bytes);
        tracing::info!("  Viewer base URL: {}", self.viewer_base_url);
        tracing::info!("  Body limit: {} bytes", self.body_limit_bytes);
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

    const VARS: [&str; 6] = [
        "LISTEN",
        "RUST_LOG",
        "LOG_FORMAT",
        "MAX_CODE_BYTES",
        "VIEWER_BASE_URL",
        "BODY_LIMIT_BYTES",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially via #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:3000".to_string();
        config.max_code_bytes = 0;
        assert!(config.validate().is_err());

        config.max_code_bytes = DEFAULT_MAX_CODE_BYTES;
        config.body_limit_bytes = 1024;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_body_limit_needs_escaping_headroom() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.body_limit_bytes = config.max_code_bytes;
        assert!(config.validate().is_err());

        config.body_limit_bytes = min_body_limit_bytes(config.max_code_bytes) - 1;
        assert!(config.validate().is_err());

        config.body_limit_bytes = min_body_limit_bytes(config.max_code_bytes);
        assert!(config.validate().is_ok());

        assert_eq!(min_body_limit_bytes(DEFAULT_MAX_CODE_BYTES), 307_264);
        assert_eq!(min_body_limit_bytes(usize::MAX), usize::MAX);
    }

    #[test]
    fn test_viewer_base_url_validation() {
        let mut config = Config::default();

        config.viewer_base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.viewer_base_url = "ftp://plantuml.example/svg/".to_string();
        assert!(config.validate().is_err());

        config.viewer_base_url = "https://plantuml.example/svg".to_string();
        assert!(config.validate().is_err());

        config.viewer_base_url = "http://localhost:8080/plantuml/png/".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.max_code_bytes, 51_200);
        assert_eq!(
            config.viewer_base_url,
            "https://www.plantuml.com/plantuml/svg/"
        );
        assert_eq!(config.body_limit_bytes, 1_048_576);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("MAX_CODE_BYTES", "1024");
            env::set_var("VIEWER_BASE_URL", "http://localhost/svg/");
            env::set_var("BODY_LIMIT_BYTES", "not-a-number");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.max_code_bytes, 1024);
        assert_eq!(config.viewer_base_url, "http://localhost/svg/");
        assert_eq!(config.body_limit_bytes, DEFAULT_BODY_LIMIT_BYTES);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_bad_format() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
