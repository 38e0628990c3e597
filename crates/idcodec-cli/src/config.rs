//! Configuration loading and validation for the `idcodec` tool.
//!
//! All values are read from environment variables at startup. The process
//! exits with a clear error message if any required variable is missing or
//! invalid.

use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use idcodec::crypto::{KeyBytes, KEY_LEN};
use serde::Deserialize;

/// Validated tool configuration.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Base64 (standard alphabet) of the 32-byte token key. **Required.**
    pub idcodec_key: String,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is absent or cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build idcodec configuration")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise idcodec configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Decode the configured key into its raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `IDCODEC_KEY` is not base64 or not [`KEY_LEN`] bytes.
    pub fn key(&self) -> Result<KeyBytes> {
        let raw = STANDARD
            .decode(self.idcodec_key.trim())
            .context("IDCODEC_KEY must be standard base64")?;
        KeyBytes::from_slice(&raw).context("IDCODEC_KEY has the wrong length")
    }

    fn validate(&self) -> Result<()> {
        if self.idcodec_key.trim().is_empty() {
            anyhow::bail!("IDCODEC_KEY is required and must not be empty");
        }
        self.key()?;
        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("idcodec_key", &"[REDACTED]")
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> Config {
        Config {
            idcodec_key: key.into(),
            log_level: default_log_level(),
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(default_log_level(), "info");
    }

    #[test]
    fn validate_rejects_empty_key() {
        assert!(config_with_key("  ").validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_base64() {
        assert!(config_with_key("not base64!").validate().is_err());
    }

    #[test]
    fn validate_rejects_short_key() {
        let short = STANDARD.encode([0x42u8; 16]);
        assert!(config_with_key(&short).validate().is_err());
    }

    #[test]
    fn validate_accepts_valid_config() {
        let key = STANDARD.encode([0x42u8; KEY_LEN]);
        let cfg = config_with_key(&key);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.key().unwrap().as_bytes(), &[0x42u8; KEY_LEN]);
    }

    #[test]
    fn debug_redacts_key() {
        let key = STANDARD.encode([0x42u8; KEY_LEN]);
        let shown = format!("{:?}", config_with_key(&key));
        assert!(shown.contains("REDACTED"));
        assert!(!shown.contains(&key));
    }
}
