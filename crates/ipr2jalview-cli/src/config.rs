//! Configuration management for the ipr2jalview CLI
//!
//! API endpoints, timeouts and retry policy, read from the environment
//! (and a `.env` file when present).

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Default InterPro REST API base URL.
pub const DEFAULT_INTERPRO_URL: &str = "https://www.ebi.ac.uk/interpro/api";

/// Default UniProtKB REST API base URL.
pub const DEFAULT_UNIPROT_URL: &str = "https://rest.uniprot.org/uniprotkb";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of retries after a server error.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Default base delay between retries in milliseconds, doubled per attempt.
pub const DEFAULT_RETRY_BACKOFF_MS: u64 = 1000;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// InterPro API base URL
    pub interpro_url: String,

    /// UniProtKB API base URL
    pub uniprot_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Retries after a server error before giving up
    pub max_retries: u32,

    /// Base retry delay in milliseconds
    pub retry_backoff_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interpro_url: DEFAULT_INTERPRO_URL.to_string(),
            uniprot_url: DEFAULT_UNIPROT_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff_ms: DEFAULT_RETRY_BACKOFF_MS,
        }
    }
}

impl Config {
    /// Load config from environment variables
    ///
    /// - `IPR2JALVIEW_INTERPRO_URL`
    /// - `IPR2JALVIEW_UNIPROT_URL`
    /// - `IPR2JALVIEW_TIMEOUT_SECS`
    /// - `IPR2JALVIEW_MAX_RETRIES`
    /// - `IPR2JALVIEW_RETRY_BACKOFF_MS`
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            interpro_url: std::env::var("IPR2JALVIEW_INTERPRO_URL")
                .unwrap_or(defaults.interpro_url),
            uniprot_url: std::env::var("IPR2JALVIEW_UNIPROT_URL").unwrap_or(defaults.uniprot_url),
            timeout_secs: parse_var("IPR2JALVIEW_TIMEOUT_SECS")?.unwrap_or(defaults.timeout_secs),
            max_retries: parse_var("IPR2JALVIEW_MAX_RETRIES")?.unwrap_or(defaults.max_retries),
            retry_backoff_ms: parse_var("IPR2JALVIEW_RETRY_BACKOFF_MS")?
                .unwrap_or(defaults.retry_backoff_ms),
        };

        config.validate()?;
        Ok(config)
    }

    /// Replace the API URLs given on the command line
    pub fn with_urls(mut self, interpro_url: Option<String>, uniprot_url: Option<String>) -> Self {
        if let Some(url) = interpro_url {
            self.interpro_url = url;
        }
        if let Some(url) = uniprot_url {
            self.uniprot_url = url;
        }
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.interpro_url.trim().is_empty() {
            return Err(CliError::config("InterPro URL must not be empty"));
        }
        if self.uniprot_url.trim().is_empty() {
            return Err(CliError::config("UniProt URL must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(CliError::config("Request timeout must be greater than 0"));
        }
        Ok(())
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Delay before retry number `attempt` (1-based): `backoff * 2^(attempt - 1)`
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        let factor = 2u64.saturating_pow(attempt.saturating_sub(1));
        Duration::from_millis(self.retry_backoff_ms.saturating_mul(factor))
    }
}

/// Parse an optional numeric environment variable
fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CliError::config(format!("{name} has invalid value '{value}'"))),
        Err(_) => Ok(None),
    }
}
