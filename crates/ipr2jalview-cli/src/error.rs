//! Error types for the ipr2jalview CLI
//!
//! Every variant is shown to the user as-is, so messages say what went
//! wrong and what to try next.

use ipr2jalview_common::IprError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Accession unknown to an upstream service
    #[error("Accession '{accession}' not found in {service}. Check the UniProt accession is correct.")]
    NotFound {
        service: &'static str,
        accession: String,
    },

    /// Upstream service answered with an unexpected status
    #[error("{service} request to {url} failed with HTTP {status}.")]
    Api {
        service: &'static str,
        url: String,
        status: u16,
    },

    /// Conversion pipeline failed (palette, output file, malformed annotations)
    #[error(transparent)]
    Pipeline(#[from] IprError),

    /// HTTP request failed
    #[error("Network request failed: {0}. Check your internet connection and the API URLs.")]
    Http(#[from] reqwest::Error),

    /// UniProt XML could not be parsed
    #[error("Failed to parse UniProt XML: {0}")]
    XmlParse(#[from] quick_xml::DeError),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your IPR2JALVIEW_* environment variables.")]
    Config(String),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create a not-found error
    pub fn not_found(service: &'static str, accession: impl Into<String>) -> Self {
        Self::NotFound {
            service,
            accession: accession.into(),
        }
    }

    /// Create an API status error
    pub fn api(service: &'static str, url: impl Into<String>, status: u16) -> Self {
        Self::Api {
            service,
            url: url.into(),
            status,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
