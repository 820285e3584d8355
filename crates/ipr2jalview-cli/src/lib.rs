//! ipr2jalview CLI Library
//!
//! Fetches the InterPro annotations of a UniProt protein and writes them
//! as a Jalview sequence features file, one colour per feature type.
//!
//! # Overview
//!
//! - **API clients**: InterPro entry lookup and UniProt entry name
//!   resolution, with retry on server errors (`api`)
//! - **Conversion**: fetch, filter, colour and write (`commands::convert`)
//! - **Configuration**: API URLs, timeouts and retry policy (`config`)

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod progress;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};

use clap::{ArgAction, Parser};
use commands::convert::ConvertOptions;
use std::path::PathBuf;

/// ipr2jalview - InterPro annotations as Jalview features
#[derive(Parser, Debug)]
#[command(name = "ipr2jalview")]
#[command(
    author,
    version,
    about = "Obtains InterPro annotations for a UniProt accession and formats them as Jalview features",
    long_about = None
)]
pub struct Cli {
    /// UniProt accession to request
    #[arg(short, long)]
    pub accession: String,

    /// Output file to create
    #[arg(short, long)]
    pub output: PathBuf,

    /// InterPro entries to include, e.g. IPR000001. May be given multiple times
    #[arg(short = 'i', long = "interpro", value_name = "IPR", num_args = 1.., action = ArgAction::Append)]
    pub interpro: Option<Vec<String>>,

    /// Label features with the UniProt entry name rather than the accession
    #[arg(short = 'u', long = "uniprot-id", visible_alias = "uniprot_id")]
    pub uniprot_id: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// InterPro API base URL (overrides IPR2JALVIEW_INTERPRO_URL)
    #[arg(long, value_name = "URL")]
    pub interpro_url: Option<String>,

    /// UniProtKB API base URL (overrides IPR2JALVIEW_UNIPROT_URL)
    #[arg(long, value_name = "URL")]
    pub uniprot_url: Option<String>,
}

impl Cli {
    /// Conversion options described by the arguments
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            accession: self.accession.clone(),
            output: self.output.clone(),
            include: self.interpro.clone(),
            use_uniprot_id: self.uniprot_id,
        }
    }
}
