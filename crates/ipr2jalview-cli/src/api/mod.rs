//! Upstream API clients
//!
//! HTTP clients for the InterPro and UniProt REST APIs, behind the
//! [`AnnotationSource`] and [`IdentifierResolver`] traits the convert
//! command is written against.

pub mod client;
pub mod endpoints;
pub mod interpro;
pub mod uniprot;

pub use client::HttpClient;
pub use interpro::InterProClient;
pub use uniprot::UniProtClient;

use crate::error::Result;
use async_trait::async_trait;
use ipr2jalview_common::types::AnnotationRecord;

/// Source of annotation records for a protein accession
#[async_trait]
pub trait AnnotationSource: Send + Sync {
    /// Every annotation record for `accession`, in service order
    async fn fetch_annotations(&self, accession: &str) -> Result<Vec<AnnotationRecord>>;
}

/// Lookup of a protein's canonical short name
#[async_trait]
pub trait IdentifierResolver: Send + Sync {
    /// Entry name for `accession` (e.g. `INS_HUMAN` for `P01308`)
    async fn resolve_identifier(&self, accession: &str) -> Result<String>;
}
