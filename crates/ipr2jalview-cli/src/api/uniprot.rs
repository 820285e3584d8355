//! UniProtKB REST API client
//!
//! Resolves a UniProt accession to its entry name (the `<name>` element
//! of the entry XML, e.g. `INS_HUMAN` for `P01308`).

use super::{endpoints, HttpClient, IdentifierResolver};
use crate::error::{CliError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

const SERVICE: &str = "UniProt";

/// `<uniprot>` root element
#[derive(Debug, Deserialize)]
struct UniProtDocument {
    #[serde(rename = "entry", default)]
    entries: Vec<UniProtEntry>,
}

/// `<entry>` element; only the entry name is read
#[derive(Debug, Deserialize)]
struct UniProtEntry {
    #[serde(default)]
    name: Option<String>,
}

/// Extract the first entry name from a UniProt XML document
pub fn parse_entry_name(xml: &str) -> Result<Option<String>> {
    let document: UniProtDocument = quick_xml::de::from_str(xml)?;

    Ok(document
        .entries
        .into_iter()
        .filter_map(|entry| entry.name)
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty()))
}

/// Client for UniProtKB entry lookups
#[derive(Debug, Clone)]
pub struct UniProtClient {
    http: HttpClient,
    base_url: String,
}

impl UniProtClient {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl IdentifierResolver for UniProtClient {
    async fn resolve_identifier(&self, accession: &str) -> Result<String> {
        let url = endpoints::uniprot_entry_xml_url(&self.base_url, accession);

        let xml = self
            .http
            .get_text(SERVICE, &url)
            .await?
            .ok_or_else(|| CliError::not_found(SERVICE, accession))?;

        let name = parse_entry_name(&xml)?.ok_or_else(|| CliError::not_found(SERVICE, accession))?;

        info!(accession, name = %name, "Resolved UniProt entry name");
        Ok(name)
    }
}
