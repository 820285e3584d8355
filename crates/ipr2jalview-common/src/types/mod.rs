//! InterPro annotation models
//!
//! Serde models for the InterPro REST response of
//! `entry/all/protein/uniprot/{accession}`. Only the fields the
//! conversion needs are modelled; everything else in the payload is
//! ignored during deserialization.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// One page of the InterPro API response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationPage {
    /// Total number of entries across all pages
    #[serde(default)]
    pub count: Option<u64>,

    /// URL of the next page, if the response is paginated
    #[serde(default)]
    pub next: Option<String>,

    /// Entries on this page
    #[serde(default, deserialize_with = "null_as_empty")]
    pub results: Vec<AnnotationRecord>,
}

impl AnnotationPage {
    /// Parse a page from the raw response body
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }
}

/// One InterPro entry matching the queried protein
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub metadata: EntryMetadata,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub proteins: Vec<ProteinMatch>,
}

impl AnnotationRecord {
    /// InterPro accession of the entry (e.g. `IPR000719`)
    pub fn accession(&self) -> &str {
        &self.metadata.accession
    }

    /// Entry type, used as the feature type (e.g. `domain`)
    pub fn entry_type(&self) -> &str {
        &self.metadata.entry_type
    }
}

/// Entry metadata block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryMetadata {
    pub accession: String,
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(default)]
    pub source_database: Option<String>,
}

/// A protein the entry was matched against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinMatch {
    pub accession: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub entry_protein_locations: Vec<Location>,
}

/// A match location, possibly discontinuous
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fragments: Vec<Fragment>,
}

/// Contiguous interval on the protein sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub start: u64,
    pub end: u64,
}

/// The API sends `null` instead of `[]` for some empty collections.
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
