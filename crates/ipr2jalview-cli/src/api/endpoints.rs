//! API endpoint URL builders

/// InterPro entries matching a UniProt protein
pub fn interpro_entries_url(base_url: &str, accession: &str) -> String {
    format!(
        "{}/entry/all/protein/uniprot/{}",
        base_url.trim_end_matches('/'),
        accession
    )
}

/// UniProtKB entry in XML format
pub fn uniprot_entry_xml_url(base_url: &str, accession: &str) -> String {
    format!("{}/{}.xml", base_url.trim_end_matches('/'), accession)
}
