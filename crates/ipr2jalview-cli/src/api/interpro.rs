//! InterPro REST API client

use super::{endpoints, AnnotationSource, HttpClient};
use crate::error::{CliError, Result};
use async_trait::async_trait;
use ipr2jalview_common::types::{AnnotationPage, AnnotationRecord};
use std::collections::HashSet;
use tracing::{debug, info, warn};

const SERVICE: &str = "InterPro";

/// Client for the InterPro `entry/all/protein` endpoint
#[derive(Debug, Clone)]
pub struct InterProClient {
    http: HttpClient,
    base_url: String,
}

impl InterProClient {
    pub fn new(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AnnotationSource for InterProClient {
    /// Fetch every page of entries matching `accession`.
    ///
    /// Pages are followed through their `next` links and concatenated in
    /// order. A `next` link to a page already fetched ends the walk.
    async fn fetch_annotations(&self, accession: &str) -> Result<Vec<AnnotationRecord>> {
        let mut url = endpoints::interpro_entries_url(&self.base_url, accession);
        let mut records = Vec::new();
        let mut visited = HashSet::new();
        let mut page_number = 1;

        loop {
            visited.insert(url.clone());

            let body = match self.http.get_text(SERVICE, &url).await? {
                Some(body) => body,
                None if page_number == 1 => return Err(CliError::not_found(SERVICE, accession)),
                None => {
                    warn!(accession, url = %url, "Next page vanished, keeping pages fetched so far");
                    break;
                },
            };

            let page = AnnotationPage::from_json(&body)?;
            debug!(
                accession,
                page = page_number,
                entries = page.results.len(),
                total = ?page.count,
                "Fetched InterPro page"
            );
            records.extend(page.results);

            match page.next {
                Some(next) if !next.is_empty() && !visited.contains(&next) => {
                    url = next;
                    page_number += 1;
                },
                Some(next) if !next.is_empty() => {
                    warn!(accession, url = %next, "Next page already fetched, stopping");
                    break;
                },
                _ => break,
            }
        }

        info!(accession, entries = records.len(), "Fetched InterPro annotations");
        Ok(records)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn entry(accession: &str, entry_type: &str) -> serde_json::Value {
        json!({
            "metadata": {"accession": accession, "name": accession, "type": entry_type},
            "proteins": [{
                "accession": "p00533",
                "entry_protein_locations": [{"fragments": [{"start": 1, "end": 9}]}]
            }]
        })
    }

    fn client(server: &MockServer) -> InterProClient {
        let config = Config {
            retry_backoff_ms: 0,
            ..Config::default()
        };
        InterProClient::new(HttpClient::new(&config).unwrap(), server.uri())
    }

    #[tokio::test]
    async fn test_fetch_single_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/entry/all/protein/uniprot/P00533"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "next": null,
                "previous": null,
                "results": [entry("IPR1", "domain"), entry("IPR2", "family")]
            })))
            .mount(&server)
            .await;

        let records = client(&server).fetch_annotations("P00533").await.unwrap();

        let accessions: Vec<_> = records.iter().map(|r| r.accession()).collect();
        assert_eq!(accessions, vec!["IPR1", "IPR2"]);
    }

    #[tokio::test]
    async fn test_fetch_follows_next_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/entry/all/protein/uniprot/P00533"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 3,
                "next": format!("{}/page/2", server.uri()),
                "results": [entry("IPR1", "domain")]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/page/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 3,
                "next": null,
                "results": [entry("IPR2", "family"), entry("IPR3", "repeat")]
            })))
            .mount(&server)
            .await;

        let records = client(&server).fetch_annotations("P00533").await.unwrap();

        let accessions: Vec<_> = records.iter().map(|r| r.accession()).collect();
        assert_eq!(accessions, vec!["IPR1", "IPR2", "IPR3"]);
    }

    #[tokio::test]
    async fn test_pagination_cycle_stops() {
        let server = MockServer::start().await;
        let first = format!("{}/entry/all/protein/uniprot/P00533", server.uri());
        Mock::given(method("GET"))
            .and(path("/entry/all/protein/uniprot/P00533"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "next": format!("{}/page/2", server.uri()),
                "results": [entry("IPR1", "domain")]
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/page/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "next": first,
                "results": [entry("IPR2", "family")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let records = client(&server).fetch_annotations("P00533").await.unwrap();

        let accessions: Vec<_> = records.iter().map(|r| r.accession()).collect();
        assert_eq!(accessions, vec!["IPR1", "IPR2"]);
    }

    #[tokio::test]
    async fn test_vanished_later_page_keeps_earlier_pages() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/entry/all/protein/uniprot/P00533"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "next": format!("{}/page/2", server.uri()),
                "results": [entry("IPR1", "domain")]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/page/2"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let records = client(&server).fetch_annotations("P00533").await.unwrap();

        let accessions: Vec<_> = records.iter().map(|r| r.accession()).collect();
        assert_eq!(accessions, vec!["IPR1"]);
    }

    #[tokio::test]
    async fn test_no_content_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/entry/all/protein/uniprot/XXXXXX"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let err = client(&server).fetch_annotations("XXXXXX").await.unwrap_err();

        assert!(matches!(
            err,
            CliError::NotFound { service: "InterPro", ref accession } if accession == "XXXXXX"
        ));
    }

    #[tokio::test]
    async fn test_malformed_body_is_pipeline_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/entry/all/protein/uniprot/P00533"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let err = client(&server).fetch_annotations("P00533").await.unwrap_err();
        assert!(matches!(err, CliError::Pipeline(_)));
    }
}
