//! HTTP client shared by the API clients
//!
//! Wraps `reqwest` with the retry policy: server errors (500, 502, 503),
//! connection failures and timeouts (including while reading the body) are
//! retried with exponential backoff, while 204 and 404 are reported as
//! "not found" rather than as errors.

use crate::config::Config;
use crate::error::{CliError, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

/// Statuses worth retrying.
const RETRY_STATUSES: [StatusCode; 3] = [
    StatusCode::INTERNAL_SERVER_ERROR,
    StatusCode::BAD_GATEWAY,
    StatusCode::SERVICE_UNAVAILABLE,
];

/// Statuses meaning the requested accession does not exist.
const NOT_FOUND_STATUSES: [StatusCode; 2] = [StatusCode::NO_CONTENT, StatusCode::NOT_FOUND];

/// HTTP client with retry policy
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: Config,
}

impl HttpClient {
    /// Create a client from configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("ipr2jalview/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// GET `url` and return the body, or `None` when the resource does
    /// not exist.
    ///
    /// `service` names the upstream in errors and logs.
    pub async fn get_text(&self, service: &'static str, url: &str) -> Result<Option<String>> {
        let mut attempt = 0;

        loop {
            debug!(service, url, attempt, "Sending request");

            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();

                    if NOT_FOUND_STATUSES.contains(&status) {
                        debug!(service, url, status = status.as_u16(), "Resource not found");
                        return Ok(None);
                    }

                    if RETRY_STATUSES.contains(&status) && attempt < self.config.max_retries {
                        attempt += 1;
                        warn!(
                            service,
                            url,
                            status = status.as_u16(),
                            attempt,
                            max_retries = self.config.max_retries,
                            "Server error, retrying"
                        );
                        tokio::time::sleep(self.config.retry_delay(attempt)).await;
                        continue;
                    }

                    if !status.is_success() {
                        return Err(CliError::api(service, url, status.as_u16()));
                    }

                    match response.text().await {
                        Ok(body) => return Ok(Some(body)),
                        Err(err) if is_transient(&err) && attempt < self.config.max_retries => {
                            attempt += 1;
                            warn!(
                                service,
                                url,
                                error = %err,
                                attempt,
                                max_retries = self.config.max_retries,
                                "Reading response body failed, retrying"
                            );
                            tokio::time::sleep(self.config.retry_delay(attempt)).await;
                        },
                        Err(err) => return Err(err.into()),
                    }
                },
                Err(err) if is_transient(&err) && attempt < self.config.max_retries => {
                    attempt += 1;
                    warn!(
                        service,
                        url,
                        error = %err,
                        attempt,
                        max_retries = self.config.max_retries,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(self.config.retry_delay(attempt)).await;
                },
                Err(err) => return Err(err.into()),
            }
        }
    }
}

fn is_transient(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout()
}
