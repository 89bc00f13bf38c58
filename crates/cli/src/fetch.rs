//! HTTP logo fetcher

use invoice_template::{LogoError, LogoFetcher};
use std::time::Duration;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches logo bytes over HTTP(S) with a single GET
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, LogoError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| LogoError::Fetch(e.to_string()))?;
        Ok(Self { client })
    }
}

impl LogoFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LogoError> {
        log::debug!("fetching logo from {url}");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| LogoError::Fetch(e.to_string()))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| LogoError::Fetch(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
