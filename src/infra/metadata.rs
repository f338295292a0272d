//! HTTP client of the external metadata provider.
//!
//! Contract: `GET <base>/info?group=<g>&song=<s>` answers
//! `{text, releaseDate, link}`.

use std::time::Duration;

use crate::domain::song::SongInfo;
use crate::domain::song::enrichment::{EnrichmentError, MetadataProvider};

const USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone)]
pub struct HttpMetadataProvider {
    http_client: reqwest::Client,
    base_url: Option<String>,
}

impl HttpMetadataProvider {
    /// An empty or missing base url leaves the provider unconfigured, every
    /// fetch then fails with [`EnrichmentError::NotConfigured`].
    pub fn new(
        base_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: base_url
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
        })
    }

    fn info_url(&self) -> Result<String, EnrichmentError> {
        self.base_url
            .as_deref()
            .map(|base| format!("{base}/info"))
            .ok_or(EnrichmentError::NotConfigured)
    }
}

impl MetadataProvider for HttpMetadataProvider {
    async fn fetch(
        &self,
        group: &str,
        song: &str,
    ) -> Result<SongInfo, EnrichmentError> {
        let url = self.info_url()?;

        let response = self
            .http_client
            .get(&url)
            .query(&[("group", group), ("song", song)])
            .send()
            .await
            .map_err(|e| EnrichmentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::Status(status.as_u16()));
        }

        response
            .json::<SongInfo>()
            .await
            .map_err(|e| EnrichmentError::Decode(e.to_string()))
    }
}
