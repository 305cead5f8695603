use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

use crate::models::Story;

pub const HN_API_BASE: &str = "https://hacker-news.firebaseio.com/v0";

/// What can go wrong talking to the story API. "Not found" is not an error;
/// it is `Ok(None)` from [`StoryClient::story`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}")]
    Status { status: reqwest::StatusCode },
}

/// Capability interface over the story source, so the pipeline can run
/// against a deterministic in-memory double in tests.
#[async_trait]
pub trait StoryClient {
    /// Ids of the current top stories, in the source's ranking order.
    async fn top_stories(&self) -> Result<Vec<u64>, FetchError>;

    /// Detail for one story. `Ok(None)` means the id resolves to nothing.
    async fn story(&self, id: u64) -> Result<Option<Story>, FetchError>;
}

/// Live client for the Hacker News Firebase API.
pub struct HnClient {
    client: Client,
    base_url: String,
}

impl HnClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(HN_API_BASE)
    }

    /// `base_url` is injectable so tests can point at a local mock server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl StoryClient for HnClient {
    async fn top_stories(&self) -> Result<Vec<u64>, FetchError> {
        let url = format!("{}/topstories.json", self.base_url);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        Ok(response.json::<Vec<u64>>().await?)
    }

    async fn story(&self, id: u64) -> Result<Option<Story>, FetchError> {
        let url = format!("{}/item/{}.json", self.base_url, id);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        // The item endpoint answers `null` for unknown ids, which decodes
        // straight to None.
        Ok(response.json::<Option<Story>>().await?)
    }
}
