//! Bluesky public AppView client

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::error::{RecapError, Result};
use crate::feed::{FeedPage, FeedSource};

const AUTHOR_FEED_METHOD: &str = "app.bsky.feed.getAuthorFeed";

/// Unauthenticated client for `app.bsky.feed.getAuthorFeed`
///
/// No retries and no request timeout: the first failure is returned to the
/// caller, and a stalled connection blocks until the peer gives up.
pub struct BlueskyFeedClient {
    client: reqwest::Client,
    base_url: String,
    page_limit: u32,
}

impl BlueskyFeedClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(client: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            page_limit: config.page_limit,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, AUTHOR_FEED_METHOD)
    }
}

#[async_trait]
impl FeedSource for BlueskyFeedClient {
    async fn fetch_page(&self, actor: &str, cursor: Option<&str>) -> Result<FeedPage> {
        let limit = self.page_limit.to_string();
        let mut query: Vec<(&str, &str)> = vec![("actor", actor), ("limit", &limit)];
        if let Some(cursor) = cursor.filter(|c| !c.is_empty()) {
            query.push(("cursor", cursor));
        }

        tracing::debug!(actor, cursor, "Requesting author feed page");

        let response = self
            .client
            .get(self.endpoint())
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Author feed request failed with status {}", status);
            return Err(RecapError::from_status(status));
        }

        let page: FeedPage = response.json().await?;
        tracing::debug!(
            items = page.feed.len(),
            has_cursor = page.cursor.is_some(),
            "Received author feed page"
        );

        Ok(page)
    }
}
