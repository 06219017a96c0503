//! Author feed sources
//!
//! A [`FeedSource`] returns one page of an account's author feed per call.
//! The production source is [`bluesky::BlueskyFeedClient`], which talks to
//! the public AppView; [`mock::MockFeed`] replays scripted pages for tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod bluesky;

// Mock source is available for all builds (not just tests) to support integration tests
pub mod mock;

/// One page of `app.bsky.feed.getAuthorFeed`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedPage {
    #[serde(default)]
    pub feed: Vec<FeedItem>,

    /// Continuation token for the next page; absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// A feed entry: the post plus an optional reason it appears in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub post: PostView,

    /// Present for reposts (`app.bsky.feed.defs#reasonRepost`) and pins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostView {
    #[serde(default)]
    pub uri: String,
    pub record: PostRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub text: String,
    pub created_at: String,

    /// Parent/root references when the post is a reply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<serde_json::Value>,
}

impl FeedItem {
    pub fn is_repost(&self) -> bool {
        self.reason.is_some()
    }

    pub fn is_reply(&self) -> bool {
        self.post.record.reply.is_some()
    }

    pub fn created_at(&self) -> &str {
        &self.post.record.created_at
    }

    pub fn text(&self) -> &str {
        &self.post.record.text
    }
}

/// Source of author feed pages
///
/// Implementations must return items newest first. The collector stops
/// paging at the first item older than the target year, so a source that
/// returns items out of order will silently lose posts.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch one page for `actor`, resuming at `cursor` when given
    ///
    /// # Errors
    ///
    /// Returns `RecapError::Api` for non-success HTTP responses and
    /// `RecapError::Unknown` for transport or decoding failures.
    async fn fetch_page(&self, actor: &str, cursor: Option<&str>) -> Result<FeedPage>;
}
