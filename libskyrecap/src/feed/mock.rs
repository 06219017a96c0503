//! Scripted feed source for testing
//!
//! Replays a fixed sequence of pages (or errors) and records every request
//! so tests can assert how far the collector paged.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::error::{RecapError, Result};
use crate::feed::{FeedItem, FeedPage, FeedSource, PostRecord, PostView};

/// One scripted response
#[derive(Debug, Clone)]
pub enum MockResponse {
    Page(FeedPage),
    ApiError { status: u16, reason: String },
}

/// Feed source that returns scripted responses in order
///
/// Requests past the end of the script fail with `RecapError::Unknown`.
#[derive(Debug, Clone, Default)]
pub struct MockFeed {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,

    /// Cursor passed on each request, in call order
    pub requested_cursors: Arc<Mutex<Vec<Option<String>>>>,

    /// Actor passed on each request, in call order
    pub requested_actors: Arc<Mutex<Vec<String>>>,
}

impl MockFeed {
    pub fn new(responses: Vec<MockResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            ..Default::default()
        }
    }

    /// Serve `pages` in order
    pub fn with_pages(pages: Vec<FeedPage>) -> Self {
        Self::new(pages.into_iter().map(MockResponse::Page).collect())
    }

    /// Fail the first request with the given HTTP status
    pub fn api_error(status: u16, reason: &str) -> Self {
        Self::new(vec![MockResponse::ApiError {
            status,
            reason: reason.to_string(),
        }])
    }

    pub fn call_count(&self) -> usize {
        self.requested_cursors.lock().unwrap().len()
    }

    pub fn cursors(&self) -> Vec<Option<String>> {
        self.requested_cursors.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for MockFeed {
    async fn fetch_page(&self, actor: &str, cursor: Option<&str>) -> Result<FeedPage> {
        self.requested_actors.lock().unwrap().push(actor.to_string());
        self.requested_cursors
            .lock()
            .unwrap()
            .push(cursor.map(str::to_string));

        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(MockResponse::Page(page)) => Ok(page),
            Some(MockResponse::ApiError { status, reason }) => {
                Err(RecapError::Api { status, reason })
            }
            None => Err(RecapError::Unknown(
                "mock feed has no more scripted responses".to_string(),
            )),
        }
    }
}

/// Build an authored post dated `created_at`
pub fn post_item(created_at: &str, text: &str) -> FeedItem {
    FeedItem {
        post: PostView {
            uri: format!("at://did:plc:mock/app.bsky.feed.post/{}", created_at),
            record: PostRecord {
                text: text.to_string(),
                created_at: created_at.to_string(),
                reply: None,
            },
        },
        reason: None,
    }
}

/// Build a repost of someone else's post dated `created_at`
pub fn repost_item(created_at: &str, text: &str) -> FeedItem {
    let mut item = post_item(created_at, text);
    item.reason = Some(serde_json::json!({
        "$type": "app.bsky.feed.defs#reasonRepost",
        "indexedAt": created_at,
    }));
    item
}

/// Build a reply dated `created_at`
pub fn reply_item(created_at: &str, text: &str) -> FeedItem {
    let mut item = post_item(created_at, text);
    item.post.record.reply = Some(serde_json::json!({
        "root": {"uri": "at://did:plc:other/app.bsky.feed.post/root"},
        "parent": {"uri": "at://did:plc:other/app.bsky.feed.post/root"},
    }));
    item
}

/// Build a page from items and an optional cursor
pub fn page(items: Vec<FeedItem>, cursor: Option<&str>) -> FeedPage {
    FeedPage {
        feed: items,
        cursor: cursor.map(str::to_string),
    }
}
