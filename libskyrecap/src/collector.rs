//! Year-bounded collection of an account's own posts
//!
//! Pages through the author feed newest first, keeping authored top-level
//! posts from the target year and stopping at the first post that predates it.

use tracing::{debug, info};

use crate::error::Result;
use crate::feed::{FeedItem, FeedSource};
use crate::types::{date_part, Post, TargetYear};

/// What to do with a single feed item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Reposts are someone else's text
    SkipRepost,
    /// Replies are conversation, not authored posts
    SkipReply,
    /// Dated inside the target year
    Keep(Post),
    /// Dated before the target year; nothing after it can qualify
    Stop,
    /// Dated after the target year, or an unrecognised timestamp
    SkipOutOfRange,
}

/// Decide what to do with one feed item
pub fn classify(item: &FeedItem, year: &TargetYear) -> Verdict {
    if item.is_repost() {
        return Verdict::SkipRepost;
    }
    if item.is_reply() {
        return Verdict::SkipReply;
    }

    let created_at = item.created_at();
    if year.contains(created_at) {
        Verdict::Keep(Post::new(date_part(created_at), item.text()))
    } else if year.is_before(created_at) {
        Verdict::Stop
    } else {
        Verdict::SkipOutOfRange
    }
}

/// Outcome of a collection run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    /// Kept posts in feed order
    pub posts: Vec<Post>,
    /// Number of pages requested
    pub pages: usize,
    /// Whether paging ended on a post older than the target year
    pub reached_older: bool,
}

/// Fetch every authored, non-reply post by `actor` dated in `year`
///
/// Any error from the source aborts the run; no partial result is returned.
pub async fn collect_year_posts(
    source: &dyn FeedSource,
    actor: &str,
    year: &TargetYear,
) -> Result<Collection> {
    let mut collection = Collection::default();
    let mut cursor: Option<String> = None;

    loop {
        let page = source.fetch_page(actor, cursor.as_deref()).await?;
        collection.pages += 1;

        for item in &page.feed {
            match classify(item, year) {
                Verdict::Keep(post) => collection.posts.push(post),
                Verdict::Stop => {
                    debug!(
                        created_at = item.created_at(),
                        "Reached a post older than {}, stopping",
                        year.year()
                    );
                    collection.reached_older = true;
                    break;
                }
                Verdict::SkipRepost | Verdict::SkipReply | Verdict::SkipOutOfRange => {}
            }
        }

        if collection.reached_older {
            break;
        }

        // An empty cursor marks the last page, same as a missing one
        match page.cursor {
            Some(next) if !next.is_empty() => cursor = Some(next),
            _ => break,
        }
    }

    info!(
        "Collected {} posts from {} in {} ({} pages)",
        collection.posts.len(),
        actor,
        year.year(),
        collection.pages
    );

    Ok(collection)
}
