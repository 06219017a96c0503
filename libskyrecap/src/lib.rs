//! sky-recap - a year in review for a Bluesky account
//!
//! This library pages through an account's public author feed, keeps the
//! account's own top-level posts from one calendar year, and renders them
//! as a Markdown report grouped by month.

pub mod collector;
pub mod config;
pub mod error;
pub mod feed;
pub mod grouping;
pub mod logging;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use collector::{collect_year_posts, Collection};
pub use config::Config;
pub use error::{RecapError, Result};
pub use feed::{bluesky::BlueskyFeedClient, FeedSource};
pub use types::{Post, TargetYear};

/// Collect `handle`'s posts for `year` from `source` and render the report
pub async fn build_report(source: &dyn FeedSource, handle: &str, year: &TargetYear) -> Result<String> {
    let collection = collect_year_posts(source, handle, year).await?;
    Ok(report::render_markdown(handle, year, &collection.posts))
}
