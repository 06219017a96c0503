//! Month buckets for collected posts

use std::collections::BTreeMap;

use crate::types::{Post, TargetYear};

/// Posts bucketed by month number (1..=12), iterated in ascending month order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyPosts {
    months: BTreeMap<u32, Vec<Post>>,
}

impl MonthlyPosts {
    /// Bucket `posts` by the month of their date
    ///
    /// Posts whose date is not `YYYY-MM-...` within `year` are dropped.
    /// Each bucket keeps collection order.
    pub fn group(posts: &[Post], year: &TargetYear) -> Self {
        let mut months: BTreeMap<u32, Vec<Post>> = BTreeMap::new();

        for post in posts {
            let Some(month) = month_of(&post.date, year) else {
                tracing::debug!("Dropping post with unparseable date: {}", post.date);
                continue;
            };
            months.entry(month).or_default().push(post.clone());
        }

        Self { months }
    }

    /// Sort each bucket newest first; equal dates keep collection order
    pub fn sort_newest_first(&mut self) {
        for posts in self.months.values_mut() {
            posts.sort_by(|a, b| b.date.cmp(&a.date));
        }
    }

    /// Months with at least one post, ascending
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[Post])> {
        self.months
            .iter()
            .map(|(month, posts)| (*month, posts.as_slice()))
    }

    pub fn get(&self, month: u32) -> Option<&[Post]> {
        self.months.get(&month).map(Vec::as_slice)
    }

    /// Number of months that have posts
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Total posts across all buckets
    pub fn total(&self) -> usize {
        self.months.values().map(Vec::len).sum()
    }
}

/// Month number from a `YYYY-MM-DD` date inside `year`
pub fn month_of(date: &str, year: &TargetYear) -> Option<u32> {
    let rest = date.strip_prefix(year.prefix())?;
    let digits = rest.get(..2)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) || rest.as_bytes().get(2) != Some(&b'-') {
        return None;
    }

    let month: u32 = digits.parse().ok()?;
    (1..=12).contains(&month).then_some(month)
}

/// Display label for a month, e.g. `3` -> `"3月"`
pub fn month_label(month: u32) -> String {
    format!("{}月", month)
}
