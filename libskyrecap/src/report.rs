//! Markdown rendering of the year-in-review report

use crate::grouping::{month_label, MonthlyPosts};
use crate::types::{Post, TargetYear};

/// Render the Markdown report for `handle`
///
/// Layout: a header, a statistics section with the total and per-month
/// counts, then one subsection per month listing posts newest first.
/// Post text is emitted verbatim; Markdown in it is not escaped.
pub fn render_markdown(handle: &str, year: &TargetYear, posts: &[Post]) -> String {
    let mut grouped = MonthlyPosts::group(posts, year);
    grouped.sort_newest_first();

    let mut out = String::new();

    out.push_str(&format!("# @{} の{}年振り返りデータ\n\n", handle, year.year()));

    out.push_str("## 統計\n");
    out.push_str(&format!("- 総投稿数: {}件\n", posts.len()));
    out.push_str(&format!("- 月別投稿数: {}\n\n", monthly_counts(&grouped)));

    out.push_str("## 月別投稿一覧\n\n");
    for (month, month_posts) in grouped.iter() {
        out.push_str(&format!("### {} ({}件)\n", month_label(month), month_posts.len()));
        for post in month_posts {
            out.push_str(&format!("- {}: {}\n", post.date, post.text));
        }
        out.push('\n');
    }

    out
}

/// `"1月: 1件, 3月: 2件"`
pub fn monthly_counts(grouped: &MonthlyPosts) -> String {
    grouped
        .iter()
        .map(|(month, posts)| format!("{}: {}件", month_label(month), posts.len()))
        .collect::<Vec<_>>()
        .join(", ")
}
