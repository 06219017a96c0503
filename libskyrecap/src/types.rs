//! Core domain types

use serde::{Deserialize, Serialize};

use crate::error::{RecapError, Result};

/// The year the recap covers
pub const RECAP_YEAR: i32 = 2025;

/// A post retained for the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Raw post body
    pub text: String,
}

impl Post {
    pub fn new(date: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            text: text.into(),
        }
    }
}

/// Calendar year that posts are matched against
///
/// Matching is textual on ISO-8601 timestamps: a timestamp is in the year
/// when it starts with `"YYYY-"` and predates it when it sorts below
/// `"YYYY-01-01"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetYear {
    year: i32,
    prefix: String,
    first_day: String,
}

impl TargetYear {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            prefix: format!("{:04}-", year),
            first_day: format!("{:04}-01-01", year),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// `"YYYY-"`
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `"YYYY-01-01"`
    pub fn first_day(&self) -> &str {
        &self.first_day
    }

    pub fn contains(&self, timestamp: &str) -> bool {
        timestamp.starts_with(&self.prefix)
    }

    pub fn is_before(&self, timestamp: &str) -> bool {
        timestamp < self.first_day.as_str()
    }
}

impl Default for TargetYear {
    fn default() -> Self {
        Self::new(RECAP_YEAR)
    }
}

/// Strip a leading `@` and reject an empty handle
pub fn normalize_handle(raw: &str) -> Result<String> {
    let handle = raw.trim();
    let handle = handle.strip_prefix('@').unwrap_or(handle);
    if handle.is_empty() {
        return Err(RecapError::Usage("handle must not be empty".to_string()));
    }
    Ok(handle.to_string())
}

/// Date portion of an ISO-8601 timestamp (everything before `T`)
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_year_boundaries() {
        let year = TargetYear::new(2025);
        assert_eq!(year.prefix(), "2025-");
        assert_eq!(year.first_day(), "2025-01-01");
        assert_eq!(year.year(), 2025);
    }

    #[test]
    fn test_contains_matches_prefix_only() {
        let year = TargetYear::new(2025);
        assert!(year.contains("2025-01-01T00:00:00.000Z"));
        assert!(year.contains("2025-12-31T23:59:59Z"));
        assert!(!year.contains("2024-12-31T23:59:59Z"));
        assert!(!year.contains("2026-01-01T00:00:00Z"));
        assert!(!year.contains("not-a-date"));
    }

    #[test]
    fn test_is_before_is_lexicographic() {
        let year = TargetYear::new(2025);
        assert!(year.is_before("2024-12-31T23:59:59Z"));
        assert!(year.is_before("1999-01-01"));
        assert!(year.is_before(""));
        assert!(!year.is_before("2025-01-01T00:00:00Z"));
        assert!(!year.is_before("2026-03-01T00:00:00Z"));
        // Letters sort above digits
        assert!(!year.is_before("garbage"));
    }

    #[test]
    fn test_default_is_recap_year() {
        assert_eq!(TargetYear::default().year(), RECAP_YEAR);
    }

    #[test]
    fn test_normalize_handle() {
        assert_eq!(normalize_handle("@alice.bsky.social").unwrap(), "alice.bsky.social");
        assert_eq!(normalize_handle("alice.bsky.social").unwrap(), "alice.bsky.social");
        // Only one leading @ is stripped
        assert_eq!(normalize_handle("@@odd").unwrap(), "@odd");
    }

    #[test]
    fn test_normalize_handle_rejects_empty() {
        assert!(matches!(normalize_handle(""), Err(RecapError::Usage(_))));
        assert!(matches!(normalize_handle("@"), Err(RecapError::Usage(_))));
        assert!(matches!(normalize_handle("   "), Err(RecapError::Usage(_))));
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2025-03-05T12:34:56.789Z"), "2025-03-05");
        assert_eq!(date_part("2025-03-05"), "2025-03-05");
        assert_eq!(date_part(""), "");
    }
}
