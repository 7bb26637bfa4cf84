//! Post ordering: featured posts first, then newest first.
//!
//! The order is a stable sort on the composite key `(!featured, Reverse(date))`,
//! so it does not depend on the order the remote service returned records in
//! beyond breaking exact ties.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::Post;

/// Parse a post date as either RFC 3339 date-time or a bare `YYYY-MM-DD` date
/// (taken as midnight UTC).
#[must_use]
pub fn published_at(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Sort posts featured-first, then by date descending.
///
/// Posts whose date cannot be parsed sort after every dated post in their
/// group.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by_cached_key(|post| (!post.featured, Reverse(published_at(&post.date))));
}
