use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::metrics::ReadingMetrics;

/// Author used when the source record has none.
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Title used when the source record has none.
pub const DEFAULT_TITLE: &str = "Untitled";

/// A blog post.
///
/// `content`, `word_count` and `reading_time` are only present on posts
/// fetched individually; list results carry metadata only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    /// Unique within one published result set.
    pub slug: String,
    pub title: String,
    /// ISO-8601 date or date-time.
    pub date: String,
    pub excerpt: String,
    pub author: String,
    /// Source order, not deduplicated.
    pub tags: Vec<String>,
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
    /// Rendered markdown body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
    /// Minutes, rounded up.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,
}

impl Post {
    /// Attach a rendered body, deriving word count and reading time from it.
    #[must_use]
    pub fn with_content(self, markdown: String) -> Self {
        let metrics = ReadingMetrics::of(&markdown);
        Self {
            content: Some(markdown),
            word_count: Some(metrics.word_count),
            reading_time: Some(metrics.reading_time),
            ..self
        }
    }

    /// Whether the post carries `tag` exactly.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
