use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aggregate figures over every published post.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlogStats {
    pub total_posts: u32,
    pub total_words: u64,
    /// Mean of per-post reading times in minutes, rounded half up.
    pub avg_reading_time: u32,
}

impl BlogStats {
    /// Build stats from a post count and the summed word counts / reading times.
    #[must_use]
    pub const fn from_totals(total_posts: u32, total_words: u64, total_reading_time: u64) -> Self {
        let avg_reading_time = if total_posts == 0 {
            0
        } else {
            let n = total_posts as u64;
            // round half up without floats
            let avg = (total_reading_time * 2 + n) / (n * 2);
            if avg > u32::MAX as u64 { u32::MAX } else { avg as u32 }
        };
        Self {
            total_posts,
            total_words,
            avg_reading_time,
        }
    }
}
