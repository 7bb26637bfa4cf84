//! Word count and reading time derived from rendered markdown.
//!
//! These figures are never stored: every detail fetch recomputes them from the
//! body text it just rendered.

/// Average reading speed used for reading time estimates.
pub const WORDS_PER_MINUTE: u32 = 200;

/// Count whitespace-separated words.
#[must_use]
pub fn word_count(text: &str) -> u32 {
    u32::try_from(text.split_whitespace().count()).unwrap_or(u32::MAX)
}

/// Minutes needed to read `word_count` words, rounded up.
#[must_use]
pub const fn reading_time(word_count: u32) -> u32 {
    word_count.div_ceil(WORDS_PER_MINUTE)
}

/// Word count and reading time of one body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadingMetrics {
    pub word_count: u32,
    pub reading_time: u32,
}

impl ReadingMetrics {
    #[must_use]
    pub fn of(text: &str) -> Self {
        let word_count = word_count(text);
        Self {
            word_count,
            reading_time: reading_time(word_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(199, 1)]
    #[case(200, 1)]
    #[case(201, 2)]
    #[case(400, 2)]
    #[case(401, 3)]
    fn reading_time_rounds_up(#[case] words: u32, #[case] minutes: u32) {
        assert_eq!(reading_time(words), minutes);
    }

    #[rstest]
    #[case("", 0)]
    #[case("   \n\t ", 0)]
    #[case("one", 1)]
    #[case("  leading and trailing  ", 3)]
    #[case("# Heading\n\nBody text\twith tabs\n- item", 8)]
    fn word_count_splits_on_whitespace_runs(#[case] text: &str, #[case] words: u32) {
        assert_eq!(word_count(text), words);
    }

    #[test]
    fn metrics_of_body() {
        let body = "lorem ipsum ".repeat(150);
        let metrics = ReadingMetrics::of(&body);
        assert_eq!(metrics.word_count, 300);
        assert_eq!(metrics.reading_time, 2);
    }
}
