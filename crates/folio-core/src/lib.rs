//! # folio-core
//!
//! Core content types, reading metrics, and ordering rules for folio.
//!
//! This crate provides the foundational types shared across all folio crates:
//! - Entity structs for every render-facing record (posts, projects, resources, stats)
//! - The [`Collection`] identifier for the three remote content collections
//! - Word count and reading time derivation from rendered markdown
//! - The featured-first, newest-first post ordering
//! - Distinct label helpers that drive the tag / tech / category filters

pub mod collection;
pub mod entities;
pub mod labels;
pub mod metrics;
pub mod ordering;

pub use collection::Collection;
pub use entities::{BlogStats, DEFAULT_AUTHOR, DEFAULT_TITLE, Post, Project, Resource};
pub use labels::{all_categories, all_tags, all_technologies, distinct_sorted};
pub use metrics::{ReadingMetrics, WORDS_PER_MINUTE, reading_time, word_count};
pub use ordering::{published_at, sort_posts};
