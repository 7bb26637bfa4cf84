//! Database rows to render-ready entities.
//!
//! Each property is read by name with a fixed default, so a row missing a
//! column (or carrying it with an unexpected type) still normalizes.

use chrono::{DateTime, Utc};
use folio_core::{DEFAULT_AUTHOR, DEFAULT_TITLE, Post, Project, Resource};
use folio_notion::Page;

use crate::fallback::iso_timestamp;
use crate::schema::{self, post, project, resource};

/// Post metadata from a posts row. Body fields are left empty.
///
/// An absent date falls back to `now`, so undated drafts sort as newest.
#[must_use]
pub fn post_from_page(page: &Page, now: DateTime<Utc>) -> Post {
    Post {
        id: page.id.clone(),
        slug: page.text(post::SLUG).unwrap_or_default(),
        title: page
            .text(post::TITLE)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        date: page
            .date_start(post::DATE)
            .map_or_else(|| iso_timestamp(now), str::to_string),
        excerpt: page.text(post::EXCERPT).unwrap_or_default(),
        author: page
            .text(post::AUTHOR)
            .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        tags: page.labels(post::TAGS),
        published: page.checkbox(schema::PUBLISHED).unwrap_or(false),
        featured: page.checkbox(post::FEATURED).unwrap_or(false),
        content: None,
        word_count: None,
        reading_time: None,
    }
}

#[must_use]
pub fn project_from_page(page: &Page) -> Project {
    Project {
        id: page.id.clone(),
        name: page
            .text(project::NAME)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        description: page.text(project::DESCRIPTION).unwrap_or_default(),
        url: page.url(project::URL).unwrap_or_default().to_string(),
        tech: page.labels(project::CATEGORY),
        date: page.date_start(project::DATE).unwrap_or_default().to_string(),
        published: page.checkbox(schema::PUBLISHED).unwrap_or(false),
    }
}

#[must_use]
pub fn resource_from_page(page: &Page) -> Resource {
    Resource {
        id: page.id.clone(),
        name: page
            .text(resource::NAME)
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        url: page.url(resource::URL).unwrap_or_default().to_string(),
        categories: page.labels(resource::CATEGORY),
        description: page.text(resource::DESCRIPTION).unwrap_or_default(),
        published: page.checkbox(schema::PUBLISHED).unwrap_or(false),
    }
}
