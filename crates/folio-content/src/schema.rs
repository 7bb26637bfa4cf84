//! Property names in the site's Notion databases, and the filters built on them.

use folio_notion::Filter;

/// Checkbox every collection uses to gate visibility.
pub const PUBLISHED: &str = "Published";

pub mod post {
    pub const TITLE: &str = "Title";
    pub const SLUG: &str = "Slug";
    pub const DATE: &str = "Date";
    pub const EXCERPT: &str = "Excerpt";
    pub const AUTHOR: &str = "Author";
    pub const TAGS: &str = "Tags";
    pub const FEATURED: &str = "Featured";
}

pub mod project {
    pub const NAME: &str = "Name";
    pub const DESCRIPTION: &str = "Description";
    pub const URL: &str = "URL";
    pub const CATEGORY: &str = "Category";
    pub const DATE: &str = "Date";
}

pub mod resource {
    pub const NAME: &str = "Name";
    pub const URL: &str = "URL";
    pub const CATEGORY: &str = "Category";
    pub const DESCRIPTION: &str = "Description";
}

/// Published rows only.
#[must_use]
pub fn published() -> Filter {
    Filter::checkbox(PUBLISHED, true)
}

/// The published post with `slug`; both conditions are evaluated by the service.
#[must_use]
pub fn published_slug(slug: &str) -> Filter {
    Filter::And(vec![Filter::rich_text(post::SLUG, slug), published()])
}
