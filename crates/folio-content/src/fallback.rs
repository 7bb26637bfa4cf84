//! Sample data served when a collection is not configured.
//!
//! Missing configuration is a setup problem, so pages show a placeholder
//! entry explaining what to set. A failing remote call is handled elsewhere
//! and yields no entries at all.

use chrono::{DateTime, SecondsFormat, Utc};
use folio_config::NotionConfig;
use folio_core::{Collection, Post, Project, ReadingMetrics, Resource};

use crate::error::{ContentError, MissingSetting};

pub const SAMPLE_POST_ID: &str = "sample-post";
pub const SAMPLE_POST_SLUG: &str = "welcome-to-notion-cms";

const SAMPLE_POST_BODY: &str = "\
# Welcome to your new Notion CMS!

This is a sample post. To see your own posts here:

1. Create a Notion integration and a posts database shared with it.
2. Set `NOTION_TOKEN` and `NOTION_DATABASE_ID` in `.env.local`.
3. Rebuild the site.

Projects and resources read `NOTION_PROJECTS_DATABASE_ID` and `NOTION_RESOURCES_DATABASE_ID` the same way.";

/// The database id to query for `collection`, or why it cannot be queried.
///
/// # Errors
///
/// Returns [`ContentError::ConfigurationMissing`] when the token or the
/// collection's database id is absent or a placeholder.
pub fn resolve(config: &NotionConfig, collection: Collection) -> Result<&str, ContentError> {
    let missing = |missing| ContentError::ConfigurationMissing {
        collection,
        missing,
    };
    if config.credential().is_none() {
        return Err(missing(MissingSetting::Credential));
    }
    config
        .database_id(collection)
        .ok_or_else(|| missing(MissingSetting::DatabaseId))
}

/// ISO-8601 timestamp in the form page renderers expect.
pub(crate) fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn sample_post_header(now: DateTime<Utc>) -> Post {
    Post {
        id: SAMPLE_POST_ID.into(),
        slug: SAMPLE_POST_SLUG.into(),
        title: "Welcome to Notion CMS".into(),
        date: iso_timestamp(now),
        excerpt: "This is a sample post because Notion credentials are not set up yet.".into(),
        author: "Admin".into(),
        tags: vec!["Sample".into(), "Setup".into()],
        published: true,
        featured: false,
        content: None,
        word_count: None,
        reading_time: None,
    }
}

/// The sample post list.
#[must_use]
pub fn sample_posts(now: DateTime<Utc>) -> Vec<Post> {
    vec![sample_post_header(now)]
}

/// The sample post with its body, if `slug` is the sample slug.
#[must_use]
pub fn sample_post(slug: &str, now: DateTime<Utc>) -> Option<Post> {
    (slug == SAMPLE_POST_SLUG)
        .then(|| sample_post_header(now).with_content(SAMPLE_POST_BODY.to_string()))
}

#[must_use]
pub fn is_sample_post(post: &Post) -> bool {
    post.id == SAMPLE_POST_ID
}

/// Metrics of the sample body, counted without a remote call.
#[must_use]
pub fn sample_post_metrics() -> ReadingMetrics {
    ReadingMetrics::of(SAMPLE_POST_BODY)
}

#[must_use]
pub fn sample_projects(now: DateTime<Utc>) -> Vec<Project> {
    vec![Project {
        id: "sample-1".into(),
        name: "Sample Project".into(),
        description: "This is a sample project built with AI.".into(),
        url: "https://example.com".into(),
        tech: vec!["React".into(), "Next.js".into(), "Tailwind".into()],
        date: iso_timestamp(now),
        published: true,
    }]
}

#[must_use]
pub fn sample_resources() -> Vec<Resource> {
    vec![Resource {
        id: "sample-resource".into(),
        name: "Notion API Reference".into(),
        url: "https://developers.notion.com/reference/intro".into(),
        categories: vec!["Sample".into()],
        description: "This is a sample resource because Notion credentials are not set up yet."
            .into(),
        published: true,
    }]
}
