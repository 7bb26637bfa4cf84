//! Render-facing operations.
//!
//! Reader-facing calls never fail: missing configuration serves sample data,
//! and remote failures are logged and degrade to an empty list or `None`.
//! The `try_*` variants return the underlying [`ContentError`] instead.

use chrono::Utc;
use folio_config::NotionConfig;
use folio_core::{BlogStats, Collection, Post, Project, ReadingMetrics, Resource, sort_posts};
use folio_notion::{Filter, NotionClient, NotionError, Page};

use crate::error::{ContentError, MissingSetting};
use crate::fallback;
use crate::normalize::{post_from_page, project_from_page, resource_from_page};
use crate::schema;
use crate::source::ContentSource;

/// Posts, projects, and resources read from one content service.
///
/// Holds the configuration and, when a credential is configured, a client.
/// No state is kept between calls; every operation is a fresh fetch.
#[derive(Debug, Clone)]
pub struct ContentService<S = NotionClient> {
    config: NotionConfig,
    source: Option<S>,
}

impl ContentService<NotionClient> {
    /// Build a service backed by the Notion API.
    ///
    /// The client is only created when `config` carries a usable token;
    /// otherwise every collection falls back to sample data.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError`] if the HTTP client cannot be built from the
    /// configured token and version.
    pub fn from_config(config: NotionConfig) -> Result<Self, NotionError> {
        let source = config
            .credential()
            .map(|token| NotionClient::new(token, &config))
            .transpose()?;
        Ok(Self { config, source })
    }
}

impl<S: ContentSource> ContentService<S> {
    /// Build a service reading from `source`.
    pub fn with_source(config: NotionConfig, source: S) -> Self {
        Self {
            config,
            source: Some(source),
        }
    }

    pub const fn config(&self) -> &NotionConfig {
        &self.config
    }

    /// The underlying source, absent when no credential is configured.
    pub const fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    fn target(&self, collection: Collection) -> Result<(&S, &str), ContentError> {
        let database_id = fallback::resolve(&self.config, collection)?;
        let source = self
            .source
            .as_ref()
            .ok_or(ContentError::ConfigurationMissing {
                collection,
                missing: MissingSetting::Credential,
            })?;
        Ok((source, database_id))
    }

    async fn query(&self, collection: Collection, filter: &Filter) -> Result<Vec<Page>, ContentError> {
        let (source, database_id) = self.target(collection)?;
        tracing::debug!(%collection, database_id, "querying published rows");
        source
            .query(database_id, filter)
            .await
            .map_err(|e| ContentError::remote("query", collection.as_str(), e))
    }

    // -- posts --

    /// Every published post, featured first, then newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::ConfigurationMissing`] when posts are not
    /// configured, or [`ContentError::RemoteService`] when the query fails.
    pub async fn try_list_posts(&self) -> Result<Vec<Post>, ContentError> {
        let now = Utc::now();
        let pages = self.query(Collection::Posts, &schema::published()).await?;
        let mut posts: Vec<Post> = pages.iter().map(|page| post_from_page(page, now)).collect();

        for post in posts.iter().filter(|p| p.featured) {
            tracing::info!(title = %post.title, date = %post.date, "featured post found");
        }
        sort_posts(&mut posts);
        tracing::debug!(
            order = ?posts.iter().map(|p| (p.title.as_str(), p.featured, p.date.as_str())).collect::<Vec<_>>(),
            "post order after sorting"
        );
        Ok(posts)
    }

    /// Every published post, or the sample post when posts are not configured.
    ///
    /// A failing remote call yields an empty list.
    pub async fn list_posts(&self) -> Vec<Post> {
        match self.try_list_posts().await {
            Ok(posts) => posts,
            Err(error @ ContentError::ConfigurationMissing { .. }) => {
                tracing::warn!(%error, "serving sample posts");
                fallback::sample_posts(Utc::now())
            }
            Err(error) => {
                tracing::error!(%error, "failed to list posts");
                Vec::new()
            }
        }
    }

    /// Slugs of every published post, in list order.
    pub async fn list_post_slugs(&self) -> Vec<String> {
        self.list_posts()
            .await
            .into_iter()
            .map(|post| post.slug)
            .collect()
    }

    /// The published post with `slug`, with its rendered body and metrics.
    ///
    /// When several published rows share the slug, the first one the service
    /// returns wins.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::NotFound`] when no published post has `slug`,
    /// [`ContentError::ConfigurationMissing`] when posts are not configured,
    /// or [`ContentError::RemoteService`] when either remote call fails.
    pub async fn try_get_post(&self, slug: &str) -> Result<Post, ContentError> {
        let (source, database_id) = self.target(Collection::Posts)?;
        let pages = source
            .query(database_id, &schema::published_slug(slug))
            .await
            .map_err(|e| ContentError::remote("query post", slug, e))?;
        let page = pages.first().ok_or_else(|| ContentError::NotFound {
            slug: slug.to_string(),
        })?;

        let markdown = source
            .page_markdown(&page.id)
            .await
            .map_err(|e| ContentError::remote("render post body", slug, e))?;
        Ok(post_from_page(page, Utc::now()).with_content(markdown))
    }

    /// The published post with `slug`, or `None`.
    ///
    /// A remote failure also yields `None`; use [`Self::try_get_post`] to
    /// tell the two apart. When posts are not configured only the sample
    /// slug resolves.
    pub async fn get_post(&self, slug: &str) -> Option<Post> {
        match self.try_get_post(slug).await {
            Ok(post) => Some(post),
            Err(ContentError::NotFound { .. }) => None,
            Err(error @ ContentError::ConfigurationMissing { .. }) => {
                tracing::warn!(%error, slug, "serving sample post");
                fallback::sample_post(slug, Utc::now())
            }
            Err(error) => {
                tracing::error!(%error, slug, "failed to fetch post");
                None
            }
        }
    }

    // -- projects & resources --

    /// Every published project, in service order.
    pub async fn list_projects(&self) -> Vec<Project> {
        match self.query(Collection::Projects, &schema::published()).await {
            Ok(pages) => pages.iter().map(project_from_page).collect(),
            Err(error @ ContentError::ConfigurationMissing { .. }) => {
                tracing::warn!(%error, "serving sample projects");
                fallback::sample_projects(Utc::now())
            }
            Err(error) => {
                tracing::error!(%error, "failed to list projects");
                Vec::new()
            }
        }
    }

    /// Every published resource, in service order.
    pub async fn list_resources(&self) -> Vec<Resource> {
        match self.query(Collection::Resources, &schema::published()).await {
            Ok(pages) => pages.iter().map(resource_from_page).collect(),
            Err(error @ ContentError::ConfigurationMissing { .. }) => {
                tracing::warn!(%error, "serving sample resources");
                fallback::sample_resources()
            }
            Err(error) => {
                tracing::error!(%error, "failed to list resources");
                Vec::new()
            }
        }
    }

    // -- stats --

    /// Totals over every published post.
    ///
    /// Renders each post body to count its words: one remote call per post.
    /// A post whose body fails to render still counts toward `total_posts`
    /// but adds no words.
    pub async fn get_stats(&self) -> BlogStats {
        let posts = self.list_posts().await;
        let mut total_words = 0_u64;
        let mut total_reading_time = 0_u64;

        for post in &posts {
            let metrics = if fallback::is_sample_post(post) {
                fallback::sample_post_metrics()
            } else {
                match self.body_metrics(&post.id).await {
                    Ok(metrics) => metrics,
                    Err(error) => {
                        tracing::error!(%error, post_id = %post.id, "failed to count post words");
                        ReadingMetrics::default()
                    }
                }
            };
            total_words += u64::from(metrics.word_count);
            total_reading_time += u64::from(metrics.reading_time);
        }

        let total_posts = u32::try_from(posts.len()).unwrap_or(u32::MAX);
        BlogStats::from_totals(total_posts, total_words, total_reading_time)
    }

    async fn body_metrics(&self, page_id: &str) -> Result<ReadingMetrics, ContentError> {
        let (source, _) = self.target(Collection::Posts)?;
        let markdown = source
            .page_markdown(page_id)
            .await
            .map_err(|e| ContentError::remote("render post body", page_id, e))?;
        Ok(ReadingMetrics::of(&markdown))
    }
}
