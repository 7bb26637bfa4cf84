//! Notion API configuration.

use folio_core::Collection;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Marker found in every value shipped in the sample `.env` files.
const PLACEHOLDER_MARKER: &str = "your_";

fn default_api_base_url() -> String {
    String::from("https://api.notion.com")
}

fn default_api_version() -> String {
    String::from("2022-06-28")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotionConfig {
    /// Integration token (`ntn_...` or `secret_...`).
    #[serde(default)]
    pub token: String,

    /// Database holding blog posts.
    #[serde(default)]
    pub posts_database_id: String,

    /// Database holding projects.
    #[serde(default)]
    pub projects_database_id: String,

    /// Database holding curated resources.
    #[serde(default)]
    pub resources_database_id: String,

    /// API origin. Overridden in tests to point at a local mock server.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Value sent in the `Notion-Version` header.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Request timeout. Unset means the HTTP client's default (none).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            posts_database_id: String::new(),
            projects_database_id: String::new(),
            resources_database_id: String::new(),
            api_base_url: default_api_base_url(),
            api_version: default_api_version(),
            timeout_secs: None,
        }
    }
}

/// Whether `value` is empty or one of the sample placeholders.
#[must_use]
pub fn is_placeholder(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.to_ascii_lowercase().contains(PLACEHOLDER_MARKER)
}

fn usable(value: &str) -> Option<&str> {
    if is_placeholder(value) {
        None
    } else {
        Some(value.trim())
    }
}

impl NotionConfig {
    /// The integration token, unless absent or a placeholder.
    pub fn credential(&self) -> Option<&str> {
        usable(&self.token)
    }

    /// The database id for `collection`, unless absent or a placeholder.
    pub fn database_id(&self, collection: Collection) -> Option<&str> {
        let raw = match collection {
            Collection::Posts => &self.posts_database_id,
            Collection::Projects => &self.projects_database_id,
            Collection::Resources => &self.resources_database_id,
        };
        usable(raw)
    }

    /// Check if `collection` can be queried: it needs a token and a database id.
    pub fn is_configured(&self, collection: Collection) -> bool {
        self.credential().is_some() && self.database_id(collection).is_some()
    }

    /// Reject values that would only fail later at request time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for a non-HTTP base URL or an
    /// empty API version.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api_base_url.trim();
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "notion.api_base_url".into(),
                reason: format!("expected an http(s) URL, got '{base}'"),
            });
        }
        if self.api_version.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "notion.api_version".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
