//! Content layer error types.

use std::fmt;

use folio_core::Collection;
use folio_notion::NotionError;
use thiserror::Error;

/// Which required setting was absent or a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingSetting {
    Credential,
    DatabaseId,
}

impl fmt::Display for MissingSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Credential => "integration token",
            Self::DatabaseId => "database id",
        })
    }
}

/// Errors produced below the reader-facing API.
///
/// The reader-facing operations never return these: they log and degrade to
/// an empty list or `None`. The `try_*` operations return them as-is.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A collection is not set up; sample data is served instead.
    #[error("{collection} not configured: missing {missing}")]
    ConfigurationMissing {
        collection: Collection,
        missing: MissingSetting,
    },

    /// The remote service failed (network, auth, or response shape).
    #[error("{operation} failed for {key}: {source}")]
    RemoteService {
        operation: &'static str,
        /// Slug, page id, or collection name the call was about.
        key: String,
        #[source]
        source: NotionError,
    },

    /// No published post has this slug.
    #[error("no published post with slug '{slug}'")]
    NotFound { slug: String },
}

impl ContentError {
    pub(crate) fn remote(operation: &'static str, key: impl Into<String>, source: NotionError) -> Self {
        Self::RemoteService {
            operation,
            key: key.into(),
            source,
        }
    }
}
