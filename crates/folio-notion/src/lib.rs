//! # folio-notion
//!
//! Notion API HTTP client for folio.
//!
//! Covers the two endpoints the content layer reads from:
//! - database queries with typed [`Filter`]s, following cursors until the
//!   whole matching set is loaded
//! - block children, fetched recursively and rendered to markdown
//!
//! Page properties are exposed through typed accessors on [`Page`].

pub mod blocks;
pub mod filter;
pub mod markdown;
pub mod page;

mod error;
mod http;
mod query;

pub use blocks::{Block, BlockKind, BlockNode};
pub use error::NotionError;
pub use filter::Filter;
pub use page::{Page, PropertyValue, RichText};

use folio_config::NotionConfig;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

/// Largest page size the API accepts.
pub(crate) const PAGE_SIZE: u32 = 100;

/// HTTP client for one Notion integration.
///
/// Cheap to construct; holds no state beyond the connection pool.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    base_url: String,
}

impl NotionClient {
    /// Create a client authenticated with `token`, using the endpoint,
    /// API version and timeout from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`NotionError::InvalidHeader`] if the token or version cannot
    /// be sent as a header, or [`NotionError::Http`] if the underlying
    /// `reqwest::Client` fails to build.
    pub fn new(token: &str, config: &NotionConfig) -> Result<Self, NotionError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| NotionError::InvalidHeader("Authorization"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            HeaderName::from_static("notion-version"),
            HeaderValue::from_str(&config.api_version)
                .map_err(|_| NotionError::InvalidHeader("Notion-Version"))?,
        );

        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_config() {
        let client = NotionClient::new("ntn_test", &NotionConfig::default()).unwrap();
        assert_eq!(client.base_url, "https://api.notion.com");
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = NotionConfig {
            api_base_url: "http://127.0.0.1:9000/".into(),
            ..Default::default()
        };
        let client = NotionClient::new("ntn_test", &config).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn rejects_token_with_newline() {
        let err = NotionClient::new("ntn\nbad", &NotionConfig::default()).unwrap_err();
        assert!(matches!(err, NotionError::InvalidHeader("Authorization")));
    }
}
