//! # folio-content
//!
//! Render-ready posts, projects, and resources for folio.
//!
//! [`ContentService`] is what page renderers call. It queries the configured
//! Notion databases for published rows, normalizes them into
//! [`folio_core`] entities, and sorts posts featured-first then newest-first.
//!
//! - Missing or placeholder configuration serves one sample entry per
//!   collection ([`fallback`]).
//! - Remote failures are logged and degrade to `[]` / `None`.
//!
//! ```no_run
//! # async fn render() -> Result<(), Box<dyn std::error::Error>> {
//! let config = folio_config::FolioConfig::load_with_dotenv()?;
//! let content = folio_content::ContentService::from_config(config.notion)?;
//! for post in content.list_posts().await {
//!     println!("{} ({})", post.title, post.date);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fallback;
pub mod normalize;
pub mod schema;
pub mod service;
pub mod source;

pub use error::{ContentError, MissingSetting};
pub use service::ContentService;
pub use source::ContentSource;
