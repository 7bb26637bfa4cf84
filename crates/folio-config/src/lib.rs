//! # folio-config
//!
//! Layered configuration loading for folio using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FOLIO_*` prefix, `__` as separator)
//! 2. Conventional Notion variables (`NOTION_TOKEN`, `NOTION_DATABASE_ID`,
//!    `NOTION_PROJECTS_DATABASE_ID`, `NOTION_RESOURCES_DATABASE_ID`)
//! 3. Project-level `folio.toml`
//! 4. User-level `~/.config/folio/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FOLIO_NOTION__TOKEN` -> `notion.token`,
//! `FOLIO_NOTION__POSTS_DATABASE_ID` -> `notion.posts_database_id`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! Missing or placeholder values are not an error here: the content layer
//! serves sample data for any collection that is not configured.
//!
//! # Usage
//!
//! ```no_run
//! use folio_config::FolioConfig;
//! use folio_core::Collection;
//!
//! let config = FolioConfig::load_with_dotenv().expect("config");
//!
//! if config.notion.is_configured(Collection::Posts) {
//!     println!("posts database: {:?}", config.notion.database_id(Collection::Posts));
//! }
//! ```

mod error;
mod notion;

pub use error::ConfigError;
pub use notion::{NotionConfig, is_placeholder};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
const LOCAL_CONFIG_FILE: &str = "folio.toml";

/// Bare environment names used by existing deployments, and the config path
/// each one fills.
const CONVENTIONAL_ENV: [(&str, &str); 4] = [
    ("NOTION_TOKEN", "notion.token"),
    ("NOTION_DATABASE_ID", "notion.posts_database_id"),
    ("NOTION_PROJECTS_DATABASE_ID", "notion.projects_database_id"),
    ("NOTION_RESOURCES_DATABASE_ID", "notion.resources_database_id"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub notion: NotionConfig,
}

impl FolioConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env` files -- use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.notion.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env.local` and `.env` support.
    ///
    /// Both files are read from the working directory, `.env.local` first.
    /// Variables already present in the process environment are never
    /// overridden.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment
            .merge(Self::conventional_env())
            .merge(Env::prefixed("FOLIO_").split("__"))
    }

    /// Provider for the bare `NOTION_*` names in [`CONVENTIONAL_ENV`].
    fn conventional_env() -> Env {
        Env::raw().filter_map(|key| {
            CONVENTIONAL_ENV
                .iter()
                .find(|(name, _)| key.as_str().eq_ignore_ascii_case(name))
                .map(|(_, path)| (*path).into())
        })
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("folio").join("config.toml"))
    }
}
