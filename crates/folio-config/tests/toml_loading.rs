//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed working directories and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use folio_config::{ConfigError, FolioConfig};
use folio_core::Collection;

#[test]
fn loads_notion_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[notion]
token = "ntn_toml_token"
posts_database_id = "posts-db"
projects_database_id = "projects-db"
resources_database_id = "resources-db"
api_base_url = "http://localhost:4010"
api_version = "2025-09-03"
timeout_secs = 15
"#,
        )?;

        let config: FolioConfig = Figment::from(Serialized::defaults(FolioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.notion.token, "ntn_toml_token");
        assert_eq!(config.notion.database_id(Collection::Posts), Some("posts-db"));
        assert_eq!(config.notion.database_id(Collection::Projects), Some("projects-db"));
        assert_eq!(config.notion.database_id(Collection::Resources), Some("resources-db"));
        assert_eq!(config.notion.api_base_url, "http://localhost:4010");
        assert_eq!(config.notion.api_version, "2025-09-03");
        assert_eq!(config.notion.timeout_secs, Some(15));
        for collection in Collection::ALL {
            assert!(config.notion.is_configured(collection));
        }
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[notion]
token = "ntn_toml_token"
"#,
        )?;

        let config: FolioConfig = Figment::from(Serialized::defaults(FolioConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.notion.api_base_url, "https://api.notion.com");
        assert_eq!(config.notion.api_version, "2022-06-28");
        assert!(config.notion.timeout_secs.is_none());
        assert!(!config.notion.is_configured(Collection::Posts));
        Ok(())
    });
}

#[test]
fn load_picks_up_project_local_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "folio.toml",
            r#"
[notion]
token = "ntn_local"
posts_database_id = "local-posts"
"#,
        )?;

        let config = FolioConfig::load().expect("config loads");
        assert_eq!(config.notion.credential(), Some("ntn_local"));
        assert!(config.notion.is_configured(Collection::Posts));
        assert!(!config.notion.is_configured(Collection::Projects));
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_base_url() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "folio.toml",
            r#"
[notion]
api_base_url = "ftp://notion.example"
"#,
        )?;

        let err = FolioConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("folio.toml", "[notion\ntoken = ")?;

        let err = FolioConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)));
        Ok(())
    });
}
