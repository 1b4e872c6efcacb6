use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::SyncError;
use crate::services::dislike_sync::{RemediationMode, SyncConfig};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TAG_LABEL: &str = "disliked";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// Delete matched albums and exclude them from future imports
    #[default]
    Delete,
    /// Tag matched albums and leave them in place
    Tag,
}

/// Settings as read from the config file or the command line.
///
/// Every field is optional here; [`Config::validate`] decides what is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plex_url: Option<String>,
    pub plex_token: Option<String>,
    pub plex_music_library: Option<String>,
    pub plex_playlist_name: Option<String>,
    pub lidarr_url: Option<String>,
    pub lidarr_api_key: Option<String>,
    pub request_timeout: Option<u64>,
    pub dry_run: Option<bool>,
    pub mode: Option<SyncMode>,
    pub tag_label: Option<String>,
}

/// A complete configuration, checked before any network call is made.
#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub plex_url: Url,
    pub plex_token: String,
    pub lidarr_url: Url,
    pub lidarr_api_key: String,
    pub request_timeout: Duration,
    pub sync: SyncConfig,
}

const DEFAULT_CONFIG: &str = r#"# plex-lidarr-sync configuration
# Environment variables and command line flags take precedence over this file.

# plex_url = "http://127.0.0.1:32400"
# plex_token = ""
# plex_music_library = "Music"
# plex_playlist_name = "Disliked"
# lidarr_url = "http://127.0.0.1:8686"
# lidarr_api_key = ""
# request_timeout = 10
# dry_run = true
# mode = "delete"
# tag_label = "disliked"
"#;

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("plex-lidarr-sync").join("config.toml"))
    }

    /// Load the default config file, or an empty config when there is none.
    ///
    /// The file is optional since everything can come from the environment.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Write a commented default config file, unless one already exists.
    pub fn create_default() -> Result<PathBuf> {
        let path = Self::config_path()
            .ok_or_else(|| color_eyre::eyre::eyre!("No config directory on this platform"))?;
        Self::create_default_at(&path)?;
        Ok(path)
    }

    fn create_default_at(path: &Path) -> Result<()> {
        if path.exists() {
            log::info!("Config file already exists: {}", path.display());
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create config directory: {}", parent.display()))?;
        }
        std::fs::write(path, DEFAULT_CONFIG)
            .context(format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Layer `overrides` on top of `self`. Values set in `overrides` win.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            plex_url: overrides.plex_url.or(self.plex_url),
            plex_token: overrides.plex_token.or(self.plex_token),
            plex_music_library: overrides.plex_music_library.or(self.plex_music_library),
            plex_playlist_name: overrides.plex_playlist_name.or(self.plex_playlist_name),
            lidarr_url: overrides.lidarr_url.or(self.lidarr_url),
            lidarr_api_key: overrides.lidarr_api_key.or(self.lidarr_api_key),
            request_timeout: overrides.request_timeout.or(self.request_timeout),
            dry_run: overrides.dry_run.or(self.dry_run),
            mode: overrides.mode.or(self.mode),
            tag_label: overrides.tag_label.or(self.tag_label),
        }
    }

    /// Check that every required value is present. All missing names are
    /// reported together.
    pub fn validate(self) -> Result<ValidatedConfig, SyncError> {
        let mut missing = Vec::new();
        let mut require = |value: Option<String>, name: &'static str| {
            let value = value.filter(|v| !v.is_empty());
            if value.is_none() {
                missing.push(name);
            }
            value.unwrap_or_default()
        };

        let plex_url = require(self.plex_url, "PLEX_URL");
        let plex_token = require(self.plex_token, "PLEX_TOKEN");
        let library_name = require(self.plex_music_library, "PLEX_MUSIC_LIBRARY");
        let playlist_name = require(self.plex_playlist_name, "PLEX_PLAYLIST_NAME");
        let lidarr_url = require(self.lidarr_url, "LIDARR_URL");
        let lidarr_api_key = require(self.lidarr_api_key, "LIDARR_API_KEY");

        if !missing.is_empty() {
            return Err(SyncError::Config { missing });
        }

        let mode = match self.mode.unwrap_or_default() {
            SyncMode::Delete => RemediationMode::Delete,
            SyncMode::Tag => RemediationMode::Tag {
                label: self
                    .tag_label
                    .filter(|label| !label.is_empty())
                    .unwrap_or_else(|| DEFAULT_TAG_LABEL.to_string()),
            },
        };

        Ok(ValidatedConfig {
            plex_url: parse_base_url(&plex_url)?,
            plex_token,
            lidarr_url: parse_base_url(&lidarr_url)?,
            lidarr_api_key,
            request_timeout: Duration::from_secs(
                self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
            sync: SyncConfig {
                library_name,
                playlist_name,
                mode,
                dry_run: self.dry_run.unwrap_or(true),
            },
        })
    }
}

/// Parse a server URL so relative joins stay under its path.
fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    if raw.ends_with('/') {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{}/", raw))
    }
}

/// Only the literal `true`, in any case, enables dry run.
pub fn parse_dry_run(raw: &str) -> Result<bool, String> {
    Ok(raw.trim().eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Config {
        Config {
            plex_url: Some("http://plex:32400".to_string()),
            plex_token: Some("token".to_string()),
            plex_music_library: Some("Music".to_string()),
            plex_playlist_name: Some("Disliked".to_string()),
            lidarr_url: Some("http://lidarr:8686".to_string()),
            lidarr_api_key: Some("key".to_string()),
            ..Config::default()
        }
    }

    #[test]
    fn test_validate_defaults() {
        let config = complete().validate().unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert!(config.sync.dry_run);
        assert_eq!(config.sync.mode, RemediationMode::Delete);
        assert_eq!(config.lidarr_url.as_str(), "http://lidarr:8686/");
    }

    #[test]
    fn test_validate_reports_all_missing() {
        let config = Config {
            plex_token: Some(String::new()),
            plex_music_library: Some("Music".to_string()),
            plex_playlist_name: Some("Disliked".to_string()),
            lidarr_url: Some("http://lidarr:8686".to_string()),
            ..Config::default()
        };
        match config.validate() {
            Err(SyncError::Config { missing }) => {
                assert_eq!(missing, vec!["PLEX_URL", "PLEX_TOKEN", "LIDARR_API_KEY"]);
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_tag_mode_uses_default_label() {
        let config = Config {
            mode: Some(SyncMode::Tag),
            ..complete()
        };
        assert_eq!(
            config.validate().unwrap().sync.mode,
            RemediationMode::Tag {
                label: DEFAULT_TAG_LABEL.to_string()
            }
        );
    }

    #[test]
    fn test_validate_invalid_url() {
        let config = Config {
            lidarr_url: Some("not a url".to_string()),
            ..complete()
        };
        assert!(matches!(config.validate(), Err(SyncError::InvalidUrl(_))));
    }

    #[test]
    fn test_base_url_keeps_path() {
        let url = parse_base_url("http://host/lidarr").unwrap();
        assert_eq!(url.join("api/v1/album").unwrap().as_str(), "http://host/lidarr/api/v1/album");
    }

    #[test]
    fn test_parse_dry_run() {
        assert_eq!(parse_dry_run("true"), Ok(true));
        assert_eq!(parse_dry_run("TRUE"), Ok(true));
        assert_eq!(parse_dry_run("false"), Ok(false));
        assert_eq!(parse_dry_run("yes"), Ok(false));
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let file = Config {
            plex_playlist_name: Some("From file".to_string()),
            request_timeout: Some(30),
            ..complete()
        };
        let overrides = Config {
            plex_playlist_name: Some("From env".to_string()),
            dry_run: Some(false),
            ..Config::default()
        };
        let merged = file.merge(overrides);
        assert_eq!(merged.plex_playlist_name.as_deref(), Some("From env"));
        assert_eq!(merged.request_timeout, Some(30));
        assert_eq!(merged.dry_run, Some(false));
        assert_eq!(merged.plex_token.as_deref(), Some("token"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "plex_url = \"http://plex:32400\"\nmode = \"tag\"\ntag_label = \"meh\"\ndry_run = false\n",
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.plex_url.as_deref(), Some("http://plex:32400"));
        assert_eq!(config.mode, Some(SyncMode::Tag));
        assert_eq!(config.tag_label.as_deref(), Some("meh"));
        assert_eq!(config.dry_run, Some(false));
        assert!(config.lidarr_url.is_none());
    }

    #[test]
    fn test_create_default_parses_and_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::create_default_at(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::default());

        std::fs::write(&path, "plex_token = \"kept\"\n").unwrap();
        Config::create_default_at(&path).unwrap();
        assert_eq!(
            Config::from_file(&path).unwrap().plex_token.as_deref(),
            Some("kept")
        );
    }
}
