use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::FetchOptions;

/// Default API base when neither config nor environment supplies one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Environment variable that overrides the configured API base URL.
pub const API_BASE_ENV: &str = "SMF_API_BASE_URL";

/// Global configuration loaded from `~/.config/smf/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmfConfig {
    /// Base URL of the catalog API. Accepted with or without a trailing
    /// `/api` segment and with or without a trailing slash; file-serving
    /// URLs are derived from it.
    pub api_base_url: String,
    /// Directory downloads are saved to. Defaults to the current directory.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// HTTP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Overall per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for SmfConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            download_dir: None,
            connect_timeout_secs: 15,
            request_timeout_secs: 120,
        }
    }
}

impl SmfConfig {
    /// Effective API base URL: the environment override wins over the file.
    pub fn api_base_url(&self) -> String {
        std::env::var(API_BASE_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.api_base_url.clone())
    }

    /// HTTP tuning derived from the configured timeouts.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }

    /// Directory downloads land in: the configured one, else the cwd.
    pub fn download_dir(&self) -> Result<PathBuf> {
        match &self.download_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("smf")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SmfConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SmfConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SmfConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SmfConfig::default();
        assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
        assert!(cfg.download_dir.is_none());
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.request_timeout_secs, 120);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SmfConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SmfConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.api_base_url, cfg.api_base_url);
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            api_base_url = "https://materials.example.edu/api/"
            download_dir = "/tmp/materials"
            connect_timeout_secs = 5
            request_timeout_secs = 60
        "#;
        let cfg: SmfConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.api_base_url, "https://materials.example.edu/api/");
        assert_eq!(
            cfg.download_dir.as_deref(),
            Some(std::path::Path::new("/tmp/materials"))
        );
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn env_override_wins() {
        let cfg = SmfConfig::default();
        std::env::set_var(API_BASE_ENV, "http://override.example:9000/api");
        assert_eq!(cfg.api_base_url(), "http://override.example:9000/api");
        std::env::remove_var(API_BASE_ENV);
        assert_eq!(cfg.api_base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn fetch_options_from_timeouts() {
        let cfg = SmfConfig {
            connect_timeout_secs: 3,
            request_timeout_secs: 30,
            ..SmfConfig::default()
        };
        let opts = cfg.fetch_options();
        assert_eq!(opts.connect_timeout, Duration::from_secs(3));
        assert_eq!(opts.timeout, Duration::from_secs(30));
    }
}
