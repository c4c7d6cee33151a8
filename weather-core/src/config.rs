use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, time::Duration};

pub const DEFAULT_ENDPOINT: &str = "https://python3-dot-parul-arena-2.appspot.com/test";
pub const DEFAULT_HIGHLIGHT_MS: u64 = 3000;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// endpoint = "https://example.com/weather"
/// highlight_ms = 3000
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Weather endpoint queried with `?cityname=<name>`.
    pub endpoint: String,

    /// How long a freshly fetched row stays highlighted.
    pub highlight_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            highlight_ms: DEFAULT_HIGHLIGHT_MS,
        }
    }
}

impl Config {
    pub fn highlight_delay(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }

    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;
        if cfg.endpoint.trim().is_empty() {
            return Err(anyhow!("`endpoint` must not be empty"));
        }
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-lookup", "weather-lookup")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = Config::from_toml("").expect("empty config is valid");
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.highlight_delay(), Duration::from_millis(3000));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg = Config::from_toml("highlight_ms = 500").expect("valid config");

        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.highlight_delay(), Duration::from_millis(500));
    }

    #[test]
    fn blank_endpoint_is_rejected() {
        let err = Config::from_toml("endpoint = \"  \"").unwrap_err();
        assert!(err.to_string().contains("endpoint"));
    }

    #[test]
    fn toml_roundtrip_preserves_values() {
        let cfg = Config {
            endpoint: "http://localhost:8080/test".into(),
            highlight_ms: 1200,
        };

        let text = toml::to_string_pretty(&cfg).expect("serializes");
        let parsed = Config::from_toml(&text).expect("parses back");

        assert_eq!(parsed, cfg);
    }
}
