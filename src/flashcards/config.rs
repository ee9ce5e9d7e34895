use crate::error::{FlashcardError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PORT: u16 = 5050;
const DEFAULT_SERVER_URL: &str = "http://localhost:5050";

pub const ENV_PORT: &str = "FLASHCARDS_PORT";
pub const ENV_DATA_DIR: &str = "FLASHCARDS_DATA_DIR";
pub const ENV_SERVER_URL: &str = "FLASHCARDS_SERVER_URL";
pub const ENV_CORS_ORIGIN: &str = "FLASHCARDS_CORS_ORIGIN";

/// Configuration for the server and the terminal client, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlashcardsConfig {
    /// Port the API listens on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL the client talks to
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Where `flashcards.json` lives; falls back to the platform data dir
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Allowed CORS origin; any origin when unset
    #[serde(default)]
    pub cors_origin: Option<String>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

impl Default for FlashcardsConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            server_url: DEFAULT_SERVER_URL.to_string(),
            data_dir: None,
            cors_origin: None,
        }
    }
}

impl FlashcardsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FlashcardError::Io)?;
        let config: FlashcardsConfig =
            serde_json::from_str(&content).map_err(FlashcardError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FlashcardError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FlashcardError::Serialization)?;
        fs::write(config_path, content).map_err(FlashcardError::Io)?;
        Ok(())
    }

    /// Resolves the data directory, then loads its config and applies
    /// environment overrides on top.
    pub fn from_environment() -> Result<Self> {
        let lookup = |key: &str| std::env::var(key).ok();
        let data_dir = match lookup(ENV_DATA_DIR) {
            Some(dir) => PathBuf::from(dir),
            None => default_data_dir()?,
        };

        let mut config = Self::load(&data_dir)?;
        config.data_dir.get_or_insert(data_dir);
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Applies `FLASHCARDS_*` overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = parse_var(&lookup, ENV_PORT)? {
            self.port = port;
        }
        if let Some(url) = lookup(ENV_SERVER_URL) {
            info!("{ENV_SERVER_URL} set, using {url}");
            self.server_url = url;
        }
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(origin) = lookup(ENV_CORS_ORIGIN) {
            self.cors_origin = Some(origin);
        }
        Ok(())
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| FlashcardError::Config(format!("Invalid {key} value {raw:?}: {e}"))),
        None => Ok(None),
    }
}

pub fn default_data_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "flashcards", "flashcards")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FlashcardError::Config("Could not determine data directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = FlashcardsConfig::default();
        assert_eq!(config.port, 5050);
        assert_eq!(config.server_url, "http://localhost:5050");
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let dir = tempdir().unwrap();
        let config = FlashcardsConfig::load(dir.path()).unwrap();
        assert_eq!(config, FlashcardsConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let config = FlashcardsConfig {
            port: 7000,
            cors_origin: Some("http://localhost:5173".into()),
            ..Default::default()
        };
        config.save(dir.path()).unwrap();

        let loaded = FlashcardsConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"port": 8080}"#).unwrap();
        let loaded = FlashcardsConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.port, 8080);
        assert_eq!(loaded.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            (ENV_PORT, "6060"),
            (ENV_SERVER_URL, "http://example.test:6060"),
        ]
        .into_iter()
        .collect();
        let mut config = FlashcardsConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.port, 6060);
        assert_eq!(config.server_url, "http://example.test:6060");
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let mut config = FlashcardsConfig::default();
        let result = config.apply_overrides(|key| (key == ENV_PORT).then(|| "nope".to_string()));
        assert!(matches!(result, Err(FlashcardError::Config(_))));
    }
}
