use crate::types::GameConfig;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config file {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// `<config_dir>/dropcatch/config.json`
pub fn config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("dropcatch").join("config.json")
}

/// Load the config, writing defaults on first run. Any failure falls back
/// to defaults and is logged; the game always starts.
pub fn load_config() -> GameConfig {
    load_or_init(&config_path())
}

pub fn load_or_init(path: &Path) -> GameConfig {
    if !path.exists() {
        let config = GameConfig::default();
        match save_to(path, &config) {
            Ok(()) => log::info!("wrote default config to {}", path.display()),
            Err(e) => log::warn!("{}", e),
        }
        return config;
    }
    match load_from(path) {
        Ok(config) => {
            log::info!("loaded config from {}", path.display());
            config
        }
        Err(e) => {
            log::warn!("{}; using defaults", e);
            GameConfig::default()
        }
    }
}

pub fn load_from(path: &Path) -> Result<GameConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: GameConfig =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate().map_err(|reason| ConfigError::Invalid {
        path: path.to_path_buf(),
        reason,
    })?;
    Ok(config)
}

pub fn save_to(path: &Path, config: &GameConfig) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json).map_err(io_err)
}
