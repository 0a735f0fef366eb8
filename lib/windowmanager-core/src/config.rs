use crate::paths;
use crate::platform::WindowRect;
use log::{trace, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};
use thiserror::Error;

const CONFIG_HEADER: &str = "# WindowManager Configuration File\n\n";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine default config directory")]
    NoConfigDir,
    #[error("failed to access config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The path the config file was loaded from
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Platform name to initialize with instead of the detected one
    pub platform: Option<String>,
    /// Bounds a new window controller starts out with
    pub default_window: WindowRect,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            platform: None,
            default_window: WindowRect::new(0, 0, 800, 600),
        }
    }
}

static CURRENT_CONFIG: Lazy<Arc<RwLock<Config>>> =
    Lazy::new(|| Arc::new(RwLock::new(Config::default())));

impl Config {
    pub fn load(config_path: Option<&Path>, save: bool) -> ConfigResult<Self> {
        let path = Self::resolve_path(config_path, paths::default_config_path())?;

        if !path.exists() {
            Self::create_default_config_file(&path)?;
            trace!("Created default config file at: {}", path.display());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;

        let mut config = Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        config.config_path = Some(path.clone());

        // Write back so missing fields show up with their defaults
        if save {
            if let Err(e) = config.save_to_file(&path) {
                warn!("Failed to update config file with missing fields: {e}");
            }
        }

        Ok(config)
    }

    fn resolve_path(config_path: Option<&Path>, default: Option<PathBuf>) -> ConfigResult<PathBuf> {
        match config_path {
            Some(p) => Ok(p.to_path_buf()),
            None => default.ok_or(ConfigError::NoConfigDir),
        }
    }

    fn parse(contents: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as null rather than an empty mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    fn create_default_config_file(path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        Config::default().save_to_file(path)
    }

    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(ConfigError::Serialize)?;
        fs::write(path, format!("{CONFIG_HEADER}{yaml}")).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn set_config(config: Config) {
        if let Ok(mut global_config) = CURRENT_CONFIG.write() {
            *global_config = config;
        }
    }

    pub fn current() -> RwLockReadGuard<'static, Config> {
        CURRENT_CONFIG
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn update<F>(f: F)
    where
        F: FnOnce(&mut Config),
    {
        if let Ok(mut config) = CURRENT_CONFIG.write() {
            f(&mut config);
        }
    }

    pub fn reset() {
        if let Ok(mut config) = CURRENT_CONFIG.write() {
            *config = Config::default();
        }
    }

    pub fn platform() -> Option<String> {
        Self::current().platform.clone()
    }

    pub fn default_window() -> WindowRect {
        Self::current().default_window
    }
}
