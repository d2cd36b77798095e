use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use derive_more::{Display, Error};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;

/// Where new secret words come from when none is pinned on the command line
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SourceMode {
    #[default]
    Daily,
    Random,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub source: SourceMode,
    pub show_keyboard: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceMode::Daily,
            show_keyboard: true,
            log_filter: "info".to_string(),
        }
    }
}

impl From<&crate::app::RuntimeSettings> for Config {
    fn from(rs: &crate::app::RuntimeSettings) -> Self {
        Self {
            source: rs.mode,
            show_keyboard: rs.show_keyboard,
            log_filter: rs.log_filter.clone(),
        }
    }
}

#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("could not parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub trait ConfigStore {
    /// A store with nothing saved yet loads the defaults
    fn load(&self) -> Result<Config, ConfigError>;
    fn save(&self, cfg: &Config) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("wordle_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Config, ConfigError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_slice(&bytes).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, cfg: &Config) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
