use crate::selection::history::DEFAULT_HISTORY_LIMIT;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const HISTORY_FILE: &str = "vocab_history.json";
pub const PLANS_FILE: &str = "plans.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}. Please ensure it exists.")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("data_dir specified in {path} ('{data_dir}') is not a valid directory.")]
    InvalidDataDir { path: PathBuf, data_dir: String },
}

fn default_state_dir() -> String {
    "state".to_string()
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

fn default_age_group() -> String {
    "Pre-K".to_string()
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Holds tewa_words.json, tewa_phrases.json and english_vocab.json.
    pub data_dir: String,
    #[serde(default = "default_state_dir")]
    pub state_dir: String,
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    #[serde(default = "default_age_group")]
    pub default_age_group: String,
}

impl Config {
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }

    pub fn history_path(&self) -> PathBuf {
        Path::new(&self.state_dir).join(HISTORY_FILE)
    }

    pub fn plans_path(&self) -> PathBuf {
        Path::new(&self.state_dir).join(PLANS_FILE)
    }
}

pub fn parse_config(file_path: &Path, contents: &str) -> Result<Config, ConfigError> {
    toml::from_str::<Config>(contents).map_err(|source| ConfigError::Parse {
        path: file_path.to_path_buf(),
        source,
    })
}

pub fn load_config_from_file(file_path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(file_path).map_err(|source| ConfigError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;
    let loaded_config = parse_config(file_path, &contents)?;
    if !loaded_config.data_path().is_dir() {
        return Err(ConfigError::InvalidDataDir {
            path: file_path.to_path_buf(),
            data_dir: loaded_config.data_dir,
        });
    }
    Ok(loaded_config)
}
