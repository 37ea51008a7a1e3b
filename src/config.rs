use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub static CONFIG_FILE_NAME: &str = "config.yaml";

/// Connection settings for the target bucket, read once at startup.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// `host` or `host:port`, without scheme.
    pub end_point: String,
    pub access_user: String,
    pub access_password: String,
    pub bucket: String,
}

impl Config {
    /// Directory holding the running executable, where `config.yaml` lives.
    pub fn default_dir() -> Result<PathBuf> {
        let exe = std::env::current_exe().map_err(|source| Error::ConfigRead {
            path: PathBuf::from(CONFIG_FILE_NAME),
            source,
        })?;
        Ok(exe
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")))
    }

    pub fn load_from_dir(dir: &Path) -> Result<Config> {
        let path = dir.join(CONFIG_FILE_NAME);
        let content = fs::read(&path).map_err(|source| Error::ConfigRead {
            path: path.clone(),
            source,
        })?;
        tracing::debug!("loaded config from {}", path.display());
        Self::parse(&content, path)
    }

    fn parse(content: &[u8], path: PathBuf) -> Result<Config> {
        serde_yaml::from_slice(content).map_err(|source| Error::ConfigParse { path, source })
    }
}
