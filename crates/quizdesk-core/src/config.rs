//! Data file configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Name of the config file searched for in the working directory.
pub const CONFIG_FILE: &str = "quizdesk.toml";

/// Environment variable overriding `data_dir`.
pub const DATA_DIR_ENV: &str = "QUIZDESK_DATA_DIR";

/// Top-level quizdesk configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizdeskConfig {
    /// Directory the data files live in.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_users_file")]
    pub users_file: PathBuf,
    #[serde(default = "default_quizzes_file")]
    pub quizzes_file: PathBuf,
    #[serde(default = "default_results_file")]
    pub results_file: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_users_file() -> PathBuf {
    PathBuf::from("users.txt")
}
fn default_quizzes_file() -> PathBuf {
    PathBuf::from("quizzes.txt")
}
fn default_results_file() -> PathBuf {
    PathBuf::from("results.txt")
}

impl Default for QuizdeskConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            users_file: default_users_file(),
            quizzes_file: default_quizzes_file(),
            results_file: default_results_file(),
        }
    }
}

impl QuizdeskConfig {
    pub fn users_path(&self) -> PathBuf {
        self.data_dir.join(&self.users_file)
    }

    pub fn quizzes_path(&self) -> PathBuf {
        self.data_dir.join(&self.quizzes_file)
    }

    pub fn results_path(&self) -> PathBuf {
        self.data_dir.join(&self.results_file)
    }
}

/// Load config from an explicit path, or `quizdesk.toml` in the working
/// directory, or fall back to defaults.
///
/// `QUIZDESK_DATA_DIR` overrides `data_dir` from the file.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizdeskConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => Some(PathBuf::from(CONFIG_FILE)).filter(|p| p.exists()),
    };

    let mut config = match config_path {
        Some(path) => parse_config(&path)?,
        None => QuizdeskConfig::default(),
    };

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    Ok(config)
}

fn parse_config(path: &Path) -> Result<QuizdeskConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let config = toml::from_str::<QuizdeskConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}
