//! Event scripts: a TOML list of host events with optional clock advances
//! and config pushes between them.

use std::fs;
use std::path::{Path, PathBuf};

use runecraft_core::HostEvent;
use runecraft_types::RunecraftConfig;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read script {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse script {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    /// Config at plugin start; defaults when absent
    #[serde(default)]
    pub config: RunecraftConfig,
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Step {
    /// Seconds to move the replay clock before this step
    #[serde(default)]
    pub advance_secs: i64,
    /// Replaces the config and posts a change notification
    pub config: Option<RunecraftConfig>,
    pub event: Option<HostEvent>,
}

pub fn parse_script(contents: &str, path: &Path) -> Result<Script, ScriptError> {
    toml::from_str(contents).map_err(|source| ScriptError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_script(path: &Path) -> Result<Script, ScriptError> {
    let contents = fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&contents, path)
}
