use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::DumpResult;

/// Output-root settings for the descriptor writer.
///
/// The base directory is handed to the writer explicitly at construction
/// time; nothing in the crate reads process-wide state.
#[derive(Deserialize, Serialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub base_output_dir: PathBuf,
}

impl Config {
    pub fn from_path(path: PathBuf) -> DumpResult<Self> {
        let config = std::fs::read_to_string(path)?;
        toml::from_str(&config).map_err(Into::into)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_output_dir: PathBuf::from("input"),
        }
    }
}
