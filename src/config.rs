use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{orchestrator::DEFAULT_WORKERS, KikimineError};

/// Batch-job settings. Every field has a default, so a partial config file
/// only overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub corpus_dir: PathBuf,
    pub cache_dir: PathBuf,
    pub dictionary_dir: PathBuf,
    pub workers: usize,
    pub distractor_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            corpus_dir: PathBuf::from("corpus"),
            cache_dir: PathBuf::from("cache"),
            dictionary_dir: PathBuf::from("dictionaries"),
            workers: DEFAULT_WORKERS,
            distractor_width: 8,
        }
    }
}

impl Config {
    /// A missing file means defaults; a malformed one is reported and
    /// ignored rather than aborting a batch run.
    pub fn load_or_default(path: &Path) -> Config {
        match Self::load(path) {
            Ok(Some(config)) => config,
            Ok(None) => Config::default(),
            Err(e) => {
                warn!("Failed to load {:?}: {}. Using defaults.", path, e);
                Config::default()
            }
        }
    }

    fn load(path: &Path) -> Result<Option<Config>, KikimineError> {
        if !path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }
}
