use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::output::OutputConfig;

pub mod lookup;
pub mod output;
pub mod seeds;

pub use seeds::load_seed_groups;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub output: OutputConfig,

    /// Seed word file; the embedded lists are used when unset
    pub seeds_path: Option<PathBuf>,
    /// Directory holding `n5.csv` .. `n1.csv`
    pub csv_dir: Option<PathBuf>,
}

impl Config {
    /// Defaults overridden by environment variables
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = LookupConfig::from_vars(&var);

        let mut output = OutputConfig::default();
        if let Some(path) = var("OUTPUT_PATH") {
            output.path = PathBuf::from(path);
        }

        Config {
            lookup,
            output,

            seeds_path: var("SEEDS_PATH").map(PathBuf::from),
            csv_dir: var("CSV_DIR").map(PathBuf::from),
        }
    }

    /// Load a JSON profile; missing sections fall back to defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
