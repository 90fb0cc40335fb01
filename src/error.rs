use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FolioError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unreadable preferences file {path}: {source}")]
    Preferences {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no home directory; pass --prefs to choose a preferences file")]
    NoHomeDir,

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl FolioError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
