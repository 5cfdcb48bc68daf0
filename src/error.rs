use std::path::PathBuf;

use crate::core::error::SolverError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Chart error: {0}")]
    Chart(String),
}
