use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to read extras catalog at {path}")]
    CatalogRead {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Request validation ──
    #[error("unsupported python version '{0}' (expected one of: 3.8, 3.9, 3.10, 3.11)")]
    UnknownPythonVersion(String),

    #[error("unsupported base image '{0}' (expected one of: slim, bookworm, bullseye)")]
    UnknownBaseImage(String),

    #[error("unknown extra '{name}' — run `airforge extras` to list the allowed set")]
    UnknownExtra { name: String },

    #[error("airflow version must not be empty")]
    EmptyAirflowVersion,
}
