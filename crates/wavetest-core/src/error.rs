/// Error types shared by generation and execution
use std::path::PathBuf;
use thiserror::Error;

pub type WaveResult<T> = Result<T, WaveError>;

#[derive(Debug, Error)]
pub enum WaveError {
    #[error("Invalid route name format: {name}")]
    InvalidRouteName { name: String },

    #[error("Failed to read route manifest at {path}: {error}")]
    ManifestReadError { path: PathBuf, error: String },

    #[error("Invalid route manifest: {0}")]
    InvalidManifest(String),

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Failed to launch test runner '{program}': {error}")]
    RunnerSpawn { program: String, error: String },

    #[error("I/O error at {path}: {error}")]
    IoError {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaveError {
    /// Create an invalid route name error
    pub fn invalid_route_name(name: impl Into<String>) -> Self {
        Self::InvalidRouteName { name: name.into() }
    }

    /// Create a manifest read error
    pub fn manifest_read(path: impl Into<PathBuf>, error: impl ToString) -> Self {
        Self::ManifestReadError {
            path: path.into(),
            error: error.to_string(),
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            error,
        }
    }

    /// Create a runner spawn error
    pub fn runner_spawn(program: impl Into<String>, error: impl ToString) -> Self {
        Self::RunnerSpawn {
            program: program.into(),
            error: error.to_string(),
        }
    }
}
