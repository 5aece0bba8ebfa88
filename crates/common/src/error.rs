use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewscheckError {
    #[error("configuration error: {0}")]
    Config(String),

    /// Fatal: a model artifact could not be read or is inconsistent.
    /// Raised only during startup; there is no serving fallback.
    #[error("failed to load {name} artifact from {}: {cause}", path.display())]
    ArtifactLoad {
        name: &'static str,
        path: PathBuf,
        cause: String,
    },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("inference error: {0}")]
    Inference(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type NewscheckResult<T> = Result<T, NewscheckError>;
