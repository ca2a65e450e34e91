use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PkmError {
    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error("script interpreter '{0}' not found on PATH")]
    InterpreterNotFound(String),

    #[error("script {script} not found at {}", .path.display())]
    ScriptNotFound { script: String, path: PathBuf },

    #[error("failed to start {script}")]
    ScriptSpawnFailed {
        script: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run {script}: {status}")]
    ScriptFailed { script: String, status: ExitStatus },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PkmError {
    /// Name of the script this error refers to, if any.
    pub fn script(&self) -> Option<&str> {
        match self {
            PkmError::ScriptNotFound { script, .. }
            | PkmError::ScriptSpawnFailed { script, .. }
            | PkmError::ScriptFailed { script, .. } => Some(script),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PkmError>;
