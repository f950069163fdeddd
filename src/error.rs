use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while setting up the canvas
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type CanvasResult<T> = Result<T, CanvasError>;
