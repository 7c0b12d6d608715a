use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum DirdocError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not UTF-8 text")]
    Decode { path: PathBuf },
    #[error("Root is not a readable directory: {0}")]
    InvalidRoot(PathBuf),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl DirdocError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DirdocError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn decode(path: impl Into<PathBuf>) -> Self {
        DirdocError::Decode { path: path.into() }
    }
    /// True for the "not text" outcome, which callers skip without logging.
    pub fn is_decode(&self) -> bool {
        matches!(self, DirdocError::Decode { .. })
    }
}
