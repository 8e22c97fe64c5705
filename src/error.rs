use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum RepopacError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} is not a valid directory or file", .0.display())]
    InvalidPath(PathBuf),
}
impl RepopacError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepopacError::Io {
            path: path.into(),
            source,
        }
    }
}
