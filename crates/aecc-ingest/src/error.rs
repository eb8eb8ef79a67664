use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read episode file {path}: {message}")]
    Read { path: PathBuf, message: String },

    #[error("failed to write episode file {path}: {message}")]
    Write { path: PathBuf, message: String },
}

impl IngestError {
    pub(crate) fn read(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Read {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Write {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
