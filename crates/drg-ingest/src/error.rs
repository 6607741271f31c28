use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("{path} has no header row")]
    Empty { path: PathBuf },

    #[error("{path} has no {column} column")]
    MissingColumn { path: PathBuf, column: String },
}

pub type Result<T> = std::result::Result<T, IngestError>;
