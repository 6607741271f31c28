use thiserror::Error;

/// Errors raised when parsing model values from their string forms.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown severity class: {0}")]
    UnknownSeverityClass(String),

    #[error("unknown LOS bin label: {0}")]
    UnknownLosBin(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
