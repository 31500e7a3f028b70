use thiserror::Error;

#[derive(Error, Debug)]
pub enum MdspliceError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Section heading not found: {0}")]
    SectionNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MdspliceError>;
