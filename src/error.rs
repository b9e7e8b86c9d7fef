use thiserror::Error;

pub type Result<T> = std::result::Result<T, GcyclesError>;

#[derive(Error, Debug)]
pub enum GcyclesError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
