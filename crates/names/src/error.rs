use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameListError {
    #[error("Failed to read name list '{path}': {error}")]
    Io { path: String, error: String },
}

pub type NameListResult<T> = std::result::Result<T, NameListError>;
