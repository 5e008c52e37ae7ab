use thiserror::Error;

pub type Result<T> = std::result::Result<T, DebtError>;

#[derive(Error, Debug)]
pub enum DebtError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("validation error: {0}")]
    ValidationError(String),
    #[error("debt {0} not found")]
    NotFoundError(u32),
    #[cfg(feature = "storage-rocksdb")]
    #[error("storage error: {0}")]
    StorageError(#[from] rocksdb::Error),
    #[error("internal error: {0}")]
    InternalError(#[from] serde_json::Error),
}
