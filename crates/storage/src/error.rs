use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid receipt: {0}")]
    InvalidReceipt(String),

    #[error("Points total does not fit in an unsigned 64-bit integer")]
    PointsOutOfRange,
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            StorageError::InvalidReceipt(_) | StorageError::PointsOutOfRange
        )
    }
}
