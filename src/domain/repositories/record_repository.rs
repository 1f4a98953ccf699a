use async_trait::async_trait;

use crate::domain::entities::record::Record;

#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryError {
    /// Stored content is not a JSON array of the expected record shape
    ParseError(String),
    IoError(String),
    /// Stored content is valid but the operation can not be applied to it
    InvalidData(String),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RepositoryError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            RepositoryError::IoError(msg) => write!(f, "I/O error: {}", msg),
            RepositoryError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
        }
    }
}

impl std::error::Error for RepositoryError {}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Store owning a record collection and the file mirroring it.
/// Every mutation returns the full updated collection.
#[async_trait]
pub trait RecordRepository<R: Record>: Send + Sync {
    /// Read the collection from storage without touching the in-memory copy
    async fn load(&self) -> Result<Vec<R>>;

    /// Replace the stored collection
    async fn save(&self, records: Vec<R>) -> Result<()>;

    /// Re-read storage; on failure the previous collection is kept and returned
    async fn reload(&self) -> Vec<R>;

    async fn list(&self) -> Vec<R>;

    async fn get(&self, id: u64) -> Option<R> {
        self.list().await.into_iter().find(|record| record.id() == id)
    }

    async fn add(&self, fields: R::Fields) -> Result<Vec<R>>;

    /// Unknown ids leave the collection unchanged; it is still persisted
    async fn update(&self, id: u64, fields: R::Fields) -> Result<Vec<R>>;

    async fn remove(&self, id: u64) -> Result<Vec<R>>;
}
