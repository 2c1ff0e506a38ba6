use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum BlobStoreError {
    #[error("Blob storage unreachable: {0}")]
    Unavailable(String),

    #[error("Blob not found: {0}")]
    NotFound(String),
}

/// One stored blob, as listed from the bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobItem {
    pub name: String,
    pub path: String,
    pub url: String,
}

/// Port for the media bucket.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store a blob at `path` and return its public download URL.
    async fn put(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, BlobStoreError>;

    async fn list(&self, prefix: &str) -> Result<Vec<BlobItem>, BlobStoreError>;

    async fn delete(&self, path: &str) -> Result<(), BlobStoreError>;
}
