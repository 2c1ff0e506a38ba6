use async_trait::async_trait;

use crate::content::domain::entities::PortfolioData;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FallbackStoreError {
    #[error("Fallback storage I/O error: {0}")]
    Io(String),

    #[error("Fallback blob could not be decoded: {0}")]
    Decode(String),
}

/// Port for the local durability backstop: one key holding the entire
/// serialized aggregate. Read when the remote fetch fails, written when any
/// remote mutation fails and unconditionally on reset.
#[async_trait]
pub trait FallbackStore: Send + Sync {
    async fn load(&self) -> Result<Option<PortfolioData>, FallbackStoreError>;

    async fn save(&self, data: &PortfolioData) -> Result<(), FallbackStoreError>;
}
