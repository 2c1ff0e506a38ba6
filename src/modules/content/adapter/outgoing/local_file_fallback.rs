use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::content::application::ports::outgoing::fallback_store::{
    FallbackStore, FallbackStoreError,
};
use crate::content::domain::entities::PortfolioData;

/// Fallback store backed by a single JSON file.
///
/// The whole aggregate is written on every save, mirroring the
/// single-key blob the subsystem expects from its local backstop.
pub struct LocalFileFallback {
    path: PathBuf,
}

impl LocalFileFallback {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FallbackStore for LocalFileFallback {
    async fn load(&self) -> Result<Option<PortfolioData>, FallbackStoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(FallbackStoreError::Io(e.to_string())),
        };
        let data = serde_json::from_slice(&bytes)
            .map_err(|e| FallbackStoreError::Decode(e.to_string()))?;
        Ok(Some(data))
    }

    async fn save(&self, data: &PortfolioData) -> Result<(), FallbackStoreError> {
        let bytes = serde_json::to_vec_pretty(data)
            .map_err(|e| FallbackStoreError::Decode(e.to_string()))?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| FallbackStoreError::Io(e.to_string()))?;
            }
        }
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| FallbackStoreError::Io(e.to_string()))
    }
}
