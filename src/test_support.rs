//! Shared fakes for service-level tests.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::content::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};
use crate::content::application::ports::outgoing::fallback_store::{
    FallbackStore, FallbackStoreError,
};
use crate::content::domain::entities::PortfolioData;

/// Document store whose every operation fails as unreachable.
pub struct FailingDocumentStore;

#[async_trait]
impl DocumentStore for FailingDocumentStore {
    async fn get_document(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Value>, DocumentStoreError> {
        Err(DocumentStoreError::Unavailable(format!(
            "unreachable: get {collection}/{key}"
        )))
    }

    async fn set_document(
        &self,
        collection: &str,
        key: &str,
        _value: Value,
        _merge: bool,
    ) -> Result<(), DocumentStoreError> {
        Err(DocumentStoreError::Unavailable(format!(
            "unreachable: set {collection}/{key}"
        )))
    }

    async fn update_fields(
        &self,
        collection: &str,
        key: &str,
        _fields: Value,
    ) -> Result<(), DocumentStoreError> {
        Err(DocumentStoreError::Unavailable(format!(
            "unreachable: update {collection}/{key}"
        )))
    }

    async fn list_documents(
        &self,
        collection: &str,
    ) -> Result<Vec<(String, Value)>, DocumentStoreError> {
        Err(DocumentStoreError::Unavailable(format!(
            "unreachable: list {collection}"
        )))
    }
}

/// Document store whose operations never resolve, for timeout tests.
pub struct HangingDocumentStore;

#[async_trait]
impl DocumentStore for HangingDocumentStore {
    async fn get_document(
        &self,
        _collection: &str,
        _key: &str,
    ) -> Result<Option<Value>, DocumentStoreError> {
        std::future::pending().await
    }

    async fn set_document(
        &self,
        _collection: &str,
        _key: &str,
        _value: Value,
        _merge: bool,
    ) -> Result<(), DocumentStoreError> {
        std::future::pending().await
    }

    async fn update_fields(
        &self,
        _collection: &str,
        _key: &str,
        _fields: Value,
    ) -> Result<(), DocumentStoreError> {
        std::future::pending().await
    }

    async fn list_documents(
        &self,
        _collection: &str,
    ) -> Result<Vec<(String, Value)>, DocumentStoreError> {
        std::future::pending().await
    }
}

/// Fallback store holding its blob in memory.
#[derive(Clone, Default)]
pub struct MemoryFallback {
    blob: Arc<Mutex<Option<PortfolioData>>>,
}

impl MemoryFallback {
    pub async fn set(&self, data: PortfolioData) {
        *self.blob.lock().await = Some(data);
    }

    pub async fn current(&self) -> Option<PortfolioData> {
        self.blob.lock().await.clone()
    }
}

#[async_trait]
impl FallbackStore for MemoryFallback {
    async fn load(&self) -> Result<Option<PortfolioData>, FallbackStoreError> {
        Ok(self.blob.lock().await.clone())
    }

    async fn save(&self, data: &PortfolioData) -> Result<(), FallbackStoreError> {
        *self.blob.lock().await = Some(data.clone());
        Ok(())
    }
}
