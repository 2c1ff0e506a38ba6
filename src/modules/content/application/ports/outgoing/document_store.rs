use async_trait::async_trait;
use serde_json::Value;

/// Errors surfaced by a remote document store.
///
/// Everything here is treated the same way by the sync layer: the operation
/// failed and the local fallback takes over. The variants exist for logging.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DocumentStoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Document could not be decoded: {0}")]
    Decode(String),

    #[error("Remote call timed out")]
    Timeout,
}

/// Port for a remote per-document key-value store.
///
/// One remote collection exists per content entity type; singleton entities
/// (personal info, website settings) live under a fixed key within their
/// collection. Documents are plain JSON objects.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Returns the document, or `None` when it does not exist.
    async fn get_document(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Value>, DocumentStoreError>;

    /// Writes a document. With `merge` set, fields present in `value` are
    /// merged over the existing document; otherwise the document is replaced
    /// wholesale. Creates the document when absent in both modes.
    async fn set_document(
        &self,
        collection: &str,
        key: &str,
        value: Value,
        merge: bool,
    ) -> Result<(), DocumentStoreError>;

    /// Overwrites only the listed top-level fields of an existing document.
    async fn update_fields(
        &self,
        collection: &str,
        key: &str,
        fields: Value,
    ) -> Result<(), DocumentStoreError>;

    /// Enumerates every document in a collection as `(key, value)` pairs.
    async fn list_documents(
        &self,
        collection: &str,
    ) -> Result<Vec<(String, Value)>, DocumentStoreError>;
}
