use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::content::application::ports::outgoing::document_store::{
    DocumentStore, DocumentStoreError,
};

type Collections = BTreeMap<String, BTreeMap<String, Value>>;

/// Document store held entirely in memory, with the same merge and
/// update-must-exist semantics as the remote adapter. Used by service tests
/// and for running the subsystem without any remote project configured.
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<Mutex<Collections>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Collections> {
        self.collections.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn document_count(&self, collection: &str) -> usize {
        self.lock().get(collection).map_or(0, |docs| docs.len())
    }

    pub fn get(&self, collection: &str, key: &str) -> Option<Value> {
        self.lock()
            .get(collection)
            .and_then(|docs| docs.get(key))
            .cloned()
    }
}

fn merge_into(target: &mut Value, incoming: Value) {
    match (target, incoming) {
        (Value::Object(existing), Value::Object(fields)) => {
            for (name, value) in fields {
                existing.insert(name, value);
            }
        }
        (target, incoming) => *target = incoming,
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get_document(
        &self,
        collection: &str,
        key: &str,
    ) -> Result<Option<Value>, DocumentStoreError> {
        Ok(self.get(collection, key))
    }

    async fn set_document(
        &self,
        collection: &str,
        key: &str,
        value: Value,
        merge: bool,
    ) -> Result<(), DocumentStoreError> {
        let mut collections = self.lock();
        let docs = collections.entry(collection.to_string()).or_default();
        match docs.get_mut(key) {
            Some(existing) if merge => merge_into(existing, value),
            _ => {
                docs.insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    async fn update_fields(
        &self,
        collection: &str,
        key: &str,
        fields: Value,
    ) -> Result<(), DocumentStoreError> {
        let mut collections = self.lock();
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(key))
            .ok_or_else(|| {
                DocumentStoreError::Unavailable(format!("no document {collection}/{key}"))
            })?;
        merge_into(doc, fields);
        Ok(())
    }

    async fn list_documents(
        &self,
        collection: &str,
    ) -> Result<Vec<(String, Value)>, DocumentStoreError> {
        Ok(self
            .lock()
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}
