pub mod firestore_document_store;
pub mod local_file_fallback;
pub mod memory_document_store;

pub use firestore_document_store::FirestoreDocumentStore;
pub use local_file_fallback::LocalFileFallback;
pub use memory_document_store::InMemoryDocumentStore;
