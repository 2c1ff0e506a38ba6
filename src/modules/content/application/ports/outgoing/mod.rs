pub mod document_store;
pub mod fallback_store;
pub mod notifier;
