pub mod firebase_blob_store;
pub use firebase_blob_store::FirebaseBlobStore;
