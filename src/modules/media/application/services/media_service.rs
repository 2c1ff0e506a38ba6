use uuid::Uuid;

use crate::media::application::ports::outgoing::blob_store::{
    BlobItem, BlobStore, BlobStoreError,
};

const MEDIA_PREFIX: &str = "media";

fn extension_of(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext).filter(|ext| !ext.is_empty())
}

fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension.map(str::to_ascii_lowercase).as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("pdf") => "application/pdf",
        Some("mp4") => "video/mp4",
        _ => "application/octet-stream",
    }
}

/// Media uploads, listing and deletion over a blob-store port.
///
/// Uploads fail loudly; there is no local fallback for binary content.
pub struct MediaService<B: BlobStore> {
    blobs: B,
}

impl<B: BlobStore> MediaService<B> {
    pub fn new(blobs: B) -> Self {
        Self { blobs }
    }

    /// Store `bytes` under a fresh name that keeps the original extension,
    /// returning the public download URL.
    pub async fn upload_media(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, BlobStoreError> {
        let extension = extension_of(filename);
        let path = match extension {
            Some(ext) => format!("{MEDIA_PREFIX}/{}.{ext}", Uuid::new_v4()),
            None => format!("{MEDIA_PREFIX}/{}", Uuid::new_v4()),
        };
        let content_type = content_type_for(extension);

        tracing::info!(%path, content_type, size = bytes.len(), "Uploading media blob");
        let url = self.blobs.put(&path, bytes, content_type).await?;
        Ok(url)
    }

    /// List the media folder. Failure degrades to an empty listing so the
    /// caller can still render, with the cause logged.
    pub async fn list_media(&self) -> Vec<BlobItem> {
        match self.blobs.list(MEDIA_PREFIX).await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(error = %e, "Failed to list media blobs");
                Vec::new()
            }
        }
    }

    /// Delete a blob by its storage path. Reports success as a flag; the
    /// cause of a failed deletion is logged, not surfaced.
    pub async fn delete_media(&self, path: &str) -> bool {
        match self.blobs.delete(path).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(%path, error = %e, "Failed to delete media blob");
                false
            }
        }
    }
}
