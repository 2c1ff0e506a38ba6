use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::media::application::ports::outgoing::blob_store::{
    BlobItem, BlobStore, BlobStoreError,
};

const STORAGE_HOST: &str = "https://firebasestorage.googleapis.com/v0";

/// Object names live in a single path segment of the REST URL, so the
/// folder separator has to be escaped along with everything else.
fn encode_object_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for byte in name.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Internal seam so the adapter is testable without real HTTP.
#[async_trait]
trait StorageHttp: Send + Sync {
    async fn upload(
        &self,
        url: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<Value, String>;

    async fn get(&self, url: &str) -> Result<Value, String>;

    /// `false` means the object did not exist.
    async fn delete(&self, url: &str) -> Result<bool, String>;
}

struct ReqwestStorageHttp {
    client: reqwest::Client,
}

#[async_trait]
impl StorageHttp for ReqwestStorageHttp {
    async fn upload(
        &self,
        url: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<Value, String> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("upload failed with {status}: {body}"));
        }
        response.json::<Value>().await.map_err(|e| e.to_string())
    }

    async fn get(&self, url: &str) -> Result<Value, String> {
        let response = self.client.get(url).send().await.map_err(|e| e.to_string())?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("GET failed with {status}: {body}"));
        }
        response.json::<Value>().await.map_err(|e| e.to_string())
    }

    async fn delete(&self, url: &str) -> Result<bool, String> {
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("DELETE failed with {status}: {body}"));
        }
        Ok(true)
    }
}

/// Blob store over the Firebase Storage REST surface.
pub struct FirebaseBlobStore {
    http: Arc<dyn StorageHttp>,
    bucket: String,
}

impl FirebaseBlobStore {
    pub fn new(bucket: &str) -> Self {
        tracing::info!(bucket, "Using Firebase blob store");
        Self {
            http: Arc::new(ReqwestStorageHttp {
                client: reqwest::Client::new(),
            }),
            bucket: bucket.to_string(),
        }
    }

    #[cfg(test)]
    fn with_http(http: Arc<dyn StorageHttp>, bucket: &str) -> Self {
        Self {
            http,
            bucket: bucket.to_string(),
        }
    }

    fn object_url(&self, path: &str) -> String {
        format!(
            "{STORAGE_HOST}/b/{}/o/{}",
            self.bucket,
            encode_object_name(path)
        )
    }

    fn download_url(&self, path: &str, token: Option<&str>) -> String {
        let base = format!("{}?alt=media", self.object_url(path));
        match token {
            Some(token) => format!("{base}&token={token}"),
            None => base,
        }
    }
}

fn first_download_token(metadata: &Value) -> Option<&str> {
    metadata
        .get("downloadTokens")
        .and_then(Value::as_str)
        .and_then(|tokens| tokens.split(',').next())
        .filter(|token| !token.is_empty())
}

fn blob_name(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}

#[async_trait]
impl BlobStore for FirebaseBlobStore {
    async fn put(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, BlobStoreError> {
        let url = format!(
            "{STORAGE_HOST}/b/{}/o?uploadType=media&name={}",
            self.bucket,
            encode_object_name(path)
        );
        let metadata = self
            .http
            .upload(&url, bytes, content_type)
            .await
            .map_err(BlobStoreError::Unavailable)?;
        Ok(self.download_url(path, first_download_token(&metadata)))
    }

    async fn list(&self, prefix: &str) -> Result<Vec<BlobItem>, BlobStoreError> {
        let url = format!(
            "{STORAGE_HOST}/b/{}/o?prefix={}/",
            self.bucket,
            encode_object_name(prefix)
        );
        let listing = self
            .http
            .get(&url)
            .await
            .map_err(BlobStoreError::Unavailable)?;

        let mut out = Vec::new();
        if let Some(items) = listing.get("items").and_then(Value::as_array) {
            for item in items {
                let Some(path) = item.get("name").and_then(Value::as_str) else {
                    continue;
                };
                out.push(BlobItem {
                    name: blob_name(path),
                    path: path.to_string(),
                    url: self.download_url(path, first_download_token(item)),
                });
            }
        }
        Ok(out)
    }

    async fn delete(&self, path: &str) -> Result<(), BlobStoreError> {
        let existed = self
            .http
            .delete(&self.object_url(path))
            .await
            .map_err(BlobStoreError::Unavailable)?;
        if !existed {
            return Err(BlobStoreError::NotFound(path.to_string()));
        }
        Ok(())
    }
}
