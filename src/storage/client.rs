//! Storage client over object_store (S3, GCS, Azure, local filesystem)

use crate::error::{Error, Result};
use bytes::Bytes;
use futures::TryStreamExt;
use object_store::aws::AmazonS3Builder;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::local::LocalFileSystem;
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore;
use std::sync::Arc;

/// Output storage client parsed from a destination URL
#[derive(Debug, Clone)]
pub struct StorageClient {
    /// The object store implementation
    store: Arc<dyn ObjectStore>,
    /// Base path prefix within the bucket/container
    prefix: String,
    /// Original URL scheme for logging
    scheme: String,
}

impl StorageClient {
    /// Parse a destination URL and create the appropriate object store
    ///
    /// Supported formats:
    /// - `s3://bucket/path/` - AWS S3
    /// - `gs://bucket/path/` - Google Cloud Storage
    /// - `az://container/path/` - Azure Blob Storage
    /// - `/local/path/` or `./path/` - Local filesystem
    pub fn parse(url: &str) -> Result<Self> {
        if url.starts_with("s3://") {
            Self::parse_s3(url)
        } else if url.starts_with("gs://") {
            Self::parse_gcs(url)
        } else if url.starts_with("az://") {
            Self::parse_azure(url)
        } else {
            Self::parse_local(url)
        }
    }

    /// Wrap an existing store directly (tests use `object_store::memory::InMemory`)
    pub fn with_store(store: Arc<dyn ObjectStore>) -> Self {
        Self {
            store,
            prefix: String::new(),
            scheme: "memory".to_string(),
        }
    }

    /// Parse an S3 URL
    fn parse_s3(url: &str) -> Result<Self> {
        let without_scheme = url
            .strip_prefix("s3://")
            .ok_or_else(|| Error::config(format!("Invalid s3 URL: {url}")))?;

        let (bucket, prefix) = split_bucket(without_scheme);

        let store = AmazonS3Builder::from_env()
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| Error::config(format!("Failed to create s3 client: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            prefix,
            scheme: "s3".to_string(),
        })
    }

    /// Parse a GCS URL
    fn parse_gcs(url: &str) -> Result<Self> {
        let without_scheme = url
            .strip_prefix("gs://")
            .ok_or_else(|| Error::config(format!("Invalid GCS URL: {url}")))?;

        let (bucket, prefix) = split_bucket(without_scheme);

        let store = GoogleCloudStorageBuilder::from_env()
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| Error::config(format!("Failed to create GCS client: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            prefix,
            scheme: "gs".to_string(),
        })
    }

    /// Parse an Azure Blob URL
    fn parse_azure(url: &str) -> Result<Self> {
        let without_scheme = url
            .strip_prefix("az://")
            .ok_or_else(|| Error::config(format!("Invalid Azure URL: {url}")))?;

        let (container, prefix) = split_bucket(without_scheme);

        let store = MicrosoftAzureBuilder::from_env()
            .with_container_name(container)
            .build()
            .map_err(|e| Error::config(format!("Failed to create Azure client: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            prefix,
            scheme: "az".to_string(),
        })
    }

    /// Parse a local filesystem path
    fn parse_local(path: &str) -> Result<Self> {
        let path = path.strip_prefix("file://").unwrap_or(path);

        std::fs::create_dir_all(path)
            .map_err(|e| Error::config(format!("Failed to create directory {path}: {e}")))?;

        let store = LocalFileSystem::new_with_prefix(path)
            .map_err(|e| Error::config(format!("Failed to create local store: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            prefix: String::new(),
            scheme: "file".to_string(),
        })
    }

    /// Get the scheme (s3, gs, az, file, memory)
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Read an object's bytes
    pub async fn get_object(&self, key: &str) -> Result<Bytes> {
        let path = self.full_path(key);
        let result = self.store.get(&path).await?;
        Ok(result.bytes().await?)
    }

    /// Upload a text object
    pub async fn put_text_object(&self, key: &str, text: &str) -> Result<()> {
        let path = self.full_path(key);
        self.store
            .put(&path, Bytes::from(text.to_owned()).into())
            .await?;
        Ok(())
    }

    /// List object keys under a prefix, ascending
    ///
    /// Keys ending in `/` (directory-marker objects) are excluded; consoles
    /// and other writers create them and they are not exportable data.
    pub async fn list_object_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let list_path = self.full_path(prefix);
        let metas: Vec<object_store::ObjectMeta> =
            self.store.list(Some(&list_path)).try_collect().await?;

        let mut keys: Vec<String> = metas
            .into_iter()
            .map(|meta| self.strip_prefix(meta.location.as_ref()))
            .filter(|key| !key.ends_with('/'))
            .collect();
        keys.sort_unstable();

        Ok(keys)
    }

    /// Delete one batch of objects
    ///
    /// The caller owns batching; a single call here maps to one delete request
    /// against the backing store. An empty key list is invalid usage, callers
    /// must guard it (see `ChunkedDeleter`).
    pub async fn delete_objects(&self, keys: &[String]) -> Result<()> {
        if keys.is_empty() {
            return Err(Error::EmptyDeleteRequest);
        }

        for key in keys {
            let path = self.full_path(key);
            match self.store.delete(&path).await {
                Ok(()) => {}
                // Deleting an already-absent key succeeds, matching S3 semantics
                Err(object_store::Error::NotFound { .. }) => {}
                Err(e) => return Err(e.into()),
            }
        }

        Ok(())
    }

    /// Copy an object to another key within the destination
    pub async fn copy_object(&self, src_key: &str, dst_key: &str) -> Result<()> {
        let src = self.full_path(src_key);
        let dst = self.full_path(dst_key);
        self.store.copy(&src, &dst).await?;
        Ok(())
    }

    /// Join a key onto the destination's base prefix
    fn full_path(&self, key: &str) -> ObjectPath {
        if self.prefix.is_empty() {
            ObjectPath::from(key)
        } else {
            ObjectPath::from(format!(
                "{}/{}",
                self.prefix.trim_end_matches('/'),
                key.trim_start_matches('/')
            ))
        }
    }

    /// Undo `full_path` so callers reason in their own key space
    fn strip_prefix(&self, location: &str) -> String {
        if self.prefix.is_empty() {
            return location.to_string();
        }
        let base = format!("{}/", self.prefix.trim_end_matches('/'));
        location
            .strip_prefix(&base)
            .unwrap_or(location)
            .to_string()
    }
}

/// Split `bucket/optional/prefix` into its two parts
fn split_bucket(without_scheme: &str) -> (&str, String) {
    match without_scheme.find('/') {
        Some(idx) => (
            &without_scheme[..idx],
            without_scheme[idx + 1..].trim_end_matches('/').to_string(),
        ),
        None => (without_scheme, String::new()),
    }
}
