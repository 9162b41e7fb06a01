//! Chunked bulk deletion
//!
//! The storage delete API caps the number of keys per call, so an arbitrary
//! key list has to be split into batches before it can be deleted.

use super::client::StorageClient;
use crate::error::Result;

/// Maximum keys per delete call (the S3 DeleteObjects hard limit)
pub const DELETE_BATCH_LIMIT: usize = 1000;

/// Split a key list into non-overlapping batches in input order
///
/// Every key appears in exactly one batch and every batch holds at most
/// `batch_limit` keys. An empty list yields no batches.
pub fn batches(keys: &[String], batch_limit: usize) -> impl Iterator<Item = &[String]> {
    keys.chunks(batch_limit.max(1))
}

/// Deletes arbitrary-length key lists in storage-API-sized batches
#[derive(Debug, Clone, Copy)]
pub struct ChunkedDeleter<'a> {
    client: &'a StorageClient,
    batch_limit: usize,
}

impl<'a> ChunkedDeleter<'a> {
    /// Create a deleter with the storage API's batch limit
    pub fn new(client: &'a StorageClient) -> Self {
        Self {
            client,
            batch_limit: DELETE_BATCH_LIMIT,
        }
    }

    /// Override the batch limit (tests exercise the chunking with small limits)
    pub fn with_batch_limit(client: &'a StorageClient, batch_limit: usize) -> Self {
        Self {
            client,
            batch_limit,
        }
    }

    /// Delete every key, issuing one call per batch, returning the batch count
    ///
    /// An empty key list issues zero calls; the storage API rejects empty
    /// delete requests, so it must never see one. A batch failure propagates
    /// immediately and remaining batches are not attempted — the caller's
    /// retry re-lists and re-deletes, which makes partial failure self-healing.
    pub async fn delete_all(&self, keys: &[String]) -> Result<usize> {
        if keys.is_empty() {
            return Ok(0);
        }

        let mut issued = 0;
        for batch in batches(keys, self.batch_limit) {
            self.client.delete_objects(batch).await?;
            issued += 1;
            tracing::debug!(batch_size = batch.len(), "deleted key batch");
        }

        Ok(issued)
    }
}
