//! Object storage
//!
//! A thin client over `object_store` (S3, GCS, Azure, local filesystem) plus
//! the two pieces of discipline the export pipeline needs on top of it:
//! chunked bulk deletion and recovery overwrite of stale partitions.

mod client;
mod delete;
mod recovery;

pub use client::StorageClient;
pub use delete::{batches, ChunkedDeleter, DELETE_BATCH_LIMIT};
pub use recovery::{output_key, partition_from_key, RecoveryOverwriter};

#[cfg(test)]
mod tests;
