//! Tests for the storage module

use super::*;
use crate::partition::DateInterval;
use chrono::NaiveDate;
use object_store::memory::InMemory;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use test_case::test_case;

fn memory_client() -> StorageClient {
    StorageClient::with_store(Arc::new(InMemory::new()))
}

async fn seed(client: &StorageClient, keys: &[&str]) {
    for key in keys {
        client.put_text_object(key, "x").await.unwrap();
    }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ============================================================================
// Client Tests
// ============================================================================

#[tokio::test]
async fn test_put_then_get_roundtrip() {
    let client = memory_client();
    client
        .put_text_object("glzanmst/2024-09-01", "a,b,c\n")
        .await
        .unwrap();

    let bytes = client.get_object("glzanmst/2024-09-01").await.unwrap();
    assert_eq!(&bytes[..], b"a,b,c\n");
}

#[tokio::test]
async fn test_list_scoped_to_prefix() {
    let client = memory_client();
    seed(
        &client,
        &["glzanmst/2024-09-01", "glzanmst/2024-09-02", "glswmtrn/2024-09-01"],
    )
    .await;

    let keys = client.list_object_keys("glzanmst").await.unwrap();
    assert_eq!(keys, vec!["glzanmst/2024-09-01", "glzanmst/2024-09-02"]);
}

#[tokio::test]
async fn test_list_empty_prefix_is_not_an_error() {
    let client = memory_client();
    let keys = client.list_object_keys("never-written").await.unwrap();
    assert!(keys.is_empty());
}

#[tokio::test]
async fn test_delete_objects_rejects_empty_batch() {
    let client = memory_client();
    let err = client.delete_objects(&[]).await.unwrap_err();
    assert!(matches!(err, crate::error::Error::EmptyDeleteRequest));
}

#[tokio::test]
async fn test_delete_objects_tolerates_missing_key() {
    let client = memory_client();
    seed(&client, &["glzanmst/2024-09-01"]).await;

    let keys = vec![
        "glzanmst/2024-09-01".to_string(),
        "glzanmst/2024-09-02".to_string(),
    ];
    client.delete_objects(&keys).await.unwrap();

    assert!(client.list_object_keys("glzanmst").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_copy_object() {
    let client = memory_client();
    seed(&client, &["glzanmst/2024-09-01"]).await;

    client
        .copy_object("glzanmst/2024-09-01", "backup/glzanmst/2024-09-01")
        .await
        .unwrap();

    let bytes = client.get_object("backup/glzanmst/2024-09-01").await.unwrap();
    assert_eq!(&bytes[..], b"x");
}

// ============================================================================
// Chunking Tests
// ============================================================================

#[test_case(0, 3, 0; "empty list yields no batches")]
#[test_case(1, 3, 1)]
#[test_case(3, 3, 1; "exact fit")]
#[test_case(4, 3, 2; "one overflow key")]
#[test_case(10, 3, 4)]
#[test_case(2500, 1000, 3; "storage api limit")]
fn test_batches_count(n: usize, limit: usize, expected: usize) {
    let keys: Vec<String> = (0..n).map(|i| format!("k{i}")).collect();
    let chunks: Vec<&[String]> = batches(&keys, limit).collect();

    assert_eq!(chunks.len(), expected);
    assert!(chunks.iter().all(|c| c.len() <= limit));

    // Batches cover every key exactly once, in input order
    let flattened: Vec<String> = chunks.concat();
    assert_eq!(flattened, keys);
}

#[tokio::test]
async fn test_chunked_delete_empty_issues_zero_calls() {
    let client = memory_client();
    let issued = ChunkedDeleter::new(&client).delete_all(&[]).await.unwrap();
    assert_eq!(issued, 0);
}

#[tokio::test]
async fn test_chunked_delete_removes_everything() {
    let client = memory_client();
    let keys: Vec<String> = (1..=7).map(|i| format!("t/2024-09-0{i}")).collect();
    for key in &keys {
        client.put_text_object(key, "x").await.unwrap();
    }

    let issued = ChunkedDeleter::with_batch_limit(&client, 3)
        .delete_all(&keys)
        .await
        .unwrap();

    assert_eq!(issued, 3); // ceil(7/3)
    assert!(client.list_object_keys("t").await.unwrap().is_empty());
}

// ============================================================================
// Output Key Tests
// ============================================================================

#[test]
fn test_output_key_layout() {
    assert_eq!(output_key("glzanmst", d(2024, 9, 1)), "glzanmst/2024-09-01");
    assert_eq!(output_key("glysnmst", d(2023, 1, 1)), "glysnmst/2023-01-01");
}

#[test]
fn test_partition_from_key() {
    assert_eq!(
        partition_from_key("glzanmst/2024-09-01"),
        Some(d(2024, 9, 1))
    );
    assert_eq!(partition_from_key("glzanmst/readme.txt"), None);
    assert_eq!(partition_from_key("2024-09-01"), Some(d(2024, 9, 1)));
}

// ============================================================================
// Recovery Tests
// ============================================================================

#[tokio::test]
async fn test_recovery_deletes_only_in_range_keys() {
    let client = memory_client();
    seed(
        &client,
        &[
            "glzanmst/2024-08-31",
            "glzanmst/2024-09-01",
            "glzanmst/2024-09-02",
            "glzanmst/2024-09-03",
            "glzanmst/2024-09-04",
            "glzanmst/notes.txt",
            "glswmtrn/2024-09-02",
        ],
    )
    .await;

    let interval = DateInterval::new(d(2024, 9, 1), d(2024, 9, 3)).unwrap();
    let removed = RecoveryOverwriter::new(&client)
        .clear_range("glzanmst", &interval)
        .await
        .unwrap();

    assert_eq!(removed, 3);
    assert_eq!(
        client.list_object_keys("glzanmst").await.unwrap(),
        vec![
            "glzanmst/2024-08-31",
            "glzanmst/2024-09-04",
            "glzanmst/notes.txt"
        ]
    );
    // Other tables untouched
    assert_eq!(
        client.list_object_keys("glswmtrn").await.unwrap(),
        vec!["glswmtrn/2024-09-02"]
    );
}

#[tokio::test]
async fn test_recovery_is_idempotent() {
    let client = memory_client();
    seed(&client, &["glzanmst/2024-09-01", "glzanmst/2024-09-02"]).await;

    let interval = DateInterval::new(d(2024, 9, 1), d(2024, 9, 3)).unwrap();
    let overwriter = RecoveryOverwriter::new(&client);

    let first = overwriter.clear_range("glzanmst", &interval).await.unwrap();
    let second = overwriter.clear_range("glzanmst", &interval).await.unwrap();

    assert_eq!(first, 2);
    assert_eq!(second, 0);
}

#[tokio::test]
async fn test_recovery_on_never_exported_range() {
    let client = memory_client();
    let interval = DateInterval::new(d(2024, 9, 1), d(2024, 9, 3)).unwrap();

    let removed = RecoveryOverwriter::new(&client)
        .clear_range("glzanmst", &interval)
        .await
        .unwrap();

    assert_eq!(removed, 0);
}
