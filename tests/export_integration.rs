//! End-to-end export tests: real DuckDB source, in-memory object store

use object_store::memory::InMemory;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tablesnap::database::DuckDbSource;
use tablesnap::export::TableExporter;
use tablesnap::storage::StorageClient;
use tablesnap::Error;

fn seeded_source() -> DuckDbSource {
    let source = DuckDbSource::open_in_memory().unwrap();
    source
        .execute_batch(
            "CREATE TABLE glzanmst (
                 item_code VARCHAR,
                 warehouse_code VARCHAR,
                 stock_qty INTEGER,
                 target_date DATE
             );
             INSERT INTO glzanmst VALUES
                 ('A001', 'W1', 12, DATE '2024-09-01'),
                 ('A001', 'W2',  3, DATE '2024-09-01'),
                 ('A002', 'W1',  5, DATE '2024-09-02'),
                 ('A001', 'W1', 11, DATE '2024-09-03'),
                 ('A001', 'W1', 99, DATE '2024-09-04');

             CREATE TABLE glysnmst (
                 account_code VARCHAR,
                 budget_amount BIGINT,
                 budget_month DATE
             );
             INSERT INTO glysnmst VALUES
                 ('5001', 150000, DATE '2023-01-01'),
                 ('5002',  80000, DATE '2023-01-01'),
                 ('5001', 170000, DATE '2023-02-01');",
        )
        .unwrap();
    source
}

fn memory_client() -> StorageClient {
    StorageClient::with_store(Arc::new(InMemory::new()))
}

#[tokio::test]
async fn daily_export_writes_one_object_per_date() {
    let source = seeded_source();
    let storage = memory_client();
    let exporter = TableExporter::new(&source, &storage);

    let summary = exporter
        .export("glzanmst", "2024-09-01", "2024-09-03")
        .await
        .unwrap();

    assert_eq!(summary.partitions, 3);
    assert_eq!(summary.rows, 4); // 2024-09-04 row excluded

    assert_eq!(
        storage.list_object_keys("glzanmst").await.unwrap(),
        vec![
            "glzanmst/2024-09-01",
            "glzanmst/2024-09-02",
            "glzanmst/2024-09-03"
        ]
    );

    let body = storage.get_object("glzanmst/2024-09-01").await.unwrap();
    assert_eq!(
        std::str::from_utf8(&body).unwrap(),
        "A001,W1,12,2024-09-01\nA001,W2,3,2024-09-01\n"
    );

    let second = storage.get_object("glzanmst/2024-09-02").await.unwrap();
    assert_eq!(
        std::str::from_utf8(&second).unwrap(),
        "A002,W1,5,2024-09-02\n"
    );
}

#[tokio::test]
async fn monthly_export_collapses_range_to_months() {
    let source = seeded_source();
    let storage = memory_client();
    let exporter = TableExporter::new(&source, &storage);

    let summary = exporter
        .export("glysnmst", "2023-01-15", "2023-02-03")
        .await
        .unwrap();

    assert_eq!(summary.partitions, 2);
    assert_eq!(summary.rows, 3);
    assert_eq!(
        storage.list_object_keys("glysnmst").await.unwrap(),
        vec!["glysnmst/2023-01-01", "glysnmst/2023-02-01"]
    );

    let january = storage.get_object("glysnmst/2023-01-01").await.unwrap();
    assert_eq!(
        std::str::from_utf8(&january).unwrap(),
        "5001,150000,2023-01-01\n5002,80000,2023-01-01\n"
    );
}

#[tokio::test]
async fn rerun_after_prior_export_leaves_exactly_one_copy_per_partition() {
    let source = seeded_source();
    let storage = memory_client();
    let exporter = TableExporter::new(&source, &storage);

    exporter
        .export("glzanmst", "2024-09-01", "2024-09-03")
        .await
        .unwrap();
    exporter
        .export("glzanmst", "2024-09-01", "2024-09-03")
        .await
        .unwrap();

    let keys = storage.list_object_keys("glzanmst").await.unwrap();
    assert_eq!(keys.len(), 3, "re-export must overwrite, not duplicate");
}

#[tokio::test]
async fn invalid_parameters_are_rejected_without_touching_storage() {
    let source = seeded_source();
    let storage = memory_client();
    let exporter = TableExporter::new(&source, &storage);

    let err = exporter
        .export("glzanmst", "20210709", "20210709")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidDate { .. }));

    let err = exporter
        .export("invalid_table_name", "2021-07-09", "2021-07-09")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::UnknownTable { .. }));

    assert!(storage.list_object_keys("").await.unwrap().is_empty());
}
