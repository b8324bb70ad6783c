//! Store trait contract: object safety, Arc delegation, stub behaviour.

use std::sync::Arc;

use foodshare_core::errors::{FoodshareErrorCode, StoreError};
use foodshare_core::traits::{IReportStore, IReportStoreStub};
use foodshare_core::{FoodshareConfig, TabularResult, Value};

#[test]
fn report_store_is_object_safe() {
    fn _assert_object_safe(_: &dyn IReportStore) {}
}

#[test]
fn arc_delegates_to_inner_store() {
    let stub = Arc::new(IReportStoreStub::new());
    stub.set_result(
        "SELECT 1",
        TabularResult::from_parts(&["one"], vec![vec![Value::Integer(1)]]),
    );

    let store: Arc<dyn IReportStore> = stub.clone();
    let result = store.run_query("SELECT 1").unwrap();
    assert_eq!(result.row_count(), 1);
    assert_eq!(result.get(0, 0), Some(&Value::Integer(1)));
    assert_eq!(stub.queries(), vec!["SELECT 1".to_string()]);
}

#[test]
fn stub_failures_surface_unchanged() {
    let stub = IReportStoreStub::new();
    stub.set_failure(
        "SELECT broken",
        StoreError::query("run report", "no such column: broken"),
    );

    let err = stub.run_query("SELECT broken").unwrap_err();
    assert_eq!(err.error_code(), "QUERY_ERROR");
    assert!(err.to_string().contains("no such column: broken"));
}

#[test]
fn stub_unconfigured_query_is_empty() {
    let stub = IReportStoreStub::new();
    let result = stub.run_query("SELECT * FROM Claims").unwrap();
    assert!(result.is_empty());
}

#[test]
fn stub_insert_hands_out_sequential_rowids() {
    let stub = IReportStoreStub::new();
    let a = stub.insert("insert", "INSERT INTO t VALUES (?1)", &[Value::Integer(1)]).unwrap();
    let b = stub.insert("insert", "INSERT INTO t VALUES (?1)", &[Value::Integer(2)]).unwrap();
    assert_eq!((a, b), (1, 2));
    assert_eq!(stub.executed().len(), 2);
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("foodshare.toml");
    std::fs::write(&path, "[logging]\nlevel = \"debug\"\njson = true\n").unwrap();

    let config = FoodshareConfig::load(&path).unwrap();
    assert_eq!(config.logging.effective_level(), "debug");
    assert!(config.logging.effective_json());
}

#[test]
fn missing_config_file_is_config_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = FoodshareConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
