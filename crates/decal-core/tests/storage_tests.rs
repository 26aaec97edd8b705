// Rust guideline compliant 2026-02-06

//! Unit tests for the storage module.

use decal_core::{
    HistoryStore, Order, OrderStageHistory, OrderStatus, OrderStore, Stage,
};
use std::fs;
use tempfile::TempDir;

fn create_test_order(id: &str, custom: bool) -> Order {
    Order {
        id: id.to_string(),
        order_status: OrderStatus::NewOrder.label().to_string(),
        is_custom_decal: custom,
        customer_name: "Test Customer".to_string(),
        created_at: 1000,
        updated_at: 1000,
    }
}

#[test]
fn test_missing_file_loads_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = OrderStore::new(temp_dir.path().join("orders.jsonl"))
        .expect("Failed to create store");

    let orders = store.load_all().expect("Failed to load orders");
    assert!(orders.is_empty());
}

#[test]
fn test_empty_path_rejected() {
    assert!(OrderStore::new(std::path::PathBuf::new()).is_err());
}

#[test]
fn test_save_and_load_by_id() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = OrderStore::new(temp_dir.path().join("orders.jsonl"))
        .expect("Failed to create store");

    store.save(&create_test_order("ord-111111", true)).expect("save");
    store.save(&create_test_order("ord-222222", false)).expect("save");

    let loaded = store.load_by_id("ord-222222").expect("load");
    assert!(!loaded.is_custom_decal);
    assert_eq!(store.load_all().expect("load all").len(), 2);
}

#[test]
fn test_save_replaces_existing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = OrderStore::new(temp_dir.path().join("orders.jsonl"))
        .expect("Failed to create store");

    let mut order = create_test_order("ord-111111", true);
    store.save(&order).expect("save");
    order.customer_name = "Renamed".to_string();
    store.save(&order).expect("save");

    let orders = store.load_all().expect("load all");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].customer_name, "Renamed");
}

#[test]
fn test_load_by_id_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = OrderStore::new(temp_dir.path().join("orders.jsonl"))
        .expect("Failed to create store");

    let err = store.load_by_id("ord-missing").unwrap_err();
    assert_eq!(err.to_string(), "Order not found: ord-missing");
}

#[test]
fn test_optional_fields_default() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("orders.jsonl");
    let content = r#"{"id":"ord-111111","order_status":"Survey","is_custom_decal":true,"created_at":1,"updated_at":1}
{"id":"ord-222222","order_status":"Payment","created_at":1,"updated_at":1}
"#;
    fs::write(&path, content).expect("write");

    let store = OrderStore::new(path).expect("Failed to create store");
    let orders = store.load_all().expect("load all");
    assert_eq!(orders.len(), 2);
    assert!(orders[0].is_custom_decal);
    assert!(!orders[1].is_custom_decal, "Flag defaults to standard");
}

#[test]
fn test_unknown_status_label_round_trips() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = OrderStore::new(temp_dir.path().join("orders.jsonl"))
        .expect("Failed to create store");

    let mut order = create_test_order("ord-333333", false);
    order.order_status = "Legacy Status".to_string();
    store.save(&order).expect("save");

    let loaded = store.load_by_id("ord-333333").expect("load");
    assert_eq!(loaded.order_status, "Legacy Status");
    assert_eq!(loaded.status(), None);
}

#[test]
fn test_update_status() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = OrderStore::new(temp_dir.path().join("orders.jsonl"))
        .expect("Failed to create store");
    store.save(&create_test_order("ord-111111", true)).expect("save");

    let updated = store
        .update_status("ord-111111", OrderStatus::Survey)
        .expect("update");
    assert_eq!(updated.order_status, "Survey");
    assert!(updated.updated_at >= 1000);

    let reloaded = store.load_by_id("ord-111111").expect("load");
    assert_eq!(reloaded.status(), Some(OrderStatus::Survey));
}

#[test]
fn test_update_status_missing_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = OrderStore::new(temp_dir.path().join("orders.jsonl"))
        .expect("Failed to create store");

    assert!(store.update_status("ord-000000", OrderStatus::Survey).is_err());
}

#[test]
fn test_history_for_order_filters_and_sorts() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = HistoryStore::new(temp_dir.path().join("stage_history.jsonl"))
        .expect("Failed to create store");

    let mut design = OrderStageHistory::new("ord-111111".to_string(), Stage::Design, None);
    design.completed_at = 20;
    let mut survey = OrderStageHistory::new(
        "ord-111111".to_string(),
        Stage::Survey,
        Some("measured".to_string()),
    );
    survey.completed_at = 10;
    let other = OrderStageHistory::new("ord-222222".to_string(), Stage::Survey, None);

    store.append(&design).expect("append");
    store.append(&survey).expect("append");
    store.append(&other).expect("append");

    let records = store.for_order("ord-111111").expect("for_order");
    let names: Vec<_> = records.iter().map(|r| r.stage_name.as_str()).collect();
    assert_eq!(names, vec!["Survey", "Design"]);
    assert_eq!(records[0].note.as_deref(), Some("measured"));
}

#[test]
fn test_history_rejects_empty_stage() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = HistoryStore::new(temp_dir.path().join("stage_history.jsonl"))
        .expect("Failed to create store");

    let mut record = OrderStageHistory::new("ord-111111".to_string(), Stage::Survey, None);
    record.stage_name = String::new();
    assert!(store.append(&record).is_err());
}

#[test]
fn test_malformed_lines_skipped() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("orders.jsonl");
    let content = r#"{"id":"ord-111111","order_status":"Survey","created_at":1,"updated_at":1}
{not json

{"id":"ord-222222","order_status":"Payment","created_at":1,"updated_at":1}
"#;
    fs::write(&path, content).expect("write");

    let store = OrderStore::new(path).expect("Failed to create store");
    let orders = store.load_all().expect("load all");
    let ids: Vec<_> = orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["ord-111111", "ord-222222"]);
}

#[test]
fn test_insert_same_customer_same_second_keeps_both() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = OrderStore::new(temp_dir.path().join("orders.jsonl"))
        .expect("Failed to create store");

    let mut custom = Order::new("Linh".to_string(), true);
    let mut standard = Order::new("Linh".to_string(), false);
    custom.created_at = 5000;
    standard.created_at = 5000;
    custom.assign_id(0);
    standard.assign_id(0);
    assert_eq!(custom.id, standard.id, "Same inputs hash to the same ID");

    let first = store.insert(&custom).expect("insert");
    let second = store.insert(&standard).expect("insert");
    assert_eq!(first.id, custom.id);
    assert_ne!(second.id, first.id);

    let orders = store.load_all().expect("load all");
    assert_eq!(orders.len(), 2);
    assert!(store.load_by_id(&first.id).expect("load").is_custom_decal);
    assert!(!store.load_by_id(&second.id).expect("load").is_custom_decal);
}

#[test]
fn test_append_same_stage_same_second_keeps_both() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = HistoryStore::new(temp_dir.path().join("stage_history.jsonl"))
        .expect("Failed to create store");

    let mut record = OrderStageHistory::new("ord-111111".to_string(), Stage::Survey, None);
    record.completed_at = 5000;
    record.assign_id(0);

    let first = store.append(&record).expect("append");
    let second = store.append(&record).expect("append");
    assert_ne!(first.id, second.id);

    let records = store.for_order("ord-111111").expect("for_order");
    assert_eq!(records.len(), 2);
}
