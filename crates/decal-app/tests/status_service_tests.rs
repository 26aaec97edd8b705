// Rust guideline compliant 2026-02-09

//! Integration tests for the status service over a temp repository.

use decal_app::{AppError, ErrorCode, FileBackend, RepoContext, StatusService};
use decal_core::{Order, OrderStatus, Stage, UserRole};
use tempfile::TempDir;

fn setup(custom: bool) -> (TempDir, StatusService<FileBackend>, String) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo = RepoContext::init(Some(temp_dir.path())).expect("Failed to init repo");
    let backend = repo.open_backend().expect("Failed to open backend");

    let order = Order::new("Test Customer".to_string(), custom);
    backend.orders().save(&order).expect("Failed to save order");

    (temp_dir, StatusService::new(backend), order.id)
}

#[test]
fn test_init_creates_structure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let repo = RepoContext::init(Some(temp_dir.path())).expect("init");

    assert!(repo.decal_dir().join("orders.jsonl").exists());
    assert!(repo.decal_dir().join("stage_history.jsonl").exists());
    assert!(repo.config_path().exists());
    assert!(RepoContext::discover(Some(temp_dir.path())).is_ok());
}

#[test]
fn test_discover_uninitialized() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = RepoContext::discover(Some(temp_dir.path())).unwrap_err();
    assert_eq!(err.code(), ErrorCode::RepoNotInitialized);
}

#[test]
fn test_sales_walks_standard_order_skipping_payment() {
    let (_dir, service, id) = setup(false);

    service
        .change_status(&id, "Survey", UserRole::Sales)
        .expect("New Order → Survey");
    service
        .record_stage(&id, Stage::Survey, None)
        .expect("record survey");
    service
        .change_status(&id, "Finalize & Production", UserRole::Sales)
        .expect("Survey → Finalize");
    service
        .record_stage(&id, Stage::ProductionAndInstallation, Some("installed".to_string()))
        .expect("record production");

    let next = service.available(&id, UserRole::Sales).expect("available");
    assert_eq!(next, vec!["Finalize & Production", "Acceptance & Delivery"]);

    let done = service
        .change_status(&id, "Acceptance & Delivery", UserRole::Sales)
        .expect("Finalize → Acceptance");
    assert_eq!(done.status(), Some(OrderStatus::AcceptanceAndDelivery));
}

#[test]
fn test_denied_change_is_not_written() {
    let (_dir, service, id) = setup(true);

    let err = service
        .change_status(&id, "Survey", UserRole::Customer)
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidTransition);
    assert!(err.as_denial().is_some());

    let order = service.backend().orders().load_by_id(&id).expect("load");
    assert_eq!(order.status(), Some(OrderStatus::NewOrder));
}

#[test]
fn test_check_reports_missing_prerequisite() {
    let (_dir, service, id) = setup(true);
    service
        .change_status(&id, "Survey", UserRole::Manager)
        .expect("New Order → Survey");

    let err = service.check(&id, "Design", UserRole::Sales).unwrap_err();
    let details = err.details().expect("details");
    assert_eq!(details["category"], "prerequisite");

    service.record_stage(&id, Stage::Survey, None).expect("record");
    assert!(service.check(&id, "Design", UserRole::Sales).is_ok());
}

#[test]
fn test_noop_change_returns_order() {
    let (_dir, service, id) = setup(false);
    let order = service
        .change_status(&id, "New Order", UserRole::Customer)
        .expect("no-op");
    assert_eq!(order.order_status, "New Order");
}

#[test]
fn test_unknown_order() {
    let (_dir, service, _id) = setup(false);
    let err = service.available("ord-000000", UserRole::Admin).unwrap_err();
    assert!(matches!(err, AppError::Core(decal_core::Error::NotFound(_))));
    assert_eq!(err.code(), ErrorCode::NotFound);

    assert!(service.record_stage("ord-000000", Stage::Survey, None).is_err());
}

#[test]
fn test_history_is_scoped_to_order() {
    let (_dir, service, id) = setup(false);
    let other = Order::new("Other Customer".to_string(), true);
    service.backend().orders().save(&other).expect("save");

    service.record_stage(&id, Stage::Survey, None).expect("record");
    service.record_stage(&other.id, Stage::Design, None).expect("record");

    let history = service.history(&id).expect("history");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].stage_name, "Survey");
}

#[test]
fn test_repeated_stage_records_get_distinct_ids() {
    let (_dir, service, id) = setup(true);

    let first = service.record_stage(&id, Stage::Survey, None).expect("record");
    let second = service
        .record_stage(&id, Stage::Survey, Some("re-measured".to_string()))
        .expect("record");

    assert_ne!(first.id, second.id);
    assert_eq!(service.history(&id).expect("history").len(), 2);
}
