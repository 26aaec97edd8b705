// Rust guideline compliant 2026-02-06

//! Tests for CLI output formatting.

use decal_app::AppError;
use decal_cli::create_formatter;
use decal_core::{Order, OrderStageHistory, OutputFormat, Stage, TransitionError};

fn sample_order() -> Order {
    Order {
        id: "ord-a1b2c3".to_string(),
        order_status: "Survey".to_string(),
        is_custom_decal: true,
        customer_name: "Tran Thi B".to_string(),
        created_at: 0,
        updated_at: 0,
    }
}

#[test]
fn test_json_order_is_enveloped() {
    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_order(&sample_order());
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");

    assert_eq!(value["status"], "ok");
    assert_eq!(value["result"]["id"], "ord-a1b2c3");
    assert_eq!(value["result"]["is_custom_decal"], true);
}

#[test]
fn test_json_check_reports_reason() {
    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_check("ord-a1b2c3", "Design", Some("Must complete stage Survey"));
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");

    assert_eq!(value["result"]["valid"], false);
    assert_eq!(value["result"]["reason"], "Must complete stage Survey");
}

#[test]
fn test_json_error_envelope() {
    let formatter = create_formatter(OutputFormat::Json);
    let output = formatter.format_error(&AppError::from(TransitionError::CustomerDenied));
    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");

    assert_eq!(value["code"], "invalid_transition");
}

#[test]
fn test_table_statuses_marks_current() {
    let formatter = create_formatter(OutputFormat::Table);
    let output = formatter.format_statuses(
        "ord-a1b2c3",
        &["Design".to_string(), "Finalize & Production".to_string()],
    );

    assert!(output.contains("current"));
    assert!(output.contains("Finalize & Production"));
}

#[test]
fn test_table_empty_statuses() {
    let formatter = create_formatter(OutputFormat::Table);
    let output = formatter.format_statuses("ord-a1b2c3", &[]);
    assert!(output.contains("outside its workflow"));
}

#[test]
fn test_table_order_shows_workflow() {
    let formatter = create_formatter(OutputFormat::Table);
    let output = formatter.format_order(&sample_order());
    assert!(output.contains("custom"));
    assert!(output.contains("1970-01-01 00:00:00 UTC"));
}

#[test]
fn test_table_history() {
    let formatter = create_formatter(OutputFormat::Table);
    let record = OrderStageHistory::new(
        "ord-a1b2c3".to_string(),
        Stage::ProductionAndInstallation,
        Some("printed".to_string()),
    );
    let output = formatter.format_history(&[record]);
    assert!(output.contains("ProductionAndInstallation"));
    assert!(output.contains("printed"));
    assert_eq!(formatter.format_history(&[]), "No stages recorded.");
}

#[test]
fn test_plain_check() {
    let formatter = create_formatter(OutputFormat::Plain);
    assert_eq!(formatter.format_check("ord-a1b2c3", "Survey", None), "ok");
    assert_eq!(
        formatter.format_check("ord-a1b2c3", "Survey", Some("nope")),
        "denied: nope"
    );
}
