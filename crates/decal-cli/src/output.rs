// Rust guideline compliant 2026-02-06

//! Output formatting module for the decal CLI.
//!
//! Orders, stage history and status lists can be rendered as JSON, tables
//! or plain text.

use decal_app::{AppError, ErrorEnvelope, SuccessEnvelope};
use decal_core::{Order, OrderStageHistory, OutputFormat};
use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
pub trait OutputFormatter {
    /// Formats a single order.
    fn format_order(&self, order: &Order) -> String;

    /// Formats a list of orders.
    fn format_orders(&self, orders: &[Order]) -> String;

    /// Formats an order's stage history.
    fn format_history(&self, history: &[OrderStageHistory]) -> String;

    /// Formats the statuses offered for an order, current first.
    fn format_statuses(&self, order_id: &str, statuses: &[String]) -> String;

    /// Formats the result of a status check.
    fn format_check(&self, order_id: &str, new_status: &str, denial: Option<&str>) -> String;

    /// Formats an application error.
    fn format_error(&self, error: &AppError) -> String;
}

fn to_pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
}

fn workflow_name(order: &Order) -> &'static str {
    if order.is_custom_decal {
        "custom"
    } else {
        "standard"
    }
}

fn format_timestamp(timestamp: i64) -> String {
    chrono::DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// JSON output formatter.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_order(&self, order: &Order) -> String {
        to_pretty(&SuccessEnvelope::new(order))
    }

    fn format_orders(&self, orders: &[Order]) -> String {
        to_pretty(&SuccessEnvelope::new(json!({
            "orders": orders,
            "total": orders.len(),
        })))
    }

    fn format_history(&self, history: &[OrderStageHistory]) -> String {
        to_pretty(&SuccessEnvelope::new(history))
    }

    fn format_statuses(&self, order_id: &str, statuses: &[String]) -> String {
        to_pretty(&SuccessEnvelope::new(json!({
            "order_id": order_id,
            "statuses": statuses,
        })))
    }

    fn format_check(&self, order_id: &str, new_status: &str, denial: Option<&str>) -> String {
        to_pretty(&SuccessEnvelope::new(json!({
            "order_id": order_id,
            "new_status": new_status,
            "valid": denial.is_none(),
            "reason": denial,
        })))
    }

    fn format_error(&self, error: &AppError) -> String {
        to_pretty(&ErrorEnvelope::from_error(error))
    }
}

/// Table output formatter.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_order(&self, order: &Order) -> String {
        let mut output = String::new();
        output.push_str(&format!("ID:        {}\n", order.id));
        output.push_str(&format!("Customer:  {}\n", order.customer_name));
        output.push_str(&format!("Status:    {}\n", order.order_status));
        output.push_str(&format!("Workflow:  {}\n", workflow_name(order)));
        output.push_str(&format!("Created:   {}\n", format_timestamp(order.created_at)));
        output.push_str(&format!("Updated:   {}\n", format_timestamp(order.updated_at)));
        output
    }

    fn format_orders(&self, orders: &[Order]) -> String {
        if orders.is_empty() {
            return "No orders found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Status", "Workflow", "Customer"]);
        for order in orders {
            builder.push_record(vec![
                order.id.as_str(),
                order.order_status.as_str(),
                workflow_name(order),
                order.customer_name.as_str(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_history(&self, history: &[OrderStageHistory]) -> String {
        if history.is_empty() {
            return "No stages recorded.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["Stage", "Completed", "Note"]);
        for record in history {
            builder.push_record(vec![
                record.stage_name.clone(),
                format_timestamp(record.completed_at),
                record.note.clone().unwrap_or_default(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_statuses(&self, order_id: &str, statuses: &[String]) -> String {
        if statuses.is_empty() {
            return format!("Order {} has a status outside its workflow.", order_id);
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["#", "Status", ""]);
        for (i, status) in statuses.iter().enumerate() {
            let marker = if i == 0 { "current" } else { "" };
            builder.push_record(vec![i.to_string(), status.clone(), marker.to_string()]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_check(&self, order_id: &str, new_status: &str, denial: Option<&str>) -> String {
        match denial {
            None => format!("✓ {} may move to '{}'", order_id, new_status),
            Some(reason) => format!("✗ {} may not move to '{}': {}", order_id, new_status, reason),
        }
    }

    fn format_error(&self, error: &AppError) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_order(&self, order: &Order) -> String {
        format!(
            "{}\n{}\n{}\n{}\n",
            order.id,
            order.customer_name,
            order.order_status,
            workflow_name(order)
        )
    }

    fn format_orders(&self, orders: &[Order]) -> String {
        orders
            .iter()
            .map(|order| format!("{}\t{}\t{}\n", order.id, order.order_status, order.customer_name))
            .collect()
    }

    fn format_history(&self, history: &[OrderStageHistory]) -> String {
        history
            .iter()
            .map(|record| format!("{}\t{}\n", record.stage_name, record.completed_at))
            .collect()
    }

    fn format_statuses(&self, _order_id: &str, statuses: &[String]) -> String {
        statuses.iter().map(|status| format!("{}\n", status)).collect()
    }

    fn format_check(&self, _order_id: &str, _new_status: &str, denial: Option<&str>) -> String {
        match denial {
            None => "ok".to_string(),
            Some(reason) => format!("denied: {}", reason),
        }
    }

    fn format_error(&self, error: &AppError) -> String {
        format!("Error: {}", error)
    }
}

/// Creates a formatter for the given output format.
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
