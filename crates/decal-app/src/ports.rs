// Rust guideline compliant 2026-02-09

//! Collaborator interfaces around the status validator.
//!
//! The validator itself does no IO. Callers fetch an order snapshot and its
//! stage history from these sources, validate, and only then write through
//! the sink.

use crate::error::Result;
use decal_core::{Order, OrderStageHistory, OrderStatus};

/// Source of current order snapshots.
pub trait OrderSource: Send + Sync {
    /// Fetches the current snapshot of an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist or cannot be read.
    fn find_order(&self, order_id: &str) -> Result<Order>;
}

/// Source of an order's completed-stage records.
pub trait StageHistorySource: Send + Sync {
    /// Fetches the stage history of an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be read.
    fn stage_history(&self, order_id: &str) -> Result<Vec<OrderStageHistory>>;
}

/// Sink for order status mutations.
pub trait OrderStatusSink: Send + Sync {
    /// Writes a new status and returns the updated order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist or cannot be written.
    fn update_status(&self, order_id: &str, status: OrderStatus) -> Result<Order>;
}

/// Sink for completed-stage records.
pub trait StageHistorySink: Send + Sync {
    /// Appends a completed-stage record and returns it as stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn record_stage(&self, record: &OrderStageHistory) -> Result<OrderStageHistory>;
}

/// Everything the status service needs from its backend.
pub trait OrderBackend: OrderSource + StageHistorySource + OrderStatusSink + StageHistorySink {}

impl<T> OrderBackend for T where
    T: OrderSource + StageHistorySource + OrderStatusSink + StageHistorySink
{
}
