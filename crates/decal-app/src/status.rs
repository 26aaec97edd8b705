// Rust guideline compliant 2026-02-09

//! Status-change service: validate against a fresh snapshot, then write.

use crate::error::{AppError, Result};
use crate::ports::OrderBackend;
use decal_core::{Order, OrderStageHistory, OrderStatus, OrderStatusValidator, Stage, UserRole};
use tracing::info;

/// Parses a role name (case-insensitive).
///
/// # Errors
///
/// Returns an error if the role is unknown.
pub fn parse_role(value: &str) -> Result<UserRole> {
    value
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid role: {}", value)))
}

/// Parses a stage-history key (e.g. `ProductionAndInstallation`).
///
/// # Errors
///
/// Returns an error if the stage is unknown.
pub fn parse_stage(value: &str) -> Result<Stage> {
    value
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("Invalid stage: {}", value)))
}

/// Resolves user input to a status label.
///
/// Accepts exact labels, case-insensitive labels and short aliases such as
/// `finalize`. Unrecognized input is returned unchanged so the validator
/// can report it as an invalid status.
#[must_use]
pub fn resolve_status_label(value: &str) -> String {
    let normalized = value.trim().to_lowercase();
    let alias = match normalized.as_str() {
        "new" | "new_order" | "new-order" => Some(OrderStatus::NewOrder),
        "survey" => Some(OrderStatus::Survey),
        "design" => Some(OrderStatus::Design),
        "finalize" | "production" | "finalize_and_production" => {
            Some(OrderStatus::FinalizeAndProduction)
        }
        "payment" => Some(OrderStatus::Payment),
        "acceptance" | "delivery" | "acceptance_and_delivery" => {
            Some(OrderStatus::AcceptanceAndDelivery)
        }
        _ => OrderStatus::ALL
            .into_iter()
            .find(|status| status.label().to_lowercase() == normalized),
    };

    alias.map_or_else(|| value.to_string(), |status| status.label().to_string())
}

/// Runs status checks and changes against an order backend.
#[derive(Debug, Clone)]
pub struct StatusService<B> {
    backend: B,
    validator: OrderStatusValidator,
}

impl<B: OrderBackend> StatusService<B> {
    /// Creates a service with the standard validator.
    pub fn new(backend: B) -> Self {
        Self::with_validator(backend, OrderStatusValidator::new())
    }

    /// Creates a service with a specific validator.
    pub fn with_validator(backend: B, validator: OrderStatusValidator) -> Self {
        Self { backend, validator }
    }

    /// Returns the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn snapshot(&self, order_id: &str) -> Result<(Order, Vec<OrderStageHistory>)> {
        let order = self.backend.find_order(order_id)?;
        let history = self.backend.stage_history(order_id)?;
        Ok((order, history))
    }

    /// Checks whether `role` may move the order to `new_status`.
    ///
    /// # Errors
    ///
    /// Returns the denial as [`AppError::Core`], or a backend error.
    pub fn check(&self, order_id: &str, new_status: &str, role: UserRole) -> Result<()> {
        let (order, history) = self.snapshot(order_id)?;
        self.validator
            .can_change_status(&order, new_status, role, &history)?;
        Ok(())
    }

    /// Lists the statuses `role` may choose for the order, current first.
    ///
    /// # Errors
    ///
    /// Returns an error if the order or its history cannot be fetched.
    pub fn available(&self, order_id: &str, role: UserRole) -> Result<Vec<String>> {
        let (order, history) = self.snapshot(order_id)?;
        Ok(self
            .validator
            .available_next_statuses(&order, role, &history))
    }

    /// Validates and applies a status change.
    ///
    /// A no-op change is validated but not written.
    ///
    /// # Errors
    ///
    /// Returns the denial, or an error from the backend.
    pub fn change_status(&self, order_id: &str, new_status: &str, role: UserRole) -> Result<Order> {
        let (order, history) = self.snapshot(order_id)?;
        self.validator
            .can_change_status(&order, new_status, role, &history)?;

        if order.order_status == new_status {
            return Ok(order);
        }

        let status = OrderStatus::from_label(new_status)
            .ok_or_else(|| AppError::InvalidInput(format!("Invalid status: {}", new_status)))?;
        let updated = self.backend.update_status(order_id, status)?;

        info!(
            order_id,
            from = %order.order_status,
            to = %updated.order_status,
            role = %role,
            "order status changed"
        );
        Ok(updated)
    }

    /// Records a completed stage for an existing order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist or the record cannot be
    /// written.
    pub fn record_stage(
        &self,
        order_id: &str,
        stage: Stage,
        note: Option<String>,
    ) -> Result<OrderStageHistory> {
        let order = self.backend.find_order(order_id)?;
        let record = self
            .backend
            .record_stage(&OrderStageHistory::new(order.id, stage, note))?;

        info!(order_id, stage = %stage, "stage recorded");
        Ok(record)
    }

    /// Returns the stage history of an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order does not exist or the history cannot
    /// be read.
    pub fn history(&self, order_id: &str) -> Result<Vec<OrderStageHistory>> {
        let (_, history) = self.snapshot(order_id)?;
        Ok(history)
    }
}
