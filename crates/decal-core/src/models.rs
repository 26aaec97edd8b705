// Rust guideline compliant 2026-02-06

//! Core data models for decal shop orders.
//!
//! Two vocabularies live here: [`OrderStatus`] is the customer-facing
//! workflow label shown on an order, while [`Stage`] is the key written to
//! an order's stage history when a phase of work completes. The only place
//! the two are related is [`OrderStatus::completion_stage`].

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Workflow status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Order has been taken but no work has started.
    #[serde(rename = "New Order")]
    NewOrder,
    /// On-site survey of the vehicle.
    #[serde(rename = "Survey")]
    Survey,
    /// Custom artwork design (custom decals only).
    #[serde(rename = "Design")]
    Design,
    /// Design sign-off, printing and installation.
    #[serde(rename = "Finalize & Production")]
    FinalizeAndProduction,
    /// Customer payment.
    #[serde(rename = "Payment")]
    Payment,
    /// Final inspection and hand-over to the customer.
    #[serde(rename = "Acceptance & Delivery")]
    AcceptanceAndDelivery,
}

impl OrderStatus {
    /// All statuses, in the order of the longest workflow.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::NewOrder,
        OrderStatus::Survey,
        OrderStatus::Design,
        OrderStatus::FinalizeAndProduction,
        OrderStatus::Payment,
        OrderStatus::AcceptanceAndDelivery,
    ];

    /// Returns the display label used on orders.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            OrderStatus::NewOrder => "New Order",
            OrderStatus::Survey => "Survey",
            OrderStatus::Design => "Design",
            OrderStatus::FinalizeAndProduction => "Finalize & Production",
            OrderStatus::Payment => "Payment",
            OrderStatus::AcceptanceAndDelivery => "Acceptance & Delivery",
        }
    }

    /// Parses a display label. Matching is exact.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.label() == label)
    }

    /// Returns the history stage recorded once this status's work is done.
    ///
    /// This is the single translation point between the status and stage
    /// vocabularies.
    #[must_use]
    pub const fn completion_stage(self) -> Option<Stage> {
        match self {
            OrderStatus::NewOrder => None,
            OrderStatus::Survey => Some(Stage::Survey),
            OrderStatus::Design => Some(Stage::Design),
            OrderStatus::FinalizeAndProduction => Some(Stage::ProductionAndInstallation),
            OrderStatus::Payment => Some(Stage::Payment),
            OrderStatus::AcceptanceAndDelivery => Some(Stage::AcceptanceAndDelivery),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stage names written to order history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Survey completed.
    Survey,
    /// Design completed.
    Design,
    /// Production and installation completed.
    ProductionAndInstallation,
    /// Payment received.
    Payment,
    /// Order accepted and delivered.
    AcceptanceAndDelivery,
}

impl Stage {
    /// Returns the history key for this stage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::Survey => "Survey",
            Stage::Design => "Design",
            Stage::ProductionAndInstallation => "ProductionAndInstallation",
            Stage::Payment => "Payment",
            Stage::AcceptanceAndDelivery => "AcceptanceAndDelivery",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        match value {
            "Survey" => Ok(Stage::Survey),
            "Design" => Ok(Stage::Design),
            "ProductionAndInstallation" => Ok(Stage::ProductionAndInstallation),
            "Payment" => Ok(Stage::Payment),
            "AcceptanceAndDelivery" => Ok(Stage::AcceptanceAndDelivery),
            other => Err(crate::Error::InvalidOrder(format!(
                "Unknown stage: {}",
                other
            ))),
        }
    }
}

/// Role of the user acting on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Sales staff.
    Sales,
    /// Workshop technician.
    Technician,
    /// The order's customer.
    Customer,
    /// Shop manager.
    Manager,
    /// System administrator.
    Admin,
}

impl UserRole {
    /// All roles.
    pub const ALL: [UserRole; 5] = [
        UserRole::Sales,
        UserRole::Technician,
        UserRole::Customer,
        UserRole::Manager,
        UserRole::Admin,
    ];

    /// Returns the upper-case role name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            UserRole::Sales => "SALES",
            UserRole::Technician => "TECHNICIAN",
            UserRole::Customer => "CUSTOMER",
            UserRole::Manager => "MANAGER",
            UserRole::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        match value.to_uppercase().as_str() {
            "SALES" => Ok(UserRole::Sales),
            "TECHNICIAN" => Ok(UserRole::Technician),
            "CUSTOMER" => Ok(UserRole::Customer),
            "MANAGER" => Ok(UserRole::Manager),
            "ADMIN" => Ok(UserRole::Admin),
            _ => Err(crate::Error::InvalidOrder(format!(
                "Unknown role: {}",
                value
            ))),
        }
    }
}

/// Snapshot of an order as consumed by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique hash-based identifier (format: ord-XXXXXX).
    pub id: String,
    /// Current workflow status label.
    pub order_status: String,
    /// Whether the order uses the custom-decal workflow.
    #[serde(default)]
    pub is_custom_decal: bool,
    /// Customer display name.
    #[serde(default)]
    pub customer_name: String,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Order {
    /// Creates a new order in the "New Order" status.
    pub fn new(customer_name: String, is_custom_decal: bool) -> Self {
        let now = unix_now();
        let mut order = Self {
            id: String::new(),
            order_status: OrderStatus::NewOrder.label().to_string(),
            is_custom_decal,
            customer_name,
            created_at: now,
            updated_at: now,
        };
        order.assign_id(0);
        order
    }

    /// Recomputes the hash ID with `nonce` mixed in.
    ///
    /// Stores call this with increasing nonces until the ID is unused.
    pub fn assign_id(&mut self, nonce: u32) {
        self.id = generate_id(
            "ord",
            &[self.customer_name.as_bytes()],
            self.created_at,
            nonce,
        );
    }

    /// Returns the parsed current status, if the label is recognized.
    #[must_use]
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::from_label(&self.order_status)
    }

    /// Validates the order data.
    ///
    /// Unrecognized status labels are accepted here; the validator reports
    /// them when a transition is attempted.
    ///
    /// # Errors
    ///
    /// Returns an error if the ID or status label is empty.
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::InvalidOrder(
                "Order ID cannot be empty".to_string(),
            ));
        }

        if self.order_status.trim().is_empty() {
            return Err(crate::Error::InvalidOrder(format!(
                "Order {} has an empty status",
                self.id
            )));
        }

        Ok(())
    }
}

/// A completed-stage record in an order's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStageHistory {
    /// Unique hash-based identifier (format: stg-XXXXXX).
    pub id: String,
    /// Order this record belongs to.
    pub order_id: String,
    /// Stage key, e.g. `ProductionAndInstallation`.
    pub stage_name: String,
    /// Unix timestamp of completion.
    pub completed_at: i64,
    /// Optional free-form note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl OrderStageHistory {
    /// Creates a history record for a completed stage.
    pub fn new(order_id: String, stage: Stage, note: Option<String>) -> Self {
        let mut record = Self {
            id: String::new(),
            order_id,
            stage_name: stage.as_str().to_string(),
            completed_at: unix_now(),
            note,
        };
        record.assign_id(0);
        record
    }

    /// Recomputes the hash ID with `nonce` mixed in.
    pub fn assign_id(&mut self, nonce: u32) {
        self.id = generate_id(
            "stg",
            &[self.order_id.as_bytes(), self.stage_name.as_bytes()],
            self.completed_at,
            nonce,
        );
    }

    /// Validates the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the order ID or stage name is empty.
    pub fn validate(&self) -> crate::Result<()> {
        if self.order_id.trim().is_empty() {
            return Err(crate::Error::InvalidOrder(
                "Stage history order ID cannot be empty".to_string(),
            ));
        }

        if self.stage_name.trim().is_empty() {
            return Err(crate::Error::InvalidOrder(
                "Stage name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Returns true if any record in `history` carries `stage`.
#[must_use]
pub fn has_completed(history: &[OrderStageHistory], stage: Stage) -> bool {
    history
        .iter()
        .any(|record| record.stage_name == stage.as_str())
}

fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

fn generate_id(prefix: &str, parts: &[&[u8]], timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hash = hasher.finalize();
    let hex = format!("{:x}", hash);
    format!("{}-{}", prefix, &hex[..6])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_parse_back() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(OrderStatus::from_label("survey"), None);
    }

    #[test]
    fn test_status_serde_uses_labels() {
        let json = serde_json::to_string(&OrderStatus::FinalizeAndProduction).unwrap();
        assert_eq!(json, "\"Finalize & Production\"");
    }

    #[test]
    fn test_completion_stage_mapping() {
        assert_eq!(OrderStatus::NewOrder.completion_stage(), None);
        assert_eq!(
            OrderStatus::FinalizeAndProduction.completion_stage(),
            Some(Stage::ProductionAndInstallation)
        );
        assert_eq!(
            OrderStatus::Payment.completion_stage(),
            Some(Stage::Payment)
        );
    }

    #[test]
    fn test_role_parse_is_case_insensitive() {
        assert_eq!("sales".parse::<UserRole>().unwrap(), UserRole::Sales);
        assert_eq!("Admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert!("owner".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_has_completed() {
        let history = vec![OrderStageHistory::new(
            "ord-abc123".to_string(),
            Stage::Survey,
            None,
        )];
        assert!(has_completed(&history, Stage::Survey));
        assert!(!has_completed(&history, Stage::Design));
    }

    #[test]
    fn test_new_order_defaults() {
        let order = Order::new("Linh".to_string(), true);
        assert!(order.id.starts_with("ord-"));
        assert_eq!(order.status(), Some(OrderStatus::NewOrder));
        assert!(order.validate().is_ok());
    }

    #[test]
    fn test_assign_id_changes_with_nonce() {
        let mut order = Order::new("Linh".to_string(), true);
        let first = order.id.clone();
        order.assign_id(1);
        assert_ne!(order.id, first);
        assert!(order.id.starts_with("ord-"));

        order.assign_id(0);
        assert_eq!(order.id, first, "IDs are deterministic per nonce");
    }

    #[test]
    fn test_order_validate_rejects_empty_status() {
        let mut order = Order::new("Linh".to_string(), false);
        order.order_status = "  ".to_string();
        assert!(order.validate().is_err());
    }
}
