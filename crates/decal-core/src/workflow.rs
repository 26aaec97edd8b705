// Rust guideline compliant 2026-02-06

//! The two canonical order workflows.

use crate::models::OrderStatus;
use serde::{Deserialize, Serialize};

const CUSTOM_STEPS: [OrderStatus; 6] = [
    OrderStatus::NewOrder,
    OrderStatus::Survey,
    OrderStatus::Design,
    OrderStatus::FinalizeAndProduction,
    OrderStatus::Payment,
    OrderStatus::AcceptanceAndDelivery,
];

const STANDARD_STEPS: [OrderStatus; 5] = [
    OrderStatus::NewOrder,
    OrderStatus::Survey,
    OrderStatus::FinalizeAndProduction,
    OrderStatus::Payment,
    OrderStatus::AcceptanceAndDelivery,
];

/// Fixed ordering of statuses an order moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Workflow {
    /// Custom decal: includes a Design step.
    Custom,
    /// Standard (ready-made) decal.
    Standard,
}

impl Workflow {
    /// Selects the workflow for an order's custom-decal flag.
    #[must_use]
    pub const fn for_order(is_custom_decal: bool) -> Self {
        if is_custom_decal {
            Workflow::Custom
        } else {
            Workflow::Standard
        }
    }

    /// Returns the ordered steps of this workflow.
    #[must_use]
    pub const fn statuses(self) -> &'static [OrderStatus] {
        match self {
            Workflow::Custom => &CUSTOM_STEPS,
            Workflow::Standard => &STANDARD_STEPS,
        }
    }

    /// Returns the index of `status` in this workflow.
    #[must_use]
    pub fn index_of(self, status: OrderStatus) -> Option<usize> {
        self.statuses().iter().position(|s| *s == status)
    }

    /// Locates a display label in this workflow.
    ///
    /// Returns `None` for unknown labels and for statuses that belong only
    /// to the other workflow (e.g. "Design" in the standard workflow).
    #[must_use]
    pub fn position(self, label: &str) -> Option<(usize, OrderStatus)> {
        let status = OrderStatus::from_label(label)?;
        self.index_of(status).map(|index| (index, status))
    }

    /// Returns the status immediately before `status`, if any.
    #[must_use]
    pub fn predecessor(self, status: OrderStatus) -> Option<OrderStatus> {
        let index = self.index_of(status)?;
        index.checked_sub(1).map(|prev| self.statuses()[prev])
    }

    /// Returns the first status of the workflow.
    #[must_use]
    pub fn initial(self) -> OrderStatus {
        OrderStatus::NewOrder
    }

    /// Returns the terminal status of the workflow.
    #[must_use]
    pub fn terminal(self) -> OrderStatus {
        OrderStatus::AcceptanceAndDelivery
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_order() {
        assert_eq!(Workflow::for_order(true), Workflow::Custom);
        assert_eq!(Workflow::for_order(false), Workflow::Standard);
    }

    #[test]
    fn test_design_only_in_custom() {
        assert_eq!(
            Workflow::Custom.position("Design"),
            Some((2, OrderStatus::Design))
        );
        assert_eq!(Workflow::Standard.position("Design"), None);
    }

    #[test]
    fn test_predecessor() {
        assert_eq!(
            Workflow::Custom.predecessor(OrderStatus::FinalizeAndProduction),
            Some(OrderStatus::Design)
        );
        assert_eq!(
            Workflow::Standard.predecessor(OrderStatus::FinalizeAndProduction),
            Some(OrderStatus::Survey)
        );
        assert_eq!(Workflow::Standard.predecessor(OrderStatus::NewOrder), None);
    }

    #[test]
    fn test_bounds() {
        for workflow in [Workflow::Custom, Workflow::Standard] {
            let steps = workflow.statuses();
            assert_eq!(steps.first().copied(), Some(workflow.initial()));
            assert_eq!(steps.last().copied(), Some(workflow.terminal()));
        }
    }
}
