// Rust guideline compliant 2026-02-06

//! Error types for the decal workflow core library.

use crate::models::{OrderStatus, Stage, UserRole};
use serde::Serialize;
use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of a status transition check.
///
/// `Ok(())` grants the transition; `Err` carries the denial reason.
pub type ValidationResult = std::result::Result<(), TransitionError>;

/// Error types for core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid order or stage-history data.
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Invalid configuration.
    #[error("Invalid config: {0}")]
    Config(String),

    /// A status transition was denied.
    #[error("Invalid status transition: {0}")]
    Transition(#[from] TransitionError),
}

/// Broad category of a transition denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Current or candidate status is not part of the workflow.
    InvalidState,
    /// Backward move or a forward skip.
    Sequence,
    /// The acting role may not perform the transition.
    Authorization,
    /// A required earlier stage has not been recorded.
    Prerequisite,
}

/// Reason a status transition was denied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The order's current status is not in its workflow.
    #[error("Current status '{0}' is invalid for this order's workflow")]
    InvalidCurrentStatus(String),

    /// The requested status is not in the order's workflow.
    #[error("New status '{0}' is invalid for this order's workflow")]
    InvalidNewStatus(String),

    /// The requested status precedes the current one.
    #[error("Cannot move backward from '{from}' to '{to}'")]
    BackwardTransition {
        /// Current status.
        from: OrderStatus,
        /// Requested status.
        to: OrderStatus,
    },

    /// The requested status skips intermediate steps.
    #[error("Must complete '{next}' before moving from '{from}' to '{to}'")]
    SkippedStep {
        /// Current status.
        from: OrderStatus,
        /// Requested status.
        to: OrderStatus,
        /// The step directly after the current one.
        next: OrderStatus,
    },

    /// Customers never change order status.
    #[error("Customers cannot change order status")]
    CustomerDenied,

    /// The role has no edge for this transition.
    #[error("Role {role} is not permitted to move an order from '{from}' to '{to}'")]
    RoleNotPermitted {
        /// Acting role.
        role: UserRole,
        /// Current status.
        from: OrderStatus,
        /// Requested status.
        to: OrderStatus,
    },

    /// A prerequisite stage is missing from the history.
    #[error("Must complete stage {stage} before moving to '{target}'")]
    MissingPrerequisite {
        /// Requested status.
        target: OrderStatus,
        /// Stage that has not been recorded.
        stage: Stage,
    },
}

impl TransitionError {
    /// Returns the category of this denial.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            TransitionError::InvalidCurrentStatus(_) | TransitionError::InvalidNewStatus(_) => {
                ErrorCategory::InvalidState
            }
            TransitionError::BackwardTransition { .. } | TransitionError::SkippedStep { .. } => {
                ErrorCategory::Sequence
            }
            TransitionError::CustomerDenied | TransitionError::RoleNotPermitted { .. } => {
                ErrorCategory::Authorization
            }
            TransitionError::MissingPrerequisite { .. } => ErrorCategory::Prerequisite,
        }
    }
}
