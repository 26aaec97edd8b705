// Rust guideline compliant 2026-02-06

//! Order status state machine.
//!
//! A status change is granted only if three checks pass, in this order:
//!
//! 1. Sequence: both statuses belong to the order's workflow, the move is
//!    not backward, and it advances exactly one step unless a skip
//!    exception covers it. Staying on the current status always succeeds.
//! 2. Role: the acting role has an edge for the move. Customers are always
//!    denied; managers and admins bypass the edge table.
//! 3. Prerequisite: the stage required by the target status is recorded in
//!    the order's stage history.
//!
//! The first failing check decides the denial reason.

use crate::error::{TransitionError, ValidationResult};
use crate::models::{has_completed, Order, OrderStageHistory, OrderStatus, UserRole};
use crate::policy::TransitionPolicy;
use crate::workflow::Workflow;
use crate::Result;
use std::sync::OnceLock;
use tracing::debug;

/// Result of the sequence check.
enum Step {
    /// Candidate equals the current status.
    Unchanged,
    /// A forward move that passed the sequence rules.
    Forward {
        from: OrderStatus,
        to: OrderStatus,
    },
}

/// Decides whether an order may change status.
///
/// Holds only the immutable policy tables, so one instance can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct OrderStatusValidator {
    policy: TransitionPolicy,
}

impl OrderStatusValidator {
    /// Creates a validator with the standard policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom policy.
    #[must_use]
    pub fn with_policy(policy: TransitionPolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy tables in use.
    #[must_use]
    pub fn policy(&self) -> &TransitionPolicy {
        &self.policy
    }

    /// Checks whether `order` may move to `new_status`.
    ///
    /// # Arguments
    ///
    /// * `order` - Snapshot of the order
    /// * `new_status` - Candidate status label
    /// * `role` - Role of the acting user
    /// * `history` - Stage-history records for the order
    ///
    /// # Returns
    ///
    /// `Ok(())` if the transition is permitted.
    ///
    /// # Errors
    ///
    /// Returns the first failing check's [`TransitionError`].
    pub fn can_change_status(
        &self,
        order: &Order,
        new_status: &str,
        role: UserRole,
        history: &[OrderStageHistory],
    ) -> ValidationResult {
        let result = self.evaluate(order, new_status, role, history);

        match &result {
            Ok(()) => debug!(
                order_id = %order.id,
                from = %order.order_status,
                to = new_status,
                role = %role,
                "status change granted"
            ),
            Err(reason) => debug!(
                order_id = %order.id,
                from = %order.order_status,
                to = new_status,
                role = %role,
                category = ?reason.category(),
                %reason,
                "status change denied"
            ),
        }

        result
    }

    /// Lists the statuses a picker should offer for `order`.
    ///
    /// The first element is the current status (no change), followed by
    /// every later workflow status that [`Self::can_change_status`] grants.
    /// Each candidate is checked on its own, so a denied step does not hide
    /// later ones. Returns an empty list if the current status is not part
    /// of the order's workflow.
    #[must_use]
    pub fn available_next_statuses(
        &self,
        order: &Order,
        role: UserRole,
        history: &[OrderStageHistory],
    ) -> Vec<String> {
        let workflow = Workflow::for_order(order.is_custom_decal);
        let Some((current_index, _)) = workflow.position(&order.order_status) else {
            return Vec::new();
        };

        let mut statuses = vec![order.order_status.clone()];
        statuses.extend(
            workflow.statuses()[current_index + 1..]
                .iter()
                .filter(|candidate| {
                    self.can_change_status(order, candidate.label(), role, history)
                        .is_ok()
                })
                .map(|candidate| candidate.label().to_string()),
        );
        statuses
    }

    fn evaluate(
        &self,
        order: &Order,
        new_status: &str,
        role: UserRole,
        history: &[OrderStageHistory],
    ) -> ValidationResult {
        let workflow = Workflow::for_order(order.is_custom_decal);

        let (from, to) = match self.check_sequence(workflow, &order.order_status, new_status)? {
            Step::Unchanged => return Ok(()),
            Step::Forward { from, to } => (from, to),
        };

        self.check_role(workflow, role, from, to)?;
        self.check_prerequisite(workflow, role, to, history)
    }

    fn check_sequence(
        &self,
        workflow: Workflow,
        current: &str,
        candidate: &str,
    ) -> std::result::Result<Step, TransitionError> {
        let (current_index, from) = workflow
            .position(current)
            .ok_or_else(|| TransitionError::InvalidCurrentStatus(current.to_string()))?;
        let (new_index, to) = workflow
            .position(candidate)
            .ok_or_else(|| TransitionError::InvalidNewStatus(candidate.to_string()))?;

        if new_index < current_index {
            return Err(TransitionError::BackwardTransition { from, to });
        }

        if new_index == current_index {
            return Ok(Step::Unchanged);
        }

        if new_index > current_index + 1 && !self.policy.permits_skip(from, to) {
            return Err(TransitionError::SkippedStep {
                from,
                to,
                next: workflow.statuses()[current_index + 1],
            });
        }

        Ok(Step::Forward { from, to })
    }

    fn check_role(
        &self,
        workflow: Workflow,
        role: UserRole,
        from: OrderStatus,
        to: OrderStatus,
    ) -> ValidationResult {
        if self.policy.is_denied(role) {
            return Err(TransitionError::CustomerDenied);
        }

        if self.policy.is_unrestricted(role) {
            return Ok(());
        }

        if self.policy.allows_edge(role, workflow, from, to) {
            Ok(())
        } else {
            Err(TransitionError::RoleNotPermitted { role, from, to })
        }
    }

    fn check_prerequisite(
        &self,
        workflow: Workflow,
        role: UserRole,
        target: OrderStatus,
        history: &[OrderStageHistory],
    ) -> ValidationResult {
        match self.policy.required_stage(target, workflow, role) {
            Some(stage) if !has_completed(history, stage) => {
                Err(TransitionError::MissingPrerequisite { target, stage })
            }
            _ => Ok(()),
        }
    }
}

/// Returns the process-wide validator with the standard policy.
pub fn shared_validator() -> &'static OrderStatusValidator {
    static VALIDATOR: OnceLock<OrderStatusValidator> = OnceLock::new();
    VALIDATOR.get_or_init(OrderStatusValidator::new)
}

/// Validates a status change with the standard policy.
///
/// # Arguments
///
/// * `order` - Snapshot of the order
/// * `new_status` - Candidate status label
/// * `role` - Role of the acting user
/// * `history` - Stage-history records for the order
///
/// # Returns
///
/// Ok if the transition is valid, Err otherwise.
///
/// # Errors
///
/// Returns [`crate::Error::Transition`] carrying the denial reason.
pub fn validate_transition(
    order: &Order,
    new_status: &str,
    role: UserRole,
    history: &[OrderStageHistory],
) -> Result<()> {
    shared_validator().can_change_status(order, new_status, role, history)?;
    Ok(())
}
