// Rust guideline compliant 2026-02-06

//! Declarative transition policy.
//!
//! The policy holds three tables consulted by the validator:
//!
//! - Role edges: for each `(role, workflow)`, the statuses each current
//!   status may move to.
//! - Skip exceptions: forward moves allowed to jump over steps, with the
//!   roles for which the skipped step's prerequisite is waived.
//! - Role classes: roles that bypass the edge table and roles that are
//!   always denied.

use crate::models::{OrderStatus, Stage, UserRole};
use crate::workflow::Workflow;
use std::collections::HashMap;

type EdgeTable = HashMap<OrderStatus, Vec<OrderStatus>>;

const SALES_CUSTOM_EDGES: &[(OrderStatus, &[OrderStatus])] = &[
    (OrderStatus::NewOrder, &[OrderStatus::Survey]),
    (OrderStatus::Survey, &[OrderStatus::Design]),
    (OrderStatus::Design, &[OrderStatus::FinalizeAndProduction]),
    (
        OrderStatus::FinalizeAndProduction,
        &[OrderStatus::AcceptanceAndDelivery],
    ),
];

const SALES_STANDARD_EDGES: &[(OrderStatus, &[OrderStatus])] = &[
    (OrderStatus::NewOrder, &[OrderStatus::Survey]),
    (OrderStatus::Survey, &[OrderStatus::FinalizeAndProduction]),
    (
        OrderStatus::FinalizeAndProduction,
        &[OrderStatus::AcceptanceAndDelivery],
    ),
];

// Survey -> Finalize covers ready-made decals that skip design.
const TECHNICIAN_EDGES: &[(OrderStatus, &[OrderStatus])] = &[
    (OrderStatus::Design, &[OrderStatus::FinalizeAndProduction]),
    (OrderStatus::Survey, &[OrderStatus::FinalizeAndProduction]),
];

/// A forward transition permitted to skip intermediate steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipException {
    /// Status the skip starts from.
    pub from: OrderStatus,
    /// Status the skip lands on.
    pub to: OrderStatus,
    /// Roles that only need `from`'s stage completed to reach `to`.
    pub waiver_roles: Vec<UserRole>,
}

/// Transition policy tables, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct TransitionPolicy {
    edges: HashMap<(UserRole, Workflow), EdgeTable>,
    skip_exceptions: Vec<SkipException>,
    unrestricted_roles: Vec<UserRole>,
    denied_roles: Vec<UserRole>,
}

impl Default for TransitionPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

impl TransitionPolicy {
    /// Builds the shop's standard policy.
    #[must_use]
    pub fn standard() -> Self {
        let mut edges = HashMap::new();
        edges.insert(
            (UserRole::Sales, Workflow::Custom),
            edge_table(SALES_CUSTOM_EDGES),
        );
        edges.insert(
            (UserRole::Sales, Workflow::Standard),
            edge_table(SALES_STANDARD_EDGES),
        );
        edges.insert(
            (UserRole::Technician, Workflow::Custom),
            edge_table(TECHNICIAN_EDGES),
        );
        edges.insert(
            (UserRole::Technician, Workflow::Standard),
            edge_table(TECHNICIAN_EDGES),
        );

        Self {
            edges,
            skip_exceptions: vec![SkipException {
                from: OrderStatus::FinalizeAndProduction,
                to: OrderStatus::AcceptanceAndDelivery,
                waiver_roles: vec![UserRole::Sales],
            }],
            unrestricted_roles: vec![UserRole::Manager, UserRole::Admin],
            denied_roles: vec![UserRole::Customer],
        }
    }

    /// Returns every `(from, to)` edge granted to `role` in `workflow`, sorted.
    ///
    /// Empty for roles with no edge table.
    #[must_use]
    pub fn edges(&self, role: UserRole, workflow: Workflow) -> Vec<(OrderStatus, OrderStatus)> {
        let mut pairs: Vec<_> = self
            .edges
            .get(&(role, workflow))
            .into_iter()
            .flat_map(|table| {
                table
                    .iter()
                    .flat_map(|(from, targets)| targets.iter().map(move |to| (*from, *to)))
            })
            .collect();
        pairs.sort();
        pairs
    }

    /// Returns the configured skip exceptions.
    #[must_use]
    pub fn skip_exceptions(&self) -> &[SkipException] {
        &self.skip_exceptions
    }

    /// Returns true if `role` bypasses the edge table.
    #[must_use]
    pub fn is_unrestricted(&self, role: UserRole) -> bool {
        self.unrestricted_roles.contains(&role)
    }

    /// Returns true if `role` may never change status.
    #[must_use]
    pub fn is_denied(&self, role: UserRole) -> bool {
        self.denied_roles.contains(&role)
    }

    /// Returns true if the edge table lets `role` move `from` to `to`.
    #[must_use]
    pub fn allows_edge(
        &self,
        role: UserRole,
        workflow: Workflow,
        from: OrderStatus,
        to: OrderStatus,
    ) -> bool {
        self.edges
            .get(&(role, workflow))
            .and_then(|table| table.get(&from))
            .is_some_and(|targets| targets.contains(&to))
    }

    /// Returns true if a skip exception covers exactly `from` to `to`.
    ///
    /// Role-agnostic: the role table decides who may actually use it.
    #[must_use]
    pub fn permits_skip(&self, from: OrderStatus, to: OrderStatus) -> bool {
        self.skip_exceptions
            .iter()
            .any(|rule| rule.from == from && rule.to == to)
    }

    /// Returns the stage that must be in history before moving to `target`.
    ///
    /// Normally this is the completion stage of `target`'s predecessor in
    /// the workflow. A waiver role of a skip exception landing on `target`
    /// instead needs the completion stage of the exception's `from` status.
    #[must_use]
    pub fn required_stage(
        &self,
        target: OrderStatus,
        workflow: Workflow,
        role: UserRole,
    ) -> Option<Stage> {
        if let Some(rule) = self
            .skip_exceptions
            .iter()
            .find(|rule| rule.to == target && rule.waiver_roles.contains(&role))
        {
            return rule.from.completion_stage();
        }

        workflow
            .predecessor(target)
            .and_then(OrderStatus::completion_stage)
    }
}

fn edge_table(entries: &[(OrderStatus, &[OrderStatus])]) -> EdgeTable {
    entries
        .iter()
        .map(|(from, targets)| (*from, targets.to_vec()))
        .collect()
}
