// Rust guideline compliant 2026-02-06

//! Decal Workflow Core Library
//!
//! This crate provides the foundational components for decal shop order
//! workflows:
//! - Data models (Order, OrderStageHistory, OrderStatus, Stage, UserRole)
//! - The two canonical workflows (custom and standard decals)
//! - Declarative transition policy (role edges, skip exceptions, prerequisites)
//! - FSM logic (status change validation, next-status enumeration)
//! - JSONL storage for orders and stage history
//! - Configuration, error types and result handling

pub mod config;
pub mod error;
pub mod fsm;
pub mod models;
pub mod policy;
pub mod storage;
pub mod workflow;

pub use config::{parse_log_level, Config, OutputFormat};
pub use error::{Error, ErrorCategory, Result, TransitionError, ValidationResult};
pub use fsm::{shared_validator, validate_transition, OrderStatusValidator};
pub use models::{has_completed, Order, OrderStageHistory, OrderStatus, Stage, UserRole};
pub use policy::{SkipException, TransitionPolicy};
pub use storage::{HistoryStore, JsonlStore, OrderStore, Record};
pub use workflow::Workflow;
