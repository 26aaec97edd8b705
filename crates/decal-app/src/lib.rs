// Rust guideline compliant 2026-02-09

//! Shared application services for the decal workflow tools.
//!
//! This crate wires the core validator to its collaborators: order and
//! stage-history sources, the status sink, repository discovery, and
//! standardized response envelopes.

pub mod error;
pub mod ports;
pub mod repo;
pub mod response;
pub mod status;

pub use error::{AppError, ErrorCode, Result};
pub use ports::{OrderBackend, OrderSource, OrderStatusSink, StageHistorySink, StageHistorySource};
pub use repo::{FileBackend, RepoContext, DECAL_DIR};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use status::{parse_role, parse_stage, resolve_status_label, StatusService};
