// Rust guideline compliant 2026-02-06

//! Command implementations for the decal CLI.

pub mod init;
pub mod order;
pub mod stage;
pub mod status;
