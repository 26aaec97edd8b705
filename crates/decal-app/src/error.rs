// Rust guideline compliant 2026-02-09

//! Error handling for decal workflow application services.

use decal_core::{Error as CoreError, OrderStatus, TransitionError};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and tool responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested order was not found.
    NotFound,
    /// The requested status change is not permitted.
    InvalidTransition,
    /// Stored data failed validation.
    ValidationError,
    /// Configuration could not be loaded.
    ConfigError,
    /// IO failure while reading or writing repository data.
    IoError,
    /// The repository has not been initialized.
    RepoNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository is missing or not initialized.
    #[error("Decal repository not initialized at {path}. Run 'decal init' first.")]
    RepoNotInitialized {
        /// Path where `.decal` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<TransitionError> for AppError {
    fn from(error: TransitionError) -> Self {
        AppError::Core(CoreError::Transition(error))
    }
}

fn denial_endpoints(denial: &TransitionError) -> Option<(OrderStatus, OrderStatus)> {
    match denial {
        TransitionError::BackwardTransition { from, to }
        | TransitionError::SkippedStep { from, to, .. }
        | TransitionError::RoleNotPermitted { from, to, .. } => Some((*from, *to)),
        _ => None,
    }
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RepoNotInitialized { .. } => ErrorCode::RepoNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::NotFound(_) => ErrorCode::NotFound,
                CoreError::Transition(_) => ErrorCode::InvalidTransition,
                CoreError::InvalidOrder(_) => ErrorCode::ValidationError,
                CoreError::Config(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RepoNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(CoreError::Transition(denial)) => {
                let mut details = serde_json::json!({ "category": denial.category() });
                if let Some((from, to)) = denial_endpoints(denial) {
                    details["from"] = serde_json::json!(from.label());
                    details["to"] = serde_json::json!(to.label());
                }
                Some(details)
            }
            AppError::Core(CoreError::NotFound(id)) => Some(serde_json::json!({
                "id": id,
            })),
            _ => None,
        }
    }

    /// Returns the transition denial, if this error is one.
    #[must_use]
    pub fn as_denial(&self) -> Option<&TransitionError> {
        match self {
            AppError::Core(CoreError::Transition(denial)) => Some(denial),
            _ => None,
        }
    }
}
