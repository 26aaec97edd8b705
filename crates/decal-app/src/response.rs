// Rust guideline compliant 2026-02-09

//! Response envelopes for command outputs.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Status indicator.
    pub status: &'static str,
    /// Result payload.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Creates a new success envelope.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self { status: "ok", result }
    }
}

/// Standard error envelope.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Stable error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decal_core::TransitionError;

    #[test]
    fn test_denial_envelope() {
        let error = AppError::from(TransitionError::CustomerDenied);
        let envelope = ErrorEnvelope::from_error(&error);
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["code"], "invalid_transition");
        assert_eq!(json["details"]["category"], "authorization");
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("Customers cannot change order status"));
    }

    #[test]
    fn test_success_envelope() {
        let envelope = SuccessEnvelope::new(vec!["Survey"]);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["result"][0], "Survey");
    }

    #[test]
    fn test_invalid_input_has_no_details() {
        let envelope = ErrorEnvelope::from_error(&AppError::InvalidInput("bad".to_string()));
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json.get("details").is_none());
    }

    #[test]
    fn test_denial_details_name_statuses() {
        let error = AppError::from(TransitionError::RoleNotPermitted {
            role: decal_core::UserRole::Technician,
            from: decal_core::OrderStatus::NewOrder,
            to: decal_core::OrderStatus::Survey,
        });
        let json = serde_json::to_value(ErrorEnvelope::from_error(&error)).unwrap();

        assert_eq!(json["details"]["category"], "authorization");
        assert_eq!(json["details"]["from"], "New Order");
        assert_eq!(json["details"]["to"], "Survey");
    }
}
