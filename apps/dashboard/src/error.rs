//! # API Error Type
//!
//! Unified error type for dashboard commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Dashboard                          │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  {"command": "add_customer", "args": {...}}                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Form rejected? ─── FormRejection ────────────── ApiError ──────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  {"error": {"code": "VALIDATION_ERROR",                                 │
//! │             "message": "Orders this month cannot be negative",          │
//! │             "field": "ordersThisMonth", "clearField": true}}            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use station_core::validation::{FormField, FormRejection};
use station_core::{CoreError, ValidationError};
use thiserror::Error;

// =============================================================================
// Startup / Transport Errors
// =============================================================================

/// Errors that stop the dashboard process.
///
/// Command failures never end up here; they are answered as `ApiError`
/// responses and the IPC loop keeps going.
#[derive(Debug, Error)]
pub enum AppError {
    /// Initial data could not be loaded.
    #[error("Startup failed: {0}")]
    Startup(#[from] CoreError),

    /// Reading requests or writing responses failed.
    #[error("IPC channel failed: {0}")]
    Io(#[from] std::io::Error),

    /// A response could not be encoded.
    #[error("Response encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

// =============================================================================
// API Error
// =============================================================================

/// API error returned from commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// The form field at fault, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<FormField>,

    /// Whether the form should blank `field`
    pub clear_field: bool,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed
    ValidationError,

    /// The request itself could not be understood
    InvalidRequest,

    /// Something went wrong on our side
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field: None,
            clear_field: false,
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an invalid request error.
    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts form rejections, keeping the field and clear hint.
impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError {
            code: ErrorCode::ValidationError,
            message: rejection.message(),
            field: Some(rejection.field),
            clear_field: rejection.clear_field,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
