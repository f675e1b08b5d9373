// Rust guideline compliant 2026-02-09

//! Error handling for directory application services.

use serde::Serialize;
use thiserror::Error;
use trouve_core::{ContactAction, Error as CoreError};

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for command and screen responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The listing request exceeded its time bound and was aborted.
    Timeout,
    /// The service could not be reached.
    NetworkError,
    /// The service answered with a non-success status.
    HttpStatus,
    /// The response body was not a valid worker payload.
    DecodeError,
    /// A worker detail record could not be loaded.
    DetailUnavailable,
    /// The viewer refused location access.
    LocationDenied,
    /// The viewer position could not be read.
    LocationUnavailable,
    /// No application can handle the messaging intent.
    MissingHandler,
    /// An intent could not be opened.
    IntentFailed,
    /// The requested contact action is not offered for this worker.
    ActionUnavailable,
    /// Configuration is invalid.
    ConfigError,
    /// The request included invalid inputs.
    InvalidInput,
    /// IO failure.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
}

/// Application-level errors with stable mapping to error codes.
///
/// The display text of each variant is the message shown on the owning screen.
#[derive(Debug, Error)]
pub enum AppError {
    /// The listing request was aborted after its time bound.
    #[error("Timeout: unable to reach the directory service ({base_url}) after {}s.", seconds(.timeout_ms))]
    Timeout {
        /// Service address that was queried.
        base_url: String,
        /// Bound that was exceeded, in milliseconds.
        timeout_ms: u64,
    },

    /// Transport failure other than a timeout.
    #[error("Unable to load workers. Check the service address {base_url}. (Detail: {reason})")]
    Network {
        /// Service address that was queried.
        base_url: String,
        /// Transport error text.
        reason: String,
    },

    /// The service answered with a non-success status.
    #[error("HTTP error: {status} - {reason}")]
    HttpStatus {
        /// Numeric status code.
        status: u16,
        /// Canonical reason phrase, empty when unknown.
        reason: String,
    },

    /// The response body could not be decoded.
    #[error("Unable to read the directory response: {0}")]
    Decode(String),

    /// Any failure while loading a single worker.
    #[error("Unable to load details. Check the connection to {base_url}.")]
    DetailLoad {
        /// Service address that was queried.
        base_url: String,
        /// Requested worker identifier.
        id: String,
        /// Underlying failure, kept for logs and JSON details.
        reason: String,
    },

    /// Location permission was refused.
    #[error("Location permission denied.")]
    LocationPermissionDenied,

    /// The current position could not be read.
    #[error("Unable to obtain the current location: {0}")]
    LocationUnavailable(String),

    /// No messaging application is installed for the WhatsApp intent.
    #[error("Please install WhatsApp to contact {first_name}.")]
    MissingMessagingHandler {
        /// First name of the worker being contacted.
        first_name: String,
    },

    /// The intent handler failed to open a URL.
    #[error("Unable to open {url}: {reason}")]
    IntentFailed {
        /// Intent URL.
        url: String,
        /// Handler error text.
        reason: String,
    },

    /// The worker does not support the requested contact action.
    #[error("Contact action '{0}' is not available for this worker.")]
    ActionUnavailable(ContactAction),

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),
}

fn seconds(millis: &u64) -> f64 {
    *millis as f64 / 1000.0
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Timeout { .. } => ErrorCode::Timeout,
            AppError::Network { .. } => ErrorCode::NetworkError,
            AppError::HttpStatus { .. } => ErrorCode::HttpStatus,
            AppError::Decode(_) => ErrorCode::DecodeError,
            AppError::DetailLoad { .. } => ErrorCode::DetailUnavailable,
            AppError::LocationPermissionDenied => ErrorCode::LocationDenied,
            AppError::LocationUnavailable(_) => ErrorCode::LocationUnavailable,
            AppError::MissingMessagingHandler { .. } => ErrorCode::MissingHandler,
            AppError::IntentFailed { .. } => ErrorCode::IntentFailed,
            AppError::ActionUnavailable(_) => ErrorCode::ActionUnavailable,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Core(core) => match core {
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::InvalidInput(_) => ErrorCode::InvalidInput,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Timeout {
                base_url,
                timeout_ms,
            } => Some(serde_json::json!({
                "base_url": base_url,
                "timeout_ms": timeout_ms,
            })),
            AppError::Network { base_url, reason } => Some(serde_json::json!({
                "base_url": base_url,
                "reason": reason,
            })),
            AppError::HttpStatus { status, .. } => Some(serde_json::json!({
                "status": status,
            })),
            AppError::DetailLoad {
                base_url,
                id,
                reason,
            } => Some(serde_json::json!({
                "base_url": base_url,
                "id": id,
                "reason": reason,
            })),
            AppError::IntentFailed { url, .. } => Some(serde_json::json!({
                "url": url,
            })),
            _ => None,
        }
    }

    /// Whether the listing screen should offer a manual retry for this error.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Timeout { .. }
                | AppError::Network { .. }
                | AppError::HttpStatus { .. }
                | AppError::Decode(_)
        )
    }

    /// Whether the error only degrades location features.
    #[must_use]
    pub fn is_location_error(&self) -> bool {
        matches!(
            self,
            AppError::LocationPermissionDenied | AppError::LocationUnavailable(_)
        )
    }
}
