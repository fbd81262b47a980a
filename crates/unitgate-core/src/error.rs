//! Shared error type across unitgate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// API key check configured and failed.
    Unauthorized,
    /// Host restriction configured and failed (no API key failure involved).
    Forbidden,
    /// Service name absent from configuration.
    NotFound,
    /// Action outside the start/stop/restart set.
    UnprocessableAction,
    /// Supervision backend call failed or timed out.
    BackendUnavailable,
    /// Malformed environment/JSON at startup.
    ConfigInvalid,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Unauthorized => "UNAUTHORIZED",
            ClientCode::Forbidden => "FORBIDDEN",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::UnprocessableAction => "UNPROCESSABLE_ACTION",
            ClientCode::BackendUnavailable => "BACKEND_UNAVAILABLE",
            ClientCode::ConfigInvalid => "CONFIG_INVALID",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status the transport layer should answer with.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::Unauthorized => 401,
            ClientCode::Forbidden => 403,
            ClientCode::NotFound => 404,
            ClientCode::UnprocessableAction => 422,
            ClientCode::BackendUnavailable => 503,
            ClientCode::ConfigInvalid => 500,
            ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, UnitGateError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum UnitGateError {
    #[error("Access denied: {}", .reasons.join(", "))]
    Unauthorized { reasons: Vec<String> },
    #[error("Access denied: {}", .reasons.join(", "))]
    Forbidden { reasons: Vec<String> },
    #[error("Service '{0}' not found in configured services")]
    NotFound(String),
    #[error("unknown action: {0} (expected start, stop or restart)")]
    UnprocessableAction(String),
    #[error("backend unavailable: {0}")]
    Backend(String),
    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl UnitGateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            UnitGateError::Unauthorized { .. } => ClientCode::Unauthorized,
            UnitGateError::Forbidden { .. } => ClientCode::Forbidden,
            UnitGateError::NotFound(_) => ClientCode::NotFound,
            UnitGateError::UnprocessableAction(_) => ClientCode::UnprocessableAction,
            UnitGateError::Backend(_) => ClientCode::BackendUnavailable,
            UnitGateError::ConfigInvalid(_) => ClientCode::ConfigInvalid,
            UnitGateError::Internal(_) => ClientCode::Internal,
        }
    }
}
