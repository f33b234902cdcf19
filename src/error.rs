//! Error taxonomy and its two JSON envelopes.
//!
//! Every failure carries a stable `code` for programmatic branching and a
//! human-readable `message`. The same [`AppError`] renders in two shapes:
//!
//! - tool envelope (default [`IntoResponse`]):
//!   `{ "success": false, "error": { "code": ..., "message": ... } }`
//! - direct encode envelope ([`FlatError`]):
//!   `{ "status": "error", "code": ..., "message": ... }`

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::validation::InvalidReason;
use crate::utils::plantuml_codec::CodecError;

/// Code and message pair embedded in error envelopes.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("plantumlCode is required and cannot be empty")]
    EmptyCode,

    #[error("PlantUML code exceeds maximum size of {}", human_size(.max_bytes))]
    CodeTooLarge { max_bytes: usize },

    /// Compression failed or the request could not be read. `reason` is logged,
    /// never sent to the client.
    #[error("Failed to encode PlantUML code")]
    EncodingFailed { reason: String },

    #[error("Only {allowed} method is allowed")]
    MethodNotAllowed { allowed: &'static str },

    #[error("Tool '{0}' not found")]
    ToolNotFound(String),

    #[error("Tool name is required in the path")]
    ToolNameRequired,

    #[error("Internal server error")]
    Internal { reason: String },
}

impl AppError {
    /// Maps a validator rejection onto its error.
    pub fn from_invalid(reason: InvalidReason, max_bytes: usize) -> Self {
        match reason {
            InvalidReason::EmptyCode => AppError::EmptyCode,
            InvalidReason::CodeTooLarge => AppError::CodeTooLarge { max_bytes },
        }
    }

    pub fn internal(reason: impl Into<String>) -> Self {
        AppError::Internal {
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyCode | AppError::ToolNameRequired => StatusCode::BAD_REQUEST,
            AppError::CodeTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::ToolNotFound(_) => StatusCode::NOT_FOUND,
            AppError::EncodingFailed { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::EmptyCode => InvalidReason::EmptyCode.code(),
            AppError::CodeTooLarge { .. } => InvalidReason::CodeTooLarge.code(),
            AppError::EncodingFailed { .. } => "ENCODING_FAILED",
            AppError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            AppError::ToolNotFound(_) => "TOOL_NOT_FOUND",
            AppError::ToolNameRequired => "TOOL_NAME_REQUIRED",
            AppError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        ErrorInfo {
            code: self.code(),
            message: self.to_string(),
        }
    }

    fn log(&self) {
        match self {
            AppError::EncodingFailed { reason } => {
                tracing::error!(code = self.code(), %reason, "Encoding error");
            }
            AppError::Internal { reason } => {
                tracing::error!(code = self.code(), %reason, "Tool call error");
            }
            _ => tracing::debug!(code = self.code(), "Request rejected: {}", self),
        }
    }
}

impl From<CodecError> for AppError {
    fn from(e: CodecError) -> Self {
        AppError::EncodingFailed {
            reason: e.to_string(),
        }
    }
}

#[derive(Serialize)]
struct ToolErrorBody {
    success: bool,
    error: ErrorInfo,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();

        let body = ToolErrorBody {
            success: false,
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

/// Renders an [`AppError`] in the flat shape used by the direct encode endpoint.
#[derive(Debug)]
pub struct FlatError(pub AppError);

impl From<AppError> for FlatError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

#[derive(Serialize)]
struct FlatErrorBody {
    status: &'static str,
    code: &'static str,
    message: String,
}

impl IntoResponse for FlatError {
    fn into_response(self) -> Response {
        let FlatError(err) = self;
        err.log();

        let body = FlatErrorBody {
            status: "error",
            code: err.code(),
            message: err.to_string(),
        };

        (err.status(), Json(body)).into_response()
    }
}

/// Formats a byte ceiling the way error messages state it ("50KB").
fn human_size(bytes: &usize) -> String {
    if *bytes >= 1024 && bytes % 1024 == 0 {
        format!("{}KB", bytes / 1024)
    } else {
        format!("{} bytes", bytes)
    }
}
