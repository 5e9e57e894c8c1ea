// ABOUTME: Closed error taxonomy for the boolean service with HTTP status mapping
// ABOUTME: Renders every failure as the structured `{"errors": [...]}` response envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every failure at the store or decode boundary is translated into exactly one
//! [`ErrorCode`] before it reaches the transport. The internal message and
//! source chain are for logs only; callers see the status, the fixed title, and
//! an optional detail string.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Closed set of error kinds surfaced to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Validation or decode failure
    BadRequest,
    /// Addressed resource does not exist
    NotFound,
    /// Verb not supported by the endpoint
    MethodNotAllowed,
    /// Request body media type is neither JSON nor form-urlencoded
    UnsupportedMediaType,
    /// Store or serialization failure
    InternalError,
}

impl ErrorCode {
    /// HTTP status code for this kind
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::UnsupportedMediaType => 415,
            Self::InternalError => 500,
        }
    }

    /// Fixed human-readable title rendered in the envelope
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BadRequest => "Bad Request",
            Self::NotFound => "Not Found",
            Self::MethodNotAllowed => "Method Not Allowed",
            Self::UnsupportedMediaType => "Unsupported Media Type",
            Self::InternalError => "Internal Server Error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error kind
    pub code: ErrorCode,
    /// Internal message, logged but never serialized
    pub message: String,
    /// Optional caller-facing detail
    pub detail: Option<String>,
    /// `Allow` header value for method-not-allowed responses
    pub allow: Option<&'static str>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            detail: None,
            allow: None,
            source: None,
        }
    }

    /// Validation or decode failure
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::NotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Verb not supported; `allow` lists the verbs the endpoint accepts
    pub fn method_not_allowed(method: impl fmt::Display, allow: &'static str) -> Self {
        let mut error = Self::new(
            ErrorCode::MethodNotAllowed,
            format!("method {method} not allowed"),
        );
        error.allow = Some(allow);
        error
    }

    /// Unsupported request body media type
    pub fn unsupported_media_type(content_type: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::UnsupportedMediaType,
            format!("unsupported content type '{}'", content_type.into()),
        )
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Attach a caller-facing detail string
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.title(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Single entry of the error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// HTTP status code
    pub status: u16,
    /// Fixed title for the status
    pub title: String,
    /// Optional caller-facing detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// HTTP error response envelope, always array-shaped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error entries; this service populates exactly one
    pub errors: Vec<ErrorEntry>,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            errors: vec![ErrorEntry {
                status: error.http_status(),
                title: error.code.title().to_owned(),
                detail: error.detail.clone(),
            }],
        }
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::{AppError, ErrorCode, ErrorResponse};
    use axum::response::{IntoResponse, Response};
    use axum::Json;
    use http::{header, HeaderValue, StatusCode};
    use tracing::{debug, error, info};

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            match self.code {
                ErrorCode::InternalError => error!(
                    error.code = ?self.code,
                    error.source = ?self.source,
                    "{}",
                    self.message
                ),
                ErrorCode::NotFound => info!(error.code = ?self.code, "{}", self.message),
                _ => debug!(error.code = ?self.code, "{}", self.message),
            }

            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let body = ErrorResponse::from(&self);
            let mut response = (status, Json(body)).into_response();

            if let Some(allow) = self.allow {
                response
                    .headers_mut()
                    .insert(header::ALLOW, HeaderValue::from_static(allow));
            }

            response
        }
    }
}
