// src/error.rs
//! Application error types with structured error handling.
//!
//! Each variant names what went wrong and where. Nothing here retries or
//! recovers: failures surface to the caller as they happened.

use crate::types::PostUid;
use std::fmt;
use thiserror::Error;

/// Content API error codes as a typed vocabulary.
///
/// The API reports failures as a `type` string in the error body; when the
/// body is unparseable we fall back to the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrismicErrorCode {
    /// The query predicates could not be parsed
    ParsingError,
    /// The requested ref or resource does not exist
    NotFound,
    /// Access token missing, invalid or expired
    Unauthorized,
    /// Request parameters failed validation (bad page size, unknown ref...)
    ValidationFailed,
    /// Too many requests
    RateLimited,
    /// The API is temporarily unavailable
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error type this client doesn't recognize yet
    Unknown(String),
}

impl PrismicErrorCode {
    /// Parse the `type` field of an API error body.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "api_parsing_error" | "parsing-error" => Self::ParsingError,
            "api_notfound_error" => Self::NotFound,
            "api_security_error" | "invalid_token" => Self::Unauthorized,
            "api_validation_error" => Self::ValidationFailed,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Create from an HTTP status code when the error body is unparseable.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            502..=504 => Self::ServiceUnavailable,
            other => Self::HttpStatus(other),
        }
    }

    /// Whether this error means the resource simply doesn't exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl fmt::Display for PrismicErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParsingError => write!(f, "api_parsing_error"),
            Self::NotFound => write!(f, "api_notfound_error"),
            Self::Unauthorized => write!(f, "api_security_error"),
            Self::ValidationFailed => write!(f, "api_validation_error"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Content API returned an error ({code}): {message}")]
    PrismicService {
        code: PrismicErrorCode,
        message: String,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Content API has no master ref")]
    MissingMasterRef,

    #[error("Post not found: {uid}")]
    PostNotFound { uid: PostUid },

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template file not found at {path}: {source}")]
    TemplateNotFound {
        path: String,
        source: std::io::Error,
    },

    #[error("Template render error for template {name}: {message}")]
    TemplateRenderError { name: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Output delivery failed: {}", failures.join(", "))]
    DeliveryFailed { failures: Vec<String> },

    #[error(transparent)]
    ValidationError(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Whether the failure means the requested post does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            AppError::PostNotFound { .. } => true,
            AppError::PrismicService { code, .. } => code.is_not_found(),
            _ => false,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
