//
//  bitbucket-kit
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! Shared error handling and decoding helpers used by every endpoint.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`extract_error_message`] - Pulls a readable message out of a Bitbucket error body
//! - [`lenient`] - Field deserializers that degrade bad values to `None`
//!
//! # Example
//!
//! ```rust
//! use bitbucket_kit::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::AuthFailed(reason)) => println!("Please log in again: {}", reason),
//!         Err(e) if e.is_transport() => println!("Network problem: {}", e),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

pub mod lenient;

use thiserror::Error;

/// Unified error type for all Bitbucket API operations.
///
/// # Variants
///
/// | Variant | Description | Origin |
/// |---------|-------------|--------|
/// | `AuthRequired` | No access token available | client |
/// | `AuthFailed` | Invalid or expired token | 401 |
/// | `Forbidden` | Insufficient permissions | 403 |
/// | `NotFound` | Requested resource does not exist | 404 |
/// | `RateLimited` | Too many requests | 429 |
/// | `BadRequest` | Invalid request parameters | 400 |
/// | `ServerError` | Internal server error | 5xx |
/// | `Unknown` | Any other non-2xx status | other |
/// | `Network` | `reqwest` transport failure | transport |
/// | `Transport` | Transport failure from a custom client | transport |
/// | `Decode` | Body does not match the expected shape | decoding |
/// | `InvalidUrl` | The configured API endpoint is not a URL | request construction |
/// | `NotImplemented` | Placeholder for unfinished functionality | client |
/// | `Cancelled` | The request task was cancelled | client |
///
/// # Notes
///
/// - `Network` converts from `reqwest::Error`, `Decode` from `serde_json::Error`
///   and `InvalidUrl` from `url::ParseError`
/// - Nothing in this crate retries; each error is reported exactly once
#[derive(Error, Debug)]
pub enum ApiError {
    /// No access token was configured for an endpoint that needs one.
    #[error("Authentication required")]
    AuthRequired,

    /// Authentication failed due to an invalid or expired token.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// The authenticated user may not perform the operation.
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// API rate limit has been exceeded.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// The request was malformed or contained invalid parameters.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal server error occurred on the Bitbucket side (HTTP 5xx).
    #[error("Server error: {0}")]
    ServerError(String),

    /// A non-2xx status without a more specific variant.
    #[error("Unexpected response: {0}")]
    Unknown(String),

    /// A network-level error reported by `reqwest`.
    ///
    /// Covers connection failures, timeouts, DNS resolution errors and broken bodies.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A network-level error reported by a non-`reqwest` [`HttpClient`](crate::http::HttpClient).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded into the expected shape.
    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The configured API endpoint could not be turned into a request URL.
    #[error("Invalid API endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The operation exists but is not implemented yet.
    #[error("not implemented: {0}")]
    NotImplemented(String),

    /// The request task was cancelled before it completed.
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Maps a non-success HTTP status and its body to an error.
    ///
    /// The message is taken from the Bitbucket error envelope when one is present,
    /// otherwise from the raw body, otherwise from the status itself.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitbucket_kit::api::common::ApiError;
    ///
    /// let error = ApiError::from_status(404, r#"{"type": "error", "error": {"message": "No such user"}}"#);
    /// assert_eq!(error.to_string(), "Resource not found: No such user");
    /// ```
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = extract_error_message(body).or_else(|| {
            let body = body.trim();
            (!body.is_empty()).then(|| body.to_string())
        });
        let message = detail
            .clone()
            .unwrap_or_else(|| format!("HTTP {status}"));

        match status {
            400 => Self::BadRequest(message),
            401 => Self::AuthFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            429 => Self::RateLimited,
            500..=599 => Self::ServerError(message),
            _ => match detail {
                Some(detail) => Self::Unknown(format!("HTTP {status}: {detail}")),
                None => Self::Unknown(format!("HTTP {status}")),
            },
        }
    }

    /// Returns `true` for network failures and non-2xx statuses.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::AuthFailed(_)
                | Self::Forbidden(_)
                | Self::NotFound(_)
                | Self::RateLimited
                | Self::BadRequest(_)
                | Self::ServerError(_)
                | Self::Unknown(_)
                | Self::Network(_)
                | Self::Transport(_)
        )
    }

    /// Returns `true` when the body arrived but did not match the expected shape.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Extracts a user-friendly message from a Bitbucket error body.
///
/// Bitbucket Cloud returns errors in the format:
/// ```json
/// {"type": "error", "error": {"message": "Human readable message"}}
/// ```
///
/// Some endpoints use `{"error": {"detail": "..."}}` or a bare `{"message": "..."}`.
/// Returns `None` when the body is not JSON or carries none of these fields.
pub fn extract_error_message(body: &str) -> Option<String> {
    let json = serde_json::from_str::<serde_json::Value>(body).ok()?;

    json.get("error")
        .and_then(|e| e.get("message"))
        .or_else(|| json.get("error").and_then(|e| e.get("detail")))
        .or_else(|| {
            json.get("errors")
                .and_then(|e| e.as_array())
                .and_then(|arr| arr.first())
                .and_then(|e| e.get("message"))
        })
        .or_else(|| json.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}
