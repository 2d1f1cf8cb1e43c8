//
//  sentry-client
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error types for the Sentry API client.
//!
//! Every public operation of the client returns [`Result<T>`], where the error
//! side is one of the [`Error`] variants below. Exactly one outcome is produced
//! per call: a decoded value, an [`ApiError`] describing a non-2xx response, or
//! one of the local failures (configuration, encoding, transport, decoding).
//!
//! | Variant | Kind | Produced by |
//! |---------|------|-------------|
//! | `Configuration` | [`ErrorKind::Configuration`] | client construction |
//! | `Encoding` | [`ErrorKind::Encoding`] | request body serialization |
//! | `Query` | [`ErrorKind::Encoding`] | query string rendering |
//! | `RequestConstruction` | [`ErrorKind::RequestConstruction`] | invalid target URL or header |
//! | `Transport` | [`ErrorKind::Transport`] | DNS, connect, TLS, timeout |
//! | `BodyRead` | [`ErrorKind::BodyRead`] | reading the response body |
//! | `Decoding` | [`ErrorKind::Decoding`] | response body is not the expected JSON |
//! | `Api` | [`ErrorKind::Api`] | well-formed non-2xx response |
//!
//! # Example
//!
//! ```rust
//! use sentry_client::api::{ApiError, Error, ErrorKind};
//!
//! let err = Error::from(ApiError::new(404, Some("The requested resource does not exist")));
//! assert_eq!(err.kind(), ErrorKind::Api);
//! assert_eq!(err.status(), Some(404));
//! assert!(!err.is_retryable());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Convenience alias used by every fallible client operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all Sentry client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The client could not be constructed from the supplied settings.
    #[error("Invalid client configuration: {0}")]
    Configuration(String),

    /// The request input could not be serialized to JSON.
    #[error("Failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The query-parameter value could not be rendered to a query string.
    #[error("Failed to encode query parameters: {0}")]
    Query(String),

    /// The method, endpoint and path do not form a valid request.
    #[error("Invalid request: {0}")]
    RequestConstruction(String),

    /// The request never produced an HTTP response, or the configured
    /// timeout elapsed before the response body was read.
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// An HTTP response arrived but its body could not be read in full for a
    /// reason other than the timeout.
    #[error("Failed to read response body: {0}")]
    BodyRead(#[source] reqwest::Error),

    /// The response body was not valid JSON or did not match the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decoding(#[source] serde_json::Error),

    /// The server answered with a status code outside `200..=299`.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Coarse classification of an [`Error`], used by callers to branch on
/// retryable versus terminal failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Configuration,
    Encoding,
    RequestConstruction,
    Transport,
    BodyRead,
    Decoding,
    Api,
}

impl Error {
    /// Returns the [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Encoding(_) | Self::Query(_) => ErrorKind::Encoding,
            Self::RequestConstruction(_) => ErrorKind::RequestConstruction,
            Self::Transport(_) => ErrorKind::Transport,
            Self::BodyRead(_) => ErrorKind::BodyRead,
            Self::Decoding(_) => ErrorKind::Decoding,
            Self::Api(_) => ErrorKind::Api,
        }
    }

    /// Returns the HTTP status code for API errors, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status_code()),
            _ => None,
        }
    }

    /// Returns the decoded API error, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns `true` if the transport gave up because the configured timeout elapsed.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(err) => err.is_timeout(),
            _ => false,
        }
    }

    /// Returns `true` if repeating the same call might succeed.
    ///
    /// Transport failures and 5xx responses qualify. The client never retries
    /// on its own; this only informs the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Api(err) => err.is_server_error(),
            _ => false,
        }
    }
}

/// Structured failure decoded from a non-2xx response body.
///
/// Sentry reports errors as a JSON object, most commonly
/// `{"detail": "Human readable message"}`. Validation failures instead map
/// field names to lists of messages (`{"slug": ["This field is required."]}`);
/// those fields are kept in [`extra`](Self::extra).
///
/// The status code always comes from the HTTP response, never from the body.
///
/// # Example
///
/// ```rust
/// use sentry_client::api::ApiError;
///
/// let err = ApiError::from_body(400, br#"{"detail":"name already exists"}"#).unwrap();
/// assert_eq!(err.status_code(), 400);
/// assert_eq!(err.message(), Some("name already exists"));
/// assert_eq!(
///     err.to_string(),
///     "Request failed with status code 400: name already exists"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(skip)]
    status_code: u16,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<String>,

    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ApiError {
    /// Creates an API error with an optional detail message and no extra fields.
    pub fn new(status_code: u16, detail: Option<&str>) -> Self {
        Self {
            status_code,
            detail: detail.map(str::to_string),
            extra: Map::new(),
        }
    }

    /// Decodes an error body, pre-populating the status code from the response.
    ///
    /// Fails when the body is not a JSON object of the expected shape; the
    /// caller reports that as a decoding failure rather than an empty API error.
    pub fn from_body(status_code: u16, body: &[u8]) -> std::result::Result<Self, serde_json::Error> {
        let mut err: ApiError = serde_json::from_slice(body)?;
        err.status_code = status_code;
        Ok(err)
    }

    /// The HTTP status code of the failed response.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// The `detail` field of the error body, if present.
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    /// Any fields of the error body other than `detail`.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Human readable message: `detail`, falling back to a `message` field.
    pub fn message(&self) -> Option<&str> {
        self.detail
            .as_deref()
            .or_else(|| self.extra.get("message").and_then(Value::as_str))
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status_code)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Request failed with status code {}", self.status_code)?;
        if let Some(message) = self.message() {
            write!(f, ": {}", message)
        } else if !self.extra.is_empty() {
            write!(f, ": {}", Value::Object(self.extra.clone()))
        } else {
            Ok(())
        }
    }
}

impl std::error::Error for ApiError {}
