//
//  sentry-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the Sentry REST API.
//!
//! ## Architecture
//!
//! A call flows through four stages:
//!
//! 1. [`request`]: builds the outbound request (target URL, headers, JSON body)
//! 2. [`query`]: renders an optional query-parameter value onto it
//! 3. [`client`]: sends it through the underlying transport
//! 4. [`response`]: classifies the status and decodes the body
//!
//! [`projects`] is a resource module built on top of those stages.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use serde_json::Value;
//! use sentry_client::api::{Error, SentryClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = SentryClient::new("your-token", None, None)?;
//!
//! match client.get::<Value>("organizations/acme").await {
//!     Ok(org) => println!("{}", org["name"]),
//!     Err(Error::Api(err)) if err.status_code() == 404 => println!("no such organization"),
//!     Err(err) if err.is_retryable() => println!("try again later: {}", err),
//!     Err(err) => return Err(err.into()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`Result`]. See [`Error`] for the taxonomy and
//! [`ErrorKind`] for branching on it.

/// Core HTTP client: construction, dispatch and typed convenience calls.
pub mod client;

/// Error taxonomy and the decoded API error.
pub mod error;

/// Sentry project endpoints.
pub mod projects;

/// Query-string encoding.
pub mod query;

/// Request construction.
pub mod request;

/// Response classification and decoding.
pub mod response;

pub use client::{ClientConfig, SentryClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
pub use error::{ApiError, Error, ErrorKind, Result};
pub use query::{encode_pairs, QueryParams};
pub use request::{apply_query, NO_INPUT};

/// Re-export of the HTTP method type used by the request builder.
pub use reqwest::Method;
