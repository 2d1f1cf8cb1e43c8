//
//  sentry-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the Sentry API
//!
//! This module provides the core HTTP client for interacting with the Sentry
//! REST API. It owns the resolved endpoint, the bearer token and the
//! underlying `reqwest` transport, and composes request building, dispatch
//! and response decoding into single calls.
//!
//! ## Features
//!
//! - Default endpoint (`https://sentry.io/api/0/`) and 60 second timeout
//! - Bearer token authentication on every request
//! - JSON serialization/deserialization with typed inputs and outputs
//! - Structured [`ApiError`](super::ApiError) for non-2xx responses
//! - No connection reuse, no retries, no internal logging
//!
//! ## Sharing
//!
//! A [`SentryClient`] is immutable once built. Clone it (cheap, the transport
//! is reference counted) or share it by reference across concurrent tasks.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, Method, Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::{Error, Result};
use super::query::QueryParams;
use super::request::NO_INPUT;
use super::response;

/// The public Sentry API root used when no endpoint override is given.
pub const DEFAULT_ENDPOINT: &str = "https://sentry.io/api/0/";

/// Timeout applied to a whole call when no override is given.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Construction parameters for a [`SentryClient`].
///
/// This is what the configuration layer hands over after merging flags,
/// environment and the config file. `None` fields fall back to
/// [`DEFAULT_ENDPOINT`] and [`DEFAULT_TIMEOUT`].
#[derive(Clone, Default, PartialEq)]
pub struct ClientConfig {
    /// Bearer token sent with every request. Not validated for format.
    pub auth_token: String,
    /// Endpoint override. Must not be empty when present.
    pub endpoint: Option<String>,
    /// Timeout override.
    pub timeout: Option<Duration>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("auth_token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// The main HTTP client for interacting with the Sentry API.
///
/// This client handles all HTTP communication with Sentry, including:
/// - Building request URLs from the endpoint and a relative path
/// - Applying the bearer token
/// - Serializing request bodies and deserializing responses
/// - Turning non-success status codes into [`Error::Api`]
///
/// # Creating a Client
///
/// ```rust,no_run
/// use std::time::Duration;
/// use sentry_client::api::SentryClient;
///
/// // sentry.io with the default 60 second timeout
/// let client = SentryClient::new("your-token", None, None)?;
///
/// // self-hosted Sentry
/// let client = SentryClient::new(
///     "your-token",
///     Some("https://sentry.example.com/api/0/".to_string()),
///     Some(Duration::from_secs(10)),
/// )?;
/// # Ok::<(), sentry_client::api::Error>(())
/// ```
#[derive(Clone)]
pub struct SentryClient {
    /// The underlying HTTP client
    http: Client,
    /// Base URL every relative path is joined onto
    endpoint: String,
    /// Bearer token
    pub(super) auth_token: String,
    /// Timeout the transport was built with
    timeout: Duration,
}

impl SentryClient {
    /// Creates a new client.
    ///
    /// No network activity happens here.
    ///
    /// # Parameters
    ///
    /// * `auth_token` - The bearer token to authenticate with
    /// * `endpoint` - Endpoint override; `None` selects [`DEFAULT_ENDPOINT`]
    /// * `timeout` - Timeout override; `None` selects [`DEFAULT_TIMEOUT`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `endpoint` is `Some("")`, or if the
    /// HTTP transport could not be initialized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sentry_client::api::{SentryClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
    ///
    /// let client = SentryClient::new("abc", None, None)?;
    /// assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    /// assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
    ///
    /// assert!(SentryClient::new("abc", Some(String::new()), None).is_err());
    /// # Ok::<(), sentry_client::api::Error>(())
    /// ```
    pub fn new(
        auth_token: impl Into<String>,
        endpoint: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let endpoint = match endpoint {
            None => DEFAULT_ENDPOINT.to_string(),
            Some(endpoint) if endpoint.is_empty() => {
                return Err(Error::Configuration(
                    "endpoint can not be an empty string".to_string(),
                ));
            }
            Some(endpoint) => endpoint,
        };
        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);

        let http = Client::builder()
            .user_agent(format!("sentry-client/{}", crate::VERSION))
            .timeout(timeout)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| Error::Configuration(format!("failed to initialize HTTP transport: {}", e)))?;

        Ok(Self {
            http,
            endpoint,
            auth_token: auth_token.into(),
            timeout,
        })
    }

    /// Creates a client from resolved construction parameters.
    ///
    /// Equivalent to calling [`new`](Self::new) with the fields of `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(
            config.auth_token.clone(),
            config.endpoint.clone(),
            config.timeout,
        )
    }

    /// Returns the endpoint every request path is joined onto.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the timeout applied to each call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends a built request and waits for the response.
    ///
    /// The response is returned as-is, whatever its status. Use
    /// [`response::decode`] or [`response::decode_empty`] to interpret it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when no HTTP response was obtained (DNS,
    /// connection refused, TLS, timeout). Those are never reported as
    /// [`Error::Api`].
    pub async fn send(&self, request: Request) -> Result<Response> {
        self.http.execute(request).await.map_err(Error::Transport)
    }

    /// Builds, sends and decodes a request in one call.
    ///
    /// # Type Parameters
    ///
    /// * `I` - The request body type (must implement `Serialize`)
    /// * `O` - The type to deserialize a successful response into
    ///
    /// # Parameters
    ///
    /// * `method` - The HTTP method
    /// * `path` - Path relative to the endpoint (e.g., `"projects"`)
    /// * `input` - Optional body; pass [`NO_INPUT`] for none
    ///
    /// # Errors
    ///
    /// Any [`Error`] variant other than `Configuration`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use reqwest::Method;
    /// use serde_json::{json, Value};
    /// use sentry_client::api::SentryClient;
    ///
    /// # async fn example() -> sentry_client::api::Result<()> {
    /// let client = SentryClient::new("your-token", None, None)?;
    /// let body = json!({"name": "web"});
    /// let project: Value = client
    ///     .execute(Method::POST, "teams/acme/backend/projects", Some(&body))
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn execute<I, O>(&self, method: Method, path: &str, input: Option<&I>) -> Result<O>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        let request = self.build_request(method, path, input)?;
        let response = self.send(request).await?;
        response::decode(response).await
    }

    /// Like [`execute`](Self::execute), with an explicit query string.
    pub async fn execute_with_query<I, Q, O>(
        &self,
        method: Method,
        path: &str,
        input: Option<&I>,
        query: &Q,
    ) -> Result<O>
    where
        I: Serialize + ?Sized,
        Q: QueryParams + ?Sized,
        O: DeserializeOwned,
    {
        let request = self.build_request_with_query(method, path, input, query)?;
        let response = self.send(request).await?;
        response::decode(response).await
    }

    /// Like [`execute`](Self::execute), for calls whose successful response
    /// body is not needed. The body is still read and released.
    pub async fn execute_empty<I>(&self, method: Method, path: &str, input: Option<&I>) -> Result<()>
    where
        I: Serialize + ?Sized,
    {
        let request = self.build_request(method, path, input)?;
        let response = self.send(request).await?;
        response::decode_empty(response).await
    }

    /// Makes an HTTP GET request to the specified path.
    pub async fn get<O: DeserializeOwned>(&self, path: &str) -> Result<O> {
        self.execute(Method::GET, path, NO_INPUT).await
    }

    /// Makes an HTTP GET request with a query string.
    pub async fn get_with_query<O, Q>(&self, path: &str, query: &Q) -> Result<O>
    where
        O: DeserializeOwned,
        Q: QueryParams + ?Sized,
    {
        self.execute_with_query(Method::GET, path, NO_INPUT, query).await
    }

    /// Makes an HTTP POST request with a JSON body.
    pub async fn post<I, O>(&self, path: &str, body: &I) -> Result<O>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        self.execute(Method::POST, path, Some(body)).await
    }

    /// Makes an HTTP PUT request with a JSON body.
    pub async fn put<I, O>(&self, path: &str, body: &I) -> Result<O>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned,
    {
        self.execute(Method::PUT, path, Some(body)).await
    }

    /// Makes an HTTP DELETE request. The response body is discarded.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute_empty(Method::DELETE, path, NO_INPUT).await
    }
}

impl fmt::Debug for SentryClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentryClient")
            .field("endpoint", &self.endpoint)
            .field("auth_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
