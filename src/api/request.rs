//
//  sentry-client
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Outbound request construction.
//!
//! Every request the client sends is built here:
//!
//! - target is `{endpoint}/{path}/`, always with exactly one trailing slash
//!   (Sentry routes are registered with one)
//! - `Content-Type: application/json` and `Authorization: Bearer <token>`
//! - `Connection: close`, so every call uses its own connection
//! - the input value, if any, JSON-encoded into the body
//!
//! Query parameters are attached only through an explicit [`QueryParams`]
//! argument. `GET` requests do not turn their input into a query string.

use reqwest::header::{HeaderValue, AUTHORIZATION, CONNECTION, CONTENT_TYPE};
use reqwest::{Body, Method, Request, Url};
use serde::Serialize;

use super::client::SentryClient;
use super::error::{Error, Result};
use super::query::QueryParams;

/// An absent request input, for calls that send no body.
///
/// ```rust
/// use sentry_client::api::{SentryClient, NO_INPUT};
/// use reqwest::Method;
///
/// let client = SentryClient::new("token", None, None)?;
/// let request = client.build_request(Method::GET, "projects", NO_INPUT)?;
/// assert!(request.body().is_none());
/// # Ok::<(), sentry_client::api::Error>(())
/// ```
pub const NO_INPUT: Option<&'static ()> = None;

impl SentryClient {
    /// Builds a request for `method` against `path`, relative to the client endpoint.
    ///
    /// # Errors
    ///
    /// - [`Error::Encoding`] if `input` cannot be serialized to JSON
    /// - [`Error::RequestConstruction`] if the endpoint and path do not form an
    ///   `http`/`https` URL, or the token is not a valid header value
    pub fn build_request<I>(&self, method: Method, path: &str, input: Option<&I>) -> Result<Request>
    where
        I: Serialize + ?Sized,
    {
        let body = match input {
            Some(value) => Some(serde_json::to_vec(value).map_err(Error::Encoding)?),
            None => None,
        };

        let url = request_url(self.endpoint(), path)?;

        let mut authorization = HeaderValue::from_str(&format!("Bearer {}", self.auth_token))
            .map_err(|_| {
                Error::RequestConstruction(
                    "auth token contains characters not allowed in a header".to_string(),
                )
            })?;
        authorization.set_sensitive(true);

        let mut request = Request::new(method, url);
        let headers = request.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(CONNECTION, HeaderValue::from_static("close"));

        if let Some(bytes) = body {
            *request.body_mut() = Some(Body::from(bytes));
        }

        Ok(request)
    }

    /// Builds a request like [`build_request`](Self::build_request), then
    /// replaces its query string with `query.to_query_string()`.
    pub fn build_request_with_query<I, Q>(
        &self,
        method: Method,
        path: &str,
        input: Option<&I>,
        query: &Q,
    ) -> Result<Request>
    where
        I: Serialize + ?Sized,
        Q: QueryParams + ?Sized,
    {
        let mut request = self.build_request(method, path, input)?;
        apply_query(&mut request, query)?;
        Ok(request)
    }
}

/// Overwrites the query string of `request`.
///
/// The query is rendered before the request is touched, so a failing encoder
/// leaves the URL and body exactly as they were. An empty rendering removes
/// the query string.
pub fn apply_query<Q>(request: &mut Request, query: &Q) -> Result<()>
where
    Q: QueryParams + ?Sized,
{
    let query = query.to_query_string()?;
    if query.is_empty() {
        request.url_mut().set_query(None);
    } else {
        request.url_mut().set_query(Some(&query));
    }
    Ok(())
}

/// Joins the endpoint and a relative path into the request target.
pub(crate) fn request_url(endpoint: &str, path: &str) -> Result<Url> {
    let base = endpoint.trim_end_matches('/');
    let path = path.trim_matches('/');
    let target = if path.is_empty() {
        format!("{}/", base)
    } else {
        format!("{}/{}/", base, path)
    };

    let url = Url::parse(&target)
        .map_err(|e| Error::RequestConstruction(format!("'{}' is not a valid URL: {}", target, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(Error::RequestConstruction(format!(
            "unsupported URL scheme '{}' in '{}'",
            scheme, target
        ))),
    }
}
