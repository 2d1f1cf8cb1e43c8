//
//  sentry-client
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response interpretation.
//!
//! A response is a success when its status code is in `200..=299`, and an API
//! failure otherwise. The body is read in full exactly once; the response is
//! taken by value and dropped on return, which releases the connection.
//!
//! Failure bodies are decoded into [`ApiError`]. A failure body that is not a
//! JSON object surfaces as [`Error::Decoding`], not as an empty API error.

use reqwest::Response;
use serde::de::DeserializeOwned;

use super::error::{ApiError, Error, Result};

/// Returns `true` for status codes in `200..=299`.
pub fn is_success(status: u16) -> bool {
    (200..=299).contains(&status)
}

/// Reads the body of `response` and decodes it into `T`, or into an API error.
pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(read_error)?;
    decode_body(status, &body)
}

/// Reads and discards the body of `response`, reporting non-2xx as an API error.
///
/// Used when the caller has no use for a successful body (e.g. `DELETE`).
pub async fn decode_empty(response: Response) -> Result<()> {
    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(read_error)?;
    check_status(status, &body)
}

/// Like [`decode`], but a successful response with an empty body yields `None`.
///
/// Suits calls whose body depends on the route, such as raw API access where
/// `201`, `202` or `HEAD` responses may carry nothing.
pub async fn decode_optional<T: DeserializeOwned>(response: Response) -> Result<Option<T>> {
    let status = response.status().as_u16();
    let body = response.bytes().await.map_err(read_error)?;
    decode_optional_body(status, &body)
}

/// A body read that ran out of time is a transport timeout like any other.
fn read_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Transport(err)
    } else {
        Error::BodyRead(err)
    }
}

/// Decodes an already-read body given its status code.
pub fn decode_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T> {
    check_status(status, body)?;
    serde_json::from_slice(body).map_err(Error::Decoding)
}

/// Decodes an already-read body, treating an empty success body as `None`.
pub fn decode_optional_body<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<Option<T>> {
    check_status(status, body)?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(body).map(Some).map_err(Error::Decoding)
}

/// Returns `Ok(())` for a success status, otherwise the decoded [`Error::Api`].
pub fn check_status(status: u16, body: &[u8]) -> Result<()> {
    if is_success(status) {
        return Ok(());
    }
    let err = ApiError::from_body(status, body).map_err(Error::Decoding)?;
    Err(Error::Api(err))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::api::ErrorKind;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Project {
        id: String,
        name: String,
    }

    #[test]
    fn test_success_range() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(is_success(299));
        assert!(!is_success(199));
        assert!(!is_success(300));
        assert!(!is_success(404));
    }

    #[test]
    fn test_decode_success_body() {
        let projects: Vec<Project> =
            decode_body(200, br#"[{"id":"1","name":"demo"}]"#).unwrap();
        assert_eq!(
            projects,
            vec![Project {
                id: "1".to_string(),
                name: "demo".to_string()
            }]
        );
    }

    #[test]
    fn test_decode_api_error_carries_status() {
        for status in [301, 400, 401, 404, 409, 500, 503] {
            let err = decode_body::<Vec<Project>>(status, br#"{"detail":"nope"}"#).unwrap_err();
            let api = err.as_api_error().unwrap();
            assert_eq!(api.status_code(), status);
            assert_eq!(api.message(), Some("nope"));
        }
    }

    #[test]
    fn test_error_body_that_is_not_json_is_decoding_error() {
        let err = decode_body::<Project>(502, b"<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }

    #[test]
    fn test_success_body_with_wrong_shape_is_decoding_error() {
        let err = decode_body::<Vec<Project>>(200, br#"{"id":"1"}"#).unwrap_err();
        assert!(matches!(err, Error::Decoding(_)));

        let err = decode_body::<Project>(200, b"not json").unwrap_err();
        assert!(matches!(err, Error::Decoding(_)));
    }

    #[test]
    fn test_check_status_ignores_success_body() {
        assert!(check_status(204, b"").is_ok());
        assert!(check_status(200, b"not json at all").is_ok());
    }

    #[test]
    fn test_optional_body_tolerates_empty_success() {
        assert_eq!(decode_optional_body::<Project>(202, b"").unwrap(), None);
        assert_eq!(decode_optional_body::<Project>(201, b" \n").unwrap(), None);
        assert_eq!(
            decode_optional_body::<Project>(201, br#"{"id":"1","name":"demo"}"#).unwrap(),
            Some(Project {
                id: "1".to_string(),
                name: "demo".to_string()
            })
        );
    }

    #[test]
    fn test_optional_body_still_reports_failures() {
        let err = decode_optional_body::<Project>(404, br#"{"detail":"gone"}"#).unwrap_err();
        assert_eq!(err.status(), Some(404));

        let err = decode_optional_body::<Project>(200, b"not json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }
}
