//
//  sentry-client
//  api/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query-string encoding.
//!
//! The client never looks inside query-parameter values. Anything that can
//! render itself through [`QueryParams`] can be attached to a request with
//! [`SentryClient::build_request_with_query`](super::SentryClient::build_request_with_query).
//! Resource modules implement the trait for their own query types and usually
//! delegate to [`encode_pairs`].
//!
//! # Example
//!
//! ```rust
//! use sentry_client::api::QueryParams;
//!
//! let query = [("query", "is:unresolved"), ("cursor", "0:100:0")];
//! assert_eq!(
//!     query.to_query_string().unwrap(),
//!     "query=is%3Aunresolved&cursor=0%3A100%3A0"
//! );
//! ```

use std::collections::BTreeMap;

use url::form_urlencoded;

use super::error::{Error, Result};

/// A value that can be rendered to a URL query string (without the leading `?`).
pub trait QueryParams {
    /// Renders the value. An empty string means "no query".
    fn to_query_string(&self) -> Result<String>;
}

impl<T: QueryParams + ?Sized> QueryParams for &T {
    fn to_query_string(&self) -> Result<String> {
        (**self).to_query_string()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> QueryParams for [(K, V)] {
    fn to_query_string(&self) -> Result<String> {
        encode_pairs(self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> QueryParams for [(K, V); N] {
    fn to_query_string(&self) -> Result<String> {
        self.as_slice().to_query_string()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> QueryParams for Vec<(K, V)> {
    fn to_query_string(&self) -> Result<String> {
        self.as_slice().to_query_string()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> QueryParams for BTreeMap<K, V> {
    fn to_query_string(&self) -> Result<String> {
        encode_pairs(self.iter().map(|(k, v)| (k.as_ref(), v.as_ref())))
    }
}

/// Form-encodes key/value pairs in iteration order.
///
/// Keys may repeat (`project=1&project=2`). An empty key cannot be encoded
/// meaningfully and fails with [`Error::Query`].
pub fn encode_pairs<I, K, V>(pairs: I) -> Result<String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(Error::Query(format!(
                "empty parameter name for value '{}'",
                value.as_ref()
            )));
        }
        serializer.append_pair(key, value.as_ref());
    }
    Ok(serializer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_pairs_preserves_order_and_repeats() {
        let query = vec![("project", "1"), ("project", "2"), ("statsPeriod", "24h")];
        assert_eq!(
            query.to_query_string().unwrap(),
            "project=1&project=2&statsPeriod=24h"
        );
    }

    #[test]
    fn test_encode_pairs_escapes_reserved_characters() {
        let query = [("query", "a b&c=d")];
        assert_eq!(query.to_query_string().unwrap(), "query=a+b%26c%3Dd");
    }

    #[test]
    fn test_empty_collection_renders_empty_string() {
        let query: Vec<(String, String)> = Vec::new();
        assert_eq!(query.to_query_string().unwrap(), "");
    }

    #[test]
    fn test_btreemap_is_sorted_by_key() {
        let mut query = BTreeMap::new();
        query.insert("b", "2");
        query.insert("a", "1");
        assert_eq!(query.to_query_string().unwrap(), "a=1&b=2");
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let err = [("", "orphan")].to_query_string().unwrap_err();
        assert!(matches!(err, Error::Query(_)));
    }
}
