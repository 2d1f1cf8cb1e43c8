//
//  sentry-client
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Makes an authenticated request to any Sentry API path, relative to the
//! configured endpoint, and prints the JSON response. Useful for endpoints
//! that have no dedicated command.
//!
//! ## Examples
//!
//! ```bash
//! # List organizations
//! sentry api organizations
//!
//! # Search unresolved issues
//! sentry api organizations/acme/issues -q query=is:unresolved -q limit=10
//!
//! # Create a team with nested JSON fields
//! sentry api -X POST organizations/acme/teams -F name=Backend -F slug=backend
//!
//! # Send a body from a file (- for stdin)
//! sentry api -X PUT projects/acme/web -f project.json
//! ```

use std::fs;

use anyhow::{bail, Context, Result};
use clap::Args;
use reqwest::Method;
use serde_json::Value;

use crate::api::response;

use super::GlobalOptions;

/// Make direct API requests
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API path relative to the endpoint (e.g., organizations/acme/projects)
    pub path: String,

    /// HTTP method (GET, POST, PUT, PATCH, DELETE)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Request body fields as JSON (key=value, can be nested with dots)
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// Raw field values (not JSON-encoded, strings only)
    #[arg(long, action = clap::ArgAction::Append)]
    pub raw_field: Vec<String>,

    /// Read request body from file (- for stdin)
    #[arg(long, short = 'f', conflicts_with_all = ["field", "raw_field"])]
    pub input: Option<String>,

    /// Query parameters (key=value, can be repeated)
    #[arg(long, short = 'q', action = clap::ArgAction::Append)]
    pub query: Vec<String>,

    /// Suppress output (only report failures)
    #[arg(long)]
    pub silent: bool,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let method = self.parse_method()?;
        let body = self.build_body()?;
        let query = self.build_query()?;

        let config = global.load_config()?;
        let client = global.client(&config)?;

        let request = client.build_request_with_query(method.clone(), &self.path, body.as_ref(), &query)?;
        tracing::debug!(method = %method, url = %request.url(), "sending API request");

        let response = client.send(request).await?;
        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received API response");

        if self.silent || method == Method::HEAD {
            response::decode_empty(response).await?;
            return Ok(());
        }

        match response::decode_optional::<Value>(response).await? {
            Some(value) => global.writer().write_value(&value, self.compact),
            None => Ok(()),
        }
    }

    fn parse_method(&self) -> Result<Method> {
        match self.method.to_uppercase().as_str() {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            "PUT" => Ok(Method::PUT),
            "PATCH" => Ok(Method::PATCH),
            "DELETE" => Ok(Method::DELETE),
            "HEAD" => Ok(Method::HEAD),
            "OPTIONS" => Ok(Method::OPTIONS),
            _ => bail!("Unsupported HTTP method: {}", self.method),
        }
    }

    fn build_body(&self) -> Result<Option<Value>> {
        if let Some(input) = &self.input {
            let content = if input == "-" {
                let mut buffer = String::new();
                std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer)?;
                buffer
            } else {
                fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?
            };

            let value: Value = serde_json::from_str(&content)
                .with_context(|| format!("Request body in {} is not valid JSON", input))?;
            return Ok(Some(value));
        }

        if self.field.is_empty() && self.raw_field.is_empty() {
            return Ok(None);
        }

        let mut body = serde_json::Map::new();

        for field in &self.field {
            let (key, value) = split_pair(field)?;
            set_nested_value(&mut body, key, parse_field_value(value));
        }

        for field in &self.raw_field {
            let (key, value) = split_pair(field)?;
            set_nested_value(&mut body, key, Value::String(value.to_string()));
        }

        Ok(Some(Value::Object(body)))
    }

    fn build_query(&self) -> Result<Vec<(String, String)>> {
        self.query
            .iter()
            .map(|pair| split_pair(pair).map(|(k, v)| (k.to_string(), v.to_string())))
            .collect()
    }
}

fn split_pair(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((key, value)) => Ok((key, value)),
        None => bail!("Invalid field format: {}. Expected key=value", field),
    }
}

/// Interprets a `-F` value: booleans, null, numbers and JSON arrays/objects
/// keep their JSON type, anything else is a string.
fn parse_field_value(value: &str) -> Value {
    match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        _ => {
            if let Ok(n) = value.parse::<i64>() {
                Value::Number(n.into())
            } else if let Some(n) = value.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
                Value::Number(n)
            } else if value.starts_with('[') || value.starts_with('{') {
                serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()))
            } else {
                Value::String(value.to_string())
            }
        }
    }
}

fn set_nested_value(obj: &mut serde_json::Map<String, Value>, key: &str, value: Value) {
    match key.split_once('.') {
        None => {
            obj.insert(key.to_string(), value);
        }
        Some((first, rest)) => {
            let entry = obj
                .entry(first.to_string())
                .or_insert_with(|| Value::Object(serde_json::Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(serde_json::Map::new());
            }
            if let Value::Object(nested) = entry {
                set_nested_value(nested, rest, value);
            }
        }
    }
}
