//
//  sentry-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Sentry Client Library
//!
//! A typed client for the Sentry REST API, plus the library half of the
//! `sentry` command-line tool.
//!
//! ## Overview
//!
//! The heart of the crate is a small request/response pipeline:
//!
//! - build an authenticated JSON request from a method, a relative path, an
//!   optional input value and optional query parameters
//! - send it through `reqwest`
//! - decode a 2xx body into the caller's output type, or a non-2xx body into
//!   a structured [`ApiError`](api::ApiError)
//!
//! ## Module Structure
//!
//! - [`api`]: The API client, error model and resource modules
//! - [`config`]: Configuration file management
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Output formatting (Table, JSON)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sentry_client::api::projects::ProjectListQuery;
//! use sentry_client::api::SentryClient;
//!
//! # async fn example() -> sentry_client::api::Result<()> {
//! let client = SentryClient::new("your-token", None, None)?;
//! let projects = client.list_projects(&ProjectListQuery::default()).await?;
//! println!("{} projects", projects.len());
//! # Ok(())
//! # }
//! ```

/// API client for Sentry.
///
/// Request construction, transport dispatch, response decoding, the error
/// taxonomy, and the project endpoints.
pub mod api;

/// Command-line interface definitions.
pub mod cli;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/sentry/config.toml`
/// - macOS: `~/Library/Application Support/sentry/config.toml`
/// - Windows: `%APPDATA%\sentry\config\config.toml`
pub mod config;

/// Output formatting for different modes.
pub mod output;

pub use api::SentryClient;
pub use cli::Cli;
pub use config::Config;

/// Application name constant.
pub const APP_NAME: &str = "sentry";

/// Application version, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// The command completed without errors.
    pub const SUCCESS: i32 = 0;

    /// An unspecified error occurred. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage, arguments or client configuration.
    pub const USAGE: i32 = 2;

    /// The API rejected the token (401 or 403).
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist (404).
    pub const NOT_FOUND: i32 = 8;

    /// The API could not be reached (DNS, connection, TLS, timeout).
    pub const NETWORK_ERROR: i32 = 32;

    /// Chooses the exit code for a failed command.
    ///
    /// Errors raised by the API client keep their classification through
    /// `anyhow`; everything else is a general error.
    ///
    /// ```rust
    /// use sentry_client::api::{ApiError, Error};
    /// use sentry_client::exit_codes;
    ///
    /// let err = anyhow::Error::from(Error::from(ApiError::new(404, None)));
    /// assert_eq!(exit_codes::for_error(&err), exit_codes::NOT_FOUND);
    /// ```
    pub fn for_error(err: &anyhow::Error) -> i32 {
        use crate::api::{Error, ErrorKind};

        let Some(err) = err.downcast_ref::<Error>() else {
            return ERROR;
        };
        match err.kind() {
            ErrorKind::Configuration => USAGE,
            ErrorKind::Transport => NETWORK_ERROR,
            ErrorKind::Api => match err.status() {
                Some(401) | Some(403) => AUTH_ERROR,
                Some(404) => NOT_FOUND,
                _ => ERROR,
            },
            _ => ERROR,
        }
    }
}
