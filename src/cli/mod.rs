//
//  sentry-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod config;
mod project;

pub use api::ApiCommand;
pub use config::ConfigCommand;
pub use project::ProjectCommand;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::SentryClient;
use crate::config::{Config, Overrides};
use crate::output::OutputWriter;

/// Sentry CLI - Work with the Sentry API from the command line
#[derive(Parser, Debug)]
#[command(
    name = "sentry",
    version,
    about = "Work with the Sentry API from the command line",
    propagate_version = true,
    after_help = "Use 'sentry <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Auth token for the Sentry API
    #[arg(long, global = true, env = "SENTRY_AUTH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API endpoint (defaults to https://sentry.io/api/0/)
    #[arg(long, global = true, env = "SENTRY_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (defaults to 60)
    #[arg(long, global = true, env = "SENTRY_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Path to the configuration file
    #[arg(long, global = true, env = "SENTRY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// The configuration file in effect.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Config::config_path(),
        }
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from(&self.config_path()?)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to(&self.config_path()?)
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            auth_token: self.token.clone(),
            endpoint: self.endpoint.clone(),
            timeout: self.timeout,
        }
    }

    /// Builds an API client from flags, environment and the config file.
    pub fn client(&self, config: &Config) -> Result<SentryClient> {
        let client_config = config.client_config(&self.overrides())?;
        let client = SentryClient::from_config(&client_config)?;
        tracing::debug!(endpoint = client.endpoint(), timeout = ?client.timeout(), "created API client");
        Ok(client)
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::from_flag(self.json)
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make API requests
    Api(ApiCommand),

    /// Manage projects
    #[command(visible_alias = "projects")]
    Project(ProjectCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}
