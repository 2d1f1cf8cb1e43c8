//
//  sentry-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/16.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Configuration commands

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::config::VALID_KEYS;

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the value of a configuration key
    Get(GetArgs),

    /// Set a configuration key
    Set(SetArgs),

    /// Remove a configuration key
    Unset(UnsetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Print the configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Value to set
    pub value: String,
}

#[derive(Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key
    pub key: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Unset(args) => self.unset(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        if !VALID_KEYS.contains(&args.key.as_str()) {
            anyhow::bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                args.key,
                VALID_KEYS.join(", ")
            );
        }

        let config = global.load_config()?;
        let value = config.get(&args.key);

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }
        Ok(())
    }

    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = global.load_config()?;
        config.set(&args.key, &args.value)?;
        global.save_config(&config)?;

        let shown = display_value(&args.key, &args.value);
        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": shown,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Set {} = {}",
                style("✓").green(),
                style(&args.key).cyan(),
                shown
            );
        }
        Ok(())
    }

    fn unset(&self, args: &UnsetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = global.load_config()?;
        config.unset(&args.key)?;
        global.save_config(&config)?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{} Unset {}", style("✓").green(), style(&args.key).cyan());
        }
        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = global.load_config()?;

        if global.json {
            let entries: serde_json::Map<String, serde_json::Value> = VALID_KEYS
                .iter()
                .map(|key| {
                    let value = config.get(key).map(|v| display_value(key, &v));
                    (key.to_string(), serde_json::json!(value))
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        } else {
            for key in VALID_KEYS {
                match config.get(key) {
                    Some(value) => println!("{}={}", key, display_value(key, &value)),
                    None => println!("{}={}", key, style("(not set)").dim()),
                }
            }
        }
        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = global.config_path()?;
        if global.json {
            let result = serde_json::json!({ "path": path.display().to_string() });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", path.display());
        }
        Ok(())
    }
}

/// Masks secrets before they reach the terminal.
fn display_value(key: &str, value: &str) -> String {
    if key != "auth_token" {
        return value.to_string();
    }
    let visible: String = value.chars().rev().take(4).collect::<Vec<_>>().into_iter().rev().collect();
    if value.chars().count() <= 4 {
        "****".to_string()
    } else {
        format!("****{}", visible)
    }
}
