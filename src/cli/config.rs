//
//  bitbucket-kit
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Get, set, unset and list the values in the settings file.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Settings, SETTINGS_KEYS};

use super::GlobalOptions;

/// Manage the settings file.
///
/// Settings live in `config.toml` under the platform config directory, or
/// under `$BBKIT_CONFIG_DIR` when set.
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the value of a setting
    Get(KeyArgs),

    /// Set a setting
    Set(SetArgs),

    /// Remove a setting
    Unset(KeyArgs),

    /// List all settings
    #[command(visible_alias = "ls")]
    List,

    /// Print the path of the settings file
    Path,
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Setting name (api_endpoint, user)
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Setting name (api_endpoint, user)
    pub key: String,

    /// New value
    pub value: String,
}

impl ConfigCommand {
    /// Runs the selected `config` subcommand.
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => get(args, global),
            ConfigSubcommand::Set(args) => set(args),
            ConfigSubcommand::Unset(args) => unset(args),
            ConfigSubcommand::List => list(global),
            ConfigSubcommand::Path => {
                println!("{}", Settings::config_path()?.display());
                Ok(())
            }
        }
    }
}

/// Rejects keys that are not in [`SETTINGS_KEYS`].
fn check_key(key: &str) -> Result<()> {
    if !SETTINGS_KEYS.contains(&key) {
        bail!(
            "Unknown setting '{}'. Valid settings: {}",
            key,
            SETTINGS_KEYS.join(", ")
        );
    }
    Ok(())
}

fn get(args: &KeyArgs, global: &GlobalOptions) -> Result<()> {
    check_key(&args.key)?;
    let settings = Settings::load()?;
    let value = settings.get(&args.key);

    if global.json {
        let result = serde_json::json!({ "key": args.key, "value": value });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(v) = value {
        println!("{}", v);
    }
    Ok(())
}

/// Checks that `value` is acceptable for `key`.
fn check_value(key: &str, value: &str) -> Result<()> {
    if key == "api_endpoint" {
        url::Url::parse(value)
            .map_err(|e| anyhow::anyhow!("Invalid API endpoint '{}': {}", value, e))?;
    }
    Ok(())
}

fn set(args: &SetArgs) -> Result<()> {
    check_key(&args.key)?;
    check_value(&args.key, &args.value)?;

    let mut settings = Settings::load()?;
    settings.set(&args.key, args.value.clone());
    settings.save()?;

    println!("{} Set {} to {}", style("✓").green(), args.key, args.value);
    Ok(())
}

fn unset(args: &KeyArgs) -> Result<()> {
    check_key(&args.key)?;
    let mut settings = Settings::load()?;
    settings.unset(&args.key);
    settings.save()?;

    println!("{} Unset {}", style("✓").green(), args.key);
    Ok(())
}

fn list(global: &GlobalOptions) -> Result<()> {
    let settings = Settings::load()?;

    if global.json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    for key in SETTINGS_KEYS {
        match settings.get(key) {
            Some(value) => println!("{} = {}", key, value),
            None => println!("{} = {}", key, style("(not set)").dim()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_key() {
        assert!(check_key("api_endpoint").is_ok());
        assert!(check_key("user").is_ok());

        let error = check_key("editor").unwrap_err();
        assert!(error.to_string().contains("Unknown setting 'editor'"));
        assert!(error.to_string().contains("api_endpoint, user"));
    }

    #[test]
    fn test_check_value_validates_endpoint() {
        assert!(check_value("api_endpoint", "https://bitbucket.example.com/2.0").is_ok());
        assert!(check_value("api_endpoint", "not a url").is_err());
        assert!(check_value("user", "not a url").is_ok());
    }
}
