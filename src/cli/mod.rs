//
//  bitbucket-kit
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions

mod auth;
mod config;
mod user;

pub use auth::AuthCommand;
pub use config::ConfigCommand;
pub use user::{EmailsCommand, UserCommand};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::{ApiError, BitbucketKit};
use crate::auth::{KeyringStore, CLOUD_HOST};
use crate::config::{Configuration, Settings};
use crate::output::OutputWriter;

/// bbkit - Query the Bitbucket Cloud user API from the command line
#[derive(Parser, Debug)]
#[command(
    name = "bbkit",
    version,
    about = "Query the Bitbucket Cloud user API from the command line",
    propagate_version = true,
    after_help = "Use 'bbkit <command> --help' for more information about a command."
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
    /// Access token to use instead of the one stored by `bbkit auth login`
    #[arg(long, global = true, env = "BBKIT_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API root to send requests to
    #[arg(long, global = true, env = "BBKIT_API_ENDPOINT")]
    pub api_endpoint: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    pub fn output(&self) -> OutputWriter {
        if self.json {
            OutputWriter::json()
        } else {
            OutputWriter::table()
        }
    }

    /// Settings file merged with the `--api-endpoint` override.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load()?;
        if let Some(endpoint) = &self.api_endpoint {
            settings.api_endpoint = Some(endpoint.clone());
        }
        Ok(settings)
    }

    /// Resolves the access token: `--token`/`BBKIT_TOKEN` first, then the keyring.
    pub fn resolve_token(&self) -> Option<String> {
        if let Some(token) = self.token.as_ref().filter(|t| !t.is_empty()) {
            return Some(token.clone());
        }
        match KeyringStore::new().get(CLOUD_HOST) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("Keyring unavailable: {:#}", e);
                None
            }
        }
    }

    /// Builds the request configuration, failing if no token is available.
    pub fn configuration(&self) -> Result<Configuration> {
        let settings = self.settings()?;
        let token = self.resolve_token().ok_or(ApiError::AuthRequired)?;
        Ok(settings.configuration(token))
    }

    /// A client for the resolved configuration.
    pub fn client(&self) -> Result<BitbucketKit> {
        Ok(BitbucketKit::new(self.configuration()?)?)
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the authenticated user
    #[command(visible_alias = "me")]
    User(UserCommand),

    /// List the authenticated user's email addresses
    Emails(EmailsCommand),

    /// Authenticate with Bitbucket
    Auth(AuthCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Print version information
    Version,
}
