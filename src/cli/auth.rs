//
//  bitbucket-kit
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `bbkit auth` commands

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use dialoguer::Password;

use crate::api::BitbucketKit;
use crate::auth::{read_token_from_stdin, validate_token, KeyringStore, CLOUD_HOST};
use crate::config::Settings;
use crate::BITBUCKET_WEB_URL;

use super::GlobalOptions;

/// Authenticate with Bitbucket Cloud.
///
/// Tokens are verified against `GET user` before they are stored in the
/// system keyring.
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Log in with an access token
    Login(LoginArgs),

    /// Remove the stored access token
    Logout,

    /// View authentication status
    Status,
}

/// Options for `bbkit auth login`.
///
/// Without `--with-token` the token is read from an interactive password
/// prompt.
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Read token from standard input
    #[arg(long)]
    pub with_token: bool,
}

impl AuthCommand {
    /// Runs the selected `auth` subcommand.
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global).await,
            AuthSubcommand::Logout => logout(global),
            AuthSubcommand::Status => status(global).await,
        }
    }
}

/// Reads, verifies and stores a token, then remembers the username.
async fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    let output = global.output();

    let token = if args.with_token {
        read_token_from_stdin()?
    } else {
        println!("Create an access token at {}/account/settings/", BITBUCKET_WEB_URL);
        Password::new()
            .with_prompt("Access token")
            .interact()
            .context("Failed to read access token")?
    };

    if !validate_token(&token) {
        bail!("Invalid token format");
    }

    let settings = global.settings()?;
    let kit = BitbucketKit::new(settings.configuration(token.clone()))?;
    let user = kit
        .fetch_current_user()
        .await
        .context("Token could not be verified")?;

    KeyringStore::new().store(CLOUD_HOST, &token)?;
    // An --api-endpoint override is not persisted, so reload instead of saving `settings`.
    let mut persisted = Settings::load()?;
    persisted.user = user.login.clone();
    persisted.save()?;

    let who = user.login.as_deref().unwrap_or(&user.id);
    output.write_success(&format!("Logged in to {} as {}", CLOUD_HOST, who));
    Ok(())
}

/// Deletes the stored token and forgets the username.
fn logout(global: &GlobalOptions) -> Result<()> {
    KeyringStore::new().delete(CLOUD_HOST)?;

    let mut settings = Settings::load()?;
    if settings.user.take().is_some() {
        settings.save()?;
    }

    global
        .output()
        .write_success(&format!("Logged out of {}", CLOUD_HOST));
    Ok(())
}

/// Reports whether a token is available and whether the API accepts it.
async fn status(global: &GlobalOptions) -> Result<()> {
    let output = global.output();
    let settings = global.settings()?;

    let Some(token) = global.resolve_token() else {
        output.write_info(&format!("Not logged in to {}", CLOUD_HOST));
        output.write_info("Run 'bbkit auth login' to authenticate");
        return Ok(());
    };

    output.write_info(&format!("API endpoint: {}", settings.api_endpoint()));
    let kit = BitbucketKit::new(settings.configuration(token))?;
    match kit.fetch_current_user().await {
        Ok(user) => {
            let who = user.login.as_deref().unwrap_or(&user.id);
            output.write_success(&format!("Logged in to {} as {}", CLOUD_HOST, who));
            Ok(())
        }
        Err(e) => Err(anyhow::Error::from(e).context("Token was rejected")),
    }
}

#[cfg(test)]
mod tests {
    use super::AuthSubcommand;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn auth(args: &[&str]) -> AuthSubcommand {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Auth(cmd) => cmd.command,
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_login_with_token() {
        match auth(&["bbkit", "auth", "login", "--with-token"]) {
            AuthSubcommand::Login(args) => assert!(args.with_token),
            other => panic!("unexpected subcommand: {other:?}"),
        }
        match auth(&["bbkit", "auth", "login"]) {
            AuthSubcommand::Login(args) => assert!(!args.with_token),
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn test_parse_logout_and_status() {
        assert!(matches!(auth(&["bbkit", "auth", "logout"]), AuthSubcommand::Logout));
        assert!(matches!(auth(&["bbkit", "auth", "status"]), AuthSubcommand::Status));
    }
}
