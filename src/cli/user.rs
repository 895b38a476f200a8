//
//  bitbucket-kit
//  cli/user.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `bbkit user` and `bbkit emails`

use anyhow::{Context, Result};
use clap::Args;

use super::GlobalOptions;
use crate::api::Email;

/// Show the authenticated user.
///
/// Prints the account UUID, username and display name of the account the
/// access token belongs to.
#[derive(Args, Debug)]
pub struct UserCommand {}

impl UserCommand {
    /// Fetches `GET user` and writes it in the selected output format.
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let kit = global.client()?;
        let user = kit
            .fetch_current_user()
            .await
            .context("Failed to fetch the authenticated user")?;
        global.output().write(&user)
    }
}

/// List the email addresses of the authenticated user.
///
/// Only the first page returned by the API is shown.
#[derive(Args, Debug)]
pub struct EmailsCommand {
    /// Only show the primary address
    #[arg(long)]
    pub primary: bool,

    /// Only show confirmed addresses
    #[arg(long)]
    pub confirmed: bool,
}

impl EmailsCommand {
    /// Fetches `GET user/emails`, applies the filters and writes the result.
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let kit = global.client()?;
        let emails = kit
            .fetch_emails()
            .await
            .context("Failed to list email addresses")?;
        global.output().write(self.select(emails).as_slice())
    }

    /// Keeps the addresses matching `--primary` and `--confirmed`.
    fn select(&self, emails: Vec<Email>) -> Vec<Email> {
        emails
            .into_iter()
            .filter(|email| !self.primary || email.is_primary)
            .filter(|email| !self.confirmed || email.is_confirmed)
            .collect()
    }
}
