//
//  bitbucket-kit
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Bitbucket Client
//!
//! [`BitbucketKit`] ties a [`Configuration`] to an [`HttpClient`] and exposes the
//! user endpoints in two styles:
//!
//! - async: [`fetch_current_user`](BitbucketKit::fetch_current_user) and
//!   [`fetch_emails`](BitbucketKit::fetch_emails) resolve to a `Result`;
//! - callback: [`me`](BitbucketKit::me) and [`emails`](BitbucketKit::emails)
//!   spawn the request and hand the `Result` to a completion, returning a
//!   cancelable [`Task`].
//!
//! Either way each call sends one request and resolves exactly once.

use std::fmt;
use std::sync::Arc;

use super::common::ApiError;
use super::task::Task;
use super::user::{Email, EmailListPayload, User, UserPayload, UserRouter};
use crate::config::Configuration;
use crate::http::{HttpClient, ReqwestClient};
use crate::router::load;

/// Client for the Bitbucket Cloud user API.
///
/// Cloning is cheap: clones share the HTTP client and carry their own copy of the
/// configuration.
///
/// # Example
///
/// ```rust,no_run
/// use bitbucket_kit::{BitbucketKit, Configuration};
///
/// # async fn example() -> Result<(), bitbucket_kit::api::ApiError> {
/// let kit = BitbucketKit::new(Configuration::new("your-token"))?;
///
/// let task = kit.me(|result| match result {
///     Ok(user) => println!("Hello, {}", user.name.unwrap_or_default()),
///     Err(e) => eprintln!("Lookup failed: {}", e),
/// });
/// task.join().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BitbucketKit {
    configuration: Configuration,
    http: Arc<dyn HttpClient>,
}

impl BitbucketKit {
    /// Creates a client that sends requests through [`ReqwestClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(configuration: Configuration) -> Result<Self, ApiError> {
        Ok(Self::with_client(configuration, Arc::new(ReqwestClient::new()?)))
    }

    /// Creates a client that sends requests through `http`.
    pub fn with_client(configuration: Configuration, http: Arc<dyn HttpClient>) -> Self {
        Self {
            configuration,
            http,
        }
    }

    /// The configuration every request is built from.
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Fetches the authenticated user (`GET user`).
    ///
    /// Transport and decode errors are returned unchanged.
    pub async fn fetch_current_user(&self) -> Result<User, ApiError> {
        let router = UserRouter::ReadAuthenticatedUser(self.configuration.clone());
        let payload: UserPayload = load(&router, self.http.as_ref()).await?;
        Ok(User::from_wire(payload))
    }

    /// Fetches the email addresses of the authenticated user (`GET user/emails`).
    ///
    /// Only the first page of the listing is read.
    pub async fn fetch_emails(&self) -> Result<Vec<Email>, ApiError> {
        let router = UserRouter::ReadEmails(self.configuration.clone());
        let payload: EmailListPayload = load(&router, self.http.as_ref()).await?;
        Ok(payload.into_emails())
    }

    /// Fetches the authenticated user and passes the result to `completion`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn me<F>(&self, completion: F) -> Task
    where
        F: FnOnce(Result<User, ApiError>) + Send + 'static,
    {
        let kit = self.clone();
        Task::spawn(async move { completion(kit.fetch_current_user().await) })
    }

    /// Fetches the user's email addresses and passes the result to `completion`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn emails<F>(&self, completion: F) -> Task
    where
        F: FnOnce(Result<Vec<Email>, ApiError>) + Send + 'static,
    {
        let kit = self.clone();
        Task::spawn(async move { completion(kit.fetch_emails().await) })
    }
}

impl fmt::Debug for BitbucketKit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitbucketKit")
            .field("configuration", &self.configuration)
            .finish_non_exhaustive()
    }
}
