//
//  bitbucket-kit
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Bitbucket Kit
//!
//! A small, typed client for the user endpoints of the Bitbucket Cloud REST API v2.0,
//! together with the `bbkit` command-line tool built on top of it.
//!
//! ## Overview
//!
//! Endpoints are described declaratively through the [`router::Router`] trait: each
//! endpoint variant knows its HTTP method, path, parameter encoding and the
//! [`Configuration`] it runs with. A router is turned into an [`http::Request`],
//! dispatched through an injected [`http::HttpClient`] and its JSON body decoded into
//! a wire payload, which is then mapped onto a lenient domain model.
//!
//! ## Module Structure
//!
//! - [`api`]: The [`BitbucketKit`] client, user/email models and the error type
//! - [`router`]: Declarative endpoint descriptions and the generic `load` step
//! - [`http`]: The HTTP client seam and its `reqwest` implementation
//! - [`config`]: Request configuration and the on-disk settings file
//! - [`auth`]: Token input helpers and keyring storage
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Table and JSON output formatting
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use bitbucket_kit::{BitbucketKit, Configuration};
//!
//! # async fn example() -> Result<(), bitbucket_kit::api::ApiError> {
//! let kit = BitbucketKit::new(Configuration::new("my-access-token"))?;
//!
//! let user = kit.fetch_current_user().await?;
//! println!("Logged in as {}", user.login.unwrap_or_default());
//!
//! for email in kit.fetch_emails().await? {
//!     println!("{:?} (primary: {})", email.email, email.is_primary);
//! }
//! # Ok(())
//! # }
//! ```

/// Bitbucket API client, models and errors.
///
/// Contains the [`BitbucketKit`] façade, the user and email wire payloads with
/// their domain models, and the [`api::ApiError`] taxonomy.
pub mod api;

/// Declarative endpoint routing.
///
/// The [`router::Router`] trait describes an endpoint; [`router::load`] executes it.
pub mod router;

/// HTTP transport seam.
///
/// Provides the [`http::HttpClient`] trait and the default `reqwest`-backed client.
pub mod http;

/// Configuration management.
///
/// Holds the immutable per-request [`Configuration`] and the persisted
/// [`config::Settings`] file:
/// - Linux: `~/.config/bbkit/config.toml`
/// - macOS: `~/Library/Application Support/bbkit/config.toml`
/// - Windows: `%APPDATA%\bbkit\config.toml`
pub mod config;

/// Access token handling.
///
/// Reading tokens from stdin, format validation and keyring storage.
pub mod auth;

/// Command-line interface definitions.
pub mod cli;

/// Output formatting for the CLI (table and JSON).
pub mod output;

pub use api::BitbucketKit;
pub use cli::Cli;
pub use config::Configuration;

/// Application name, used for the binary, the keyring service and config paths.
pub const APP_NAME: &str = "bbkit";

/// Crate version, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root of the Bitbucket Cloud REST API v2.0.
///
/// Used as the default API endpoint of every [`Configuration`].
pub const BITBUCKET_BASE_URL: &str = "https://bitbucket.org/api/2.0";

/// Root of the Bitbucket Cloud web interface.
pub const BITBUCKET_WEB_URL: &str = "https://bitbucket.org";

/// Exit codes for the CLI.
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// Run `bbkit auth login` or pass `--token`.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded.
    pub const RATE_LIMIT: i32 = 32;
}
