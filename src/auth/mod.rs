//
//  bitbucket-kit
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Access tokens for Bitbucket Cloud are plain bearer tokens: OAuth access tokens,
//! repository/workspace access tokens and API tokens all travel in the
//! `Authorization: Bearer` header built by [`Configuration`](crate::Configuration).
//!
//! ## Module Structure
//!
//! - [`token`]: Reading tokens from stdin and format validation
//! - [`keyring`]: Secure token storage using the system keyring
//!
//! ## Example
//!
//! ```rust,no_run
//! use bitbucket_kit::auth::{KeyringStore, CLOUD_HOST};
//! use bitbucket_kit::Configuration;
//!
//! fn configuration() -> anyhow::Result<Configuration> {
//!     let token = KeyringStore::new().get(CLOUD_HOST)?.unwrap_or_default();
//!     Ok(Configuration::new(token))
//! }
//! ```

mod keyring;
mod token;

pub use keyring::*;
pub use token::*;

/// Keyring account under which the Bitbucket Cloud token is stored.
pub const CLOUD_HOST: &str = "bitbucket.org";
