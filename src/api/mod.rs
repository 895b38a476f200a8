//
//  bitbucket-kit
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to the user endpoints of the Bitbucket Cloud REST API v2.0.
//!
//! ## Architecture
//!
//! - [`client`]: The [`BitbucketKit`] façade (async and callback styles)
//! - [`user`]: Wire payloads, domain models and the [`UserRouter`] endpoints
//! - [`task`]: Cancelable [`Task`] handle for callback-style calls
//! - [`common`]: [`ApiError`] and lenient decoding helpers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bitbucket_kit::api::BitbucketKit;
//! use bitbucket_kit::Configuration;
//!
//! # async fn example() -> Result<(), bitbucket_kit::api::ApiError> {
//! let kit = BitbucketKit::new(Configuration::new("your-token"))?;
//! let emails = kit.fetch_emails().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every call resolves to exactly one [`ApiError`] or one value. HTTP statuses map
//! onto variants the same way for every endpoint:
//!
//! - `AuthFailed`: 401 Unauthorized
//! - `Forbidden`: 403 Forbidden
//! - `NotFound`: 404 Not Found
//! - `RateLimited`: 429 Too Many Requests
//! - `ServerError`: 5xx Server Errors

pub mod client;

pub mod common;

pub mod task;

pub mod user;

pub use client::BitbucketKit;
pub use common::ApiError;
pub use task::Task;
pub use user::{
    Email, EmailListPayload, EmailPayload, User, UserPayload, UserRouter, UNKNOWN_USER_ID,
};
