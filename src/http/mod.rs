//
//  bitbucket-kit
//  http/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport
//!
//! The library never talks to the network directly. Requests built by a
//! [`Router`](crate::router::Router) are handed to an [`HttpClient`], which sends
//! them and returns the raw status, headers and body bytes. Decoding happens
//! afterwards in [`load`](crate::router::load).
//!
//! [`ReqwestClient`] is the default implementation. Tests and embedders can supply
//! their own client to stub the network.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use bitbucket_kit::http::{HttpClient, ReqwestClient};
//!
//! # fn example() -> Result<(), bitbucket_kit::api::ApiError> {
//! let client: Arc<dyn HttpClient> = Arc::new(ReqwestClient::new()?);
//! # Ok(())
//! # }
//! ```

mod reqwest_client;

pub use reqwest_client::*;

use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;
use url::Url;

use crate::api::ApiError;

/// Request and response headers, keyed by header name.
pub type Headers = BTreeMap<String, String>;

/// HTTP methods an endpoint can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// The method name as it appears on the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully formed request, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Absolute URL, including any query string
    pub url: Url,
    /// Request headers
    pub headers: Headers,
    /// Encoded body, if the endpoint sends one
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Looks up a header by name, ignoring ASCII case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Raw response returned by an [`HttpClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: Headers,
    /// Undecoded body bytes
    pub body: Vec<u8>,
}

impl Response {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends requests over the network.
///
/// Implementations perform exactly one exchange per call: no retries, no caching.
/// A non-2xx status is *not* an error at this layer; it is returned as a normal
/// [`Response`] and mapped by the caller. Only transport failures (DNS, refused
/// connections, broken bodies) are reported as `Err`.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends `request` and collects the full response body.
    async fn send(&self, request: Request) -> Result<Response, ApiError>;
}
