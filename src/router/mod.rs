//
//  bitbucket-kit
//  router/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Routing
//!
//! A [`Router`] is a declarative description of one REST endpoint: its HTTP
//! method, path, parameter encoding and parameters, plus the [`Configuration`]
//! it runs with. Endpoint groups are modelled as closed enums implementing the
//! trait, so adding an endpoint forces every `match` in the mapping to be updated.
//!
//! ## Flow
//!
//! ```text
//! Router ──request()──▶ Request ──HttpClient::send──▶ Response ──load()──▶ T
//! ```
//!
//! - [`Router::request`] is pure: the same variant always yields the same request.
//! - [`load`] performs exactly one exchange and decodes the JSON body into `T`.
//!
//! ## Example
//!
//! ```rust
//! use bitbucket_kit::Configuration;
//! use bitbucket_kit::api::UserRouter;
//! use bitbucket_kit::router::Router;
//!
//! let router = UserRouter::ReadAuthenticatedUser(Configuration::new("token"));
//! let request = router.request().unwrap();
//!
//! assert_eq!(request.url.as_str(), "https://bitbucket.org/api/2.0/user");
//! assert_eq!(request.header("Authorization"), Some("Bearer token"));
//! ```

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use url::Url;

use crate::api::ApiError;
use crate::config::Configuration;
use crate::http::{Headers, HttpClient, Method, Request};

/// Endpoint parameters, ordered by name so encoding is deterministic.
pub type Params = BTreeMap<String, String>;

/// How an endpoint's parameters are put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpEncoding {
    /// Appended to the URL as a query string.
    Url,
    /// Sent as an `application/x-www-form-urlencoded` body.
    Form,
    /// Sent as a JSON object body.
    Json,
}

/// Declarative description of a REST endpoint.
pub trait Router {
    /// Configuration the request runs with.
    fn configuration(&self) -> &Configuration;

    /// HTTP method of the endpoint.
    fn method(&self) -> Method;

    /// How [`params`](Router::params) are encoded.
    fn encoding(&self) -> HttpEncoding;

    /// Path relative to the API root, without a leading slash.
    fn path(&self) -> &str;

    /// Parameters sent with the request.
    fn params(&self) -> Params;

    /// API root the path is resolved against.
    fn base_url(&self) -> &str {
        self.configuration().api_endpoint()
    }

    /// Builds the request for this endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] when the configured API root is not a
    /// valid absolute URL. This is a configuration mistake, not a runtime
    /// condition worth retrying.
    fn request(&self) -> Result<Request, ApiError> {
        let mut url = join_url(self.base_url(), self.path())?;
        let params = self.params();

        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        if let Some(authorization) = self.configuration().authorization_header() {
            headers.insert("Authorization".to_string(), authorization);
        }

        let body = match self.encoding() {
            HttpEncoding::Url => {
                if !params.is_empty() {
                    url.query_pairs_mut().extend_pairs(params.iter());
                }
                None
            }
            HttpEncoding::Form => {
                headers.insert(
                    "Content-Type".to_string(),
                    "application/x-www-form-urlencoded".to_string(),
                );
                let encoded = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(params.iter())
                    .finish();
                Some(encoded.into_bytes())
            }
            HttpEncoding::Json => {
                headers.insert("Content-Type".to_string(), "application/json".to_string());
                Some(serde_json::to_vec(&params)?)
            }
        };

        Ok(Request {
            method: self.method(),
            url,
            headers,
            body,
        })
    }
}

/// Joins an API root and a relative path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> Result<Url, ApiError> {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    Ok(Url::parse(&format!("{base}/{path}"))?)
}

/// Executes `router` against `client` and decodes the body into `T`.
///
/// One request is sent. The outcome is exactly one of:
///
/// - `Ok(T)` - 2xx response whose body decodes into `T`
/// - [`ApiError::InvalidUrl`] - the request could not be constructed
/// - a transport error - the client failed, or the status was not 2xx
///   (see [`ApiError::from_status`])
/// - [`ApiError::Decode`] - 2xx response with a body that does not match `T`
///
/// # Example
///
/// ```rust,no_run
/// use bitbucket_kit::Configuration;
/// use bitbucket_kit::api::{UserPayload, UserRouter};
/// use bitbucket_kit::http::ReqwestClient;
/// use bitbucket_kit::router::load;
///
/// # async fn example() -> Result<(), bitbucket_kit::api::ApiError> {
/// let client = ReqwestClient::new()?;
/// let router = UserRouter::ReadAuthenticatedUser(Configuration::new("token"));
/// let payload: UserPayload = load(&router, &client).await?;
/// # Ok(())
/// # }
/// ```
pub async fn load<R, T>(router: &R, client: &dyn HttpClient) -> Result<T, ApiError>
where
    R: Router + ?Sized,
    T: DeserializeOwned,
{
    let request = router.request()?;
    tracing::debug!("{} {}", request.method, request.url);

    let response = client.send(request).await?;
    tracing::debug!("Response status {}", response.status);

    if !response.is_success() {
        return Err(ApiError::from_status(response.status, &response.text()));
    }

    serde_json::from_slice(&response.body).map_err(|err| {
        tracing::debug!("Failed to decode response body: {}", err);
        ApiError::Decode(err)
    })
}
