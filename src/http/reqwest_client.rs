//
//  bitbucket-kit
//  http/reqwest_client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/17.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Default [`HttpClient`] backed by `reqwest`.

use async_trait::async_trait;
use reqwest::Client;

use super::{Headers, HttpClient, Method, Request, Response};
use crate::api::ApiError;

/// [`HttpClient`] implementation over a shared `reqwest::Client`.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    http: Client,
}

impl ReqwestClient {
    /// Creates a client with the crate's `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .build()?;
        Ok(Self { http })
    }

    /// Wraps an already configured `reqwest::Client`.
    ///
    /// Useful when the embedding application wants its own timeouts or proxies.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.http.request(method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();

        // Non-UTF-8 header values are dropped; nothing downstream reads them.
        let headers: Headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.to_string(), value.to_string()))
            })
            .collect();

        let body = response.bytes().await?.to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    #[tokio::test]
    async fn test_send_returns_status_headers_and_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/ping")
            .match_header("x-request-tag", "1")
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let mut headers = Headers::new();
        headers.insert("X-Request-Tag".to_string(), "1".to_string());
        let request = Request {
            method: Method::Get,
            url: Url::parse(&format!("{}/ping", server.url())).unwrap(),
            headers,
            body: None,
        };

        let client = ReqwestClient::new().unwrap();
        let response = client.send(request).await.unwrap();

        assert_eq!(response.status, 201);
        assert_eq!(response.text(), r#"{"ok":true}"#);
        assert_eq!(
            response.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status_is_not_a_transport_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/broken")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let request = Request {
            method: Method::Get,
            url: Url::parse(&format!("{}/broken", server.url())).unwrap(),
            headers: Headers::new(),
            body: None,
        };

        let response = ReqwestClient::new().unwrap().send(request).await.unwrap();
        assert_eq!(response.status, 500);
        assert!(!response.is_success());
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop a listener so the port is known to be closed.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let request = Request {
            method: Method::Get,
            url: Url::parse(&format!("http://127.0.0.1:{port}/user")).unwrap(),
            headers: Headers::new(),
            body: None,
        };

        let error = ReqwestClient::new().unwrap().send(request).await.unwrap_err();
        assert!(matches!(error, ApiError::Network(_)));
        assert!(error.is_transport());
    }
}
