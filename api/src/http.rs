// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with timeout and status-code handling.

use reqwest::{Client, Method, RequestBuilder, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// HTTP client for schedule backend operations.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Builds a request for the given method and URL.
    pub fn build_request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client.request(method, url)
    }

    /// Executes a request, mapping any non-2xx status to an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns an error status code.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = self.send(req).await?;

        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(Self::status_error(resp).await)
        }
    }

    /// Executes a request, mapping only transport failures to errors.
    ///
    /// Callers that need to distinguish specific status codes (e.g. 404 on
    /// a favorite operation) inspect the returned response themselves.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent.
    pub async fn send(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        Ok(req.send().await?)
    }

    /// Converts an error response into an [`ApiError`], keeping the body text.
    pub async fn status_error(resp: Response) -> ApiError {
        let status = resp.status();
        let text = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response".to_string());
        ApiError::Http(format!("{status}: {text}"))
    }
}
