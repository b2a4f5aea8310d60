// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Typed client for the schedule backend REST surface.

use std::sync::Arc;

use reqwest::{Method, StatusCode};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::http::HttpClient;
use crate::types::{FavoriteAck, HealthStatus, ScheduleId, ScheduleQuery, ScheduleSummary};

/// Client for the schedule planner backend.
///
/// # Example
///
/// ```ignore
/// use schedview_api::{ApiConfig, ScheduleApi, ScheduleQuery};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ApiConfig {
///     base_url: "http://localhost:8000".to_string(),
///     ..Default::default()
/// };
///
/// let api = ScheduleApi::new(config)?;
/// let page = api.list_schedules(&ScheduleQuery::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleApi {
    http: Arc<HttpClient>,
    config: ApiConfig,
}

impl ScheduleApi {
    /// Creates a new schedule backend client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// Fetches one page of schedule summaries.
    ///
    /// The returned sequence is ordered by the backend and at most
    /// `query.pager.limit` items long.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn list_schedules(
        &self,
        query: &ScheduleQuery,
    ) -> Result<Vec<ScheduleSummary>, ApiError> {
        let url = self.endpoint("/api/schedules");
        tracing::debug!(?query, "fetching schedules");

        let req = self
            .http
            .build_request(Method::GET, &url)
            .query(&query.to_params());
        let resp = self.http.execute(req).await?;

        resp.json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Fetches the ids of all favorited schedules.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn favorites(&self) -> Result<Vec<ScheduleId>, ApiError> {
        let url = self.endpoint("/api/favorites");
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;

        resp.json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    /// Favorites a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the backend does not know the id,
    /// or another error if the request fails.
    pub async fn favorite(&self, id: ScheduleId) -> Result<FavoriteAck, ApiError> {
        self.favorite_op(Method::POST, id).await
    }

    /// Unfavorites a schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the schedule is not currently
    /// favorited, or another error if the request fails.
    pub async fn unfavorite(&self, id: ScheduleId) -> Result<FavoriteAck, ApiError> {
        self.favorite_op(Method::DELETE, id).await
    }

    /// Checks backend liveness.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = self.endpoint("/api/health");
        let resp = self
            .http
            .execute(self.http.build_request(Method::GET, &url))
            .await?;

        resp.json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn favorite_op(&self, method: Method, id: ScheduleId) -> Result<FavoriteAck, ApiError> {
        let url = self.endpoint(&format!("/api/favorite/{id}"));
        let resp = self.http.send(self.http.build_request(method, &url)).await?;

        match resp.status() {
            status if status.is_success() => resp
                .json()
                .await
                .map_err(|e| ApiError::InvalidResponse(e.to_string())),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(id)),
            _ => Err(HttpClient::status_error(resp).await),
        }
    }

    /// Builds full URL from an endpoint path.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}
