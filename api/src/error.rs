// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

use crate::types::ScheduleId;

/// Schedule backend client errors.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure or unexpected HTTP status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend does not know the given schedule id (404 on a
    /// favorite/unfavorite operation).
    #[error("schedule not found: {0}")]
    NotFound(ScheduleId),

    /// Response body did not match the expected shape.
    #[error("invalid server response: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}
