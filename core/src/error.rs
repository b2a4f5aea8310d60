// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

use schedview_api::ApiError;

/// Synchronization engine errors.
///
/// Every failure leaves the engine in a well-defined, continuable state;
/// none is fatal to the process.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// A backend request failed.
    #[error("backend request failed: {0}")]
    Backend(#[from] ApiError),
}

impl SyncError {
    /// Returns the underlying backend error, if any.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Backend(e) => Some(e),
        }
    }
}
