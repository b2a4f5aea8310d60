// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Client-side synchronization engine for the schedule browser.
//!
//! The engine keeps an in-memory, paginated view of the remote schedule
//! collection consistent under filter changes (reset and restart
//! pagination), incremental load-more fetches (append without
//! duplication), optimistic favorite toggles (apply instantly, roll back
//! on failure), and overlapping asynchronous completions (stale results
//! are discarded by epoch).

mod collection;
mod engine;
mod error;
mod favorites;
mod filter;

pub use crate::collection::{PageCursor, PaginatedCollection};
pub use crate::engine::{DEFAULT_PAGE_LIMIT, LoadPhase, ScheduleSource, SyncEngine};
pub use crate::error::SyncError;
pub use crate::favorites::FavoriteSet;
pub use crate::filter::{CAMPUSES, FilterState, TIMES};
