// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! REST client for the schedule planner backend.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::module_name_repetitions)]

mod client;
mod config;
mod error;
mod http;
mod types;

pub use crate::client::ScheduleApi;
pub use crate::config::ApiConfig;
pub use crate::error::ApiError;
pub use crate::types::{
    FavoriteAck, HealthStatus, Meeting, Pager, ScheduleId, ScheduleQuery, ScheduleSummary,
    SectionDetail,
};
