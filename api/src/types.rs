// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use jiff::civil::{DateTime, Time};

/// Identifier of a generated schedule.
///
/// Ids are assigned by the backend and stable for the lifetime of the
/// generated collection; item identity is the id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct ScheduleId(i64);

impl ScheduleId {
    /// Creates a new `ScheduleId` from a raw id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for ScheduleId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Pagination with a limit and an offset.
#[derive(Debug, Clone, Copy)]
pub struct Pager {
    /// The maximum number of items to return.
    pub limit: i64,

    /// The number of items to skip before starting to collect the result set.
    pub offset: i64,
}

impl From<(i64, i64)> for Pager {
    fn from((limit, offset): (i64, i64)) -> Self {
        Pager { limit, offset }
    }
}

/// Query for one page of the schedule collection.
#[derive(Debug, Clone, Default)]
pub struct ScheduleQuery {
    /// Only return favorited schedules.
    pub favorites_only: bool,
    /// Campuses to include; empty means unconstrained.
    pub campuses: Vec<String>,
    /// Times of day to include; empty means unconstrained.
    pub times: Vec<String>,
    /// Page window.
    pub pager: Option<Pager>,
}

impl ScheduleQuery {
    /// Flattens the query into URL parameters.
    ///
    /// `favorites_only` is appended only when set, matching what the
    /// backend expects; campus and time dimensions become repeated
    /// parameters.
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if self.favorites_only {
            params.push(("favorites_only", "true".to_string()));
        }
        if let Some(pager) = self.pager {
            params.push(("limit", pager.limit.to_string()));
            params.push(("offset", pager.offset.to_string()));
        }
        for campus in &self.campuses {
            params.push(("campuses", campus.clone()));
        }
        for time in &self.times {
            params.push(("times", time.clone()));
        }
        params
    }
}

/// A meeting time for a section.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Meeting {
    /// Day of the week (e.g., "Mon").
    pub day_of_week: String,
    /// Meeting start time.
    pub start_time: Time,
    /// Meeting end time.
    pub end_time: Time,
    /// Campus where the meeting takes place.
    pub campus: String,
}

/// Section information including instructor and meetings.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SectionDetail {
    /// Subject code (e.g., "CSC").
    pub subject_code: String,
    /// Course number within the subject.
    pub course_number: i32,
    /// Section code.
    pub section_code: String,
    /// Course title.
    pub course_title: String,
    /// Credit hours.
    pub credits: i32,
    /// Instructor name, if assigned.
    pub instructor_name: Option<String>,
    /// Instructor rating, if known.
    pub instructor_rating: Option<f64>,
    /// Meeting times for the section.
    pub meetings: Vec<Meeting>,
}

/// Schedule summary with full section details.
///
/// Immutable once fetched; favorite status is not part of the summary and
/// is looked up against the favorite set at read time.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ScheduleSummary {
    /// Identifier of the schedule.
    pub schedule_id: ScheduleId,
    /// Total credit hours across sections.
    pub total_credits: i32,
    /// Average instructor rating, if any section has one.
    pub total_instructor_score: Option<f64>,
    /// Number of sections in the schedule.
    pub num_sections: i32,
    /// Whether the schedule meets on Monday.
    pub meets_mon: bool,
    /// Whether the schedule meets on Tuesday.
    pub meets_tue: bool,
    /// Whether the schedule meets on Wednesday.
    pub meets_wed: bool,
    /// Whether the schedule meets on Thursday.
    pub meets_thu: bool,
    /// Whether the schedule meets on Friday.
    pub meets_fri: bool,
    /// Whether the schedule meets on Saturday.
    pub meets_sat: bool,
    /// Earliest meeting start across the week.
    pub earliest_start: Time,
    /// Latest meeting end across the week.
    pub latest_end: Time,
    /// Campus pattern (e.g., "Annandale-only", "Online-only", "Multi-campus").
    pub campus_pattern: String,
    /// When the schedule was generated.
    pub created_at: DateTime,
    /// Sections composing the schedule.
    pub sections: Vec<SectionDetail>,
}

/// Confirmation returned by favorite and unfavorite operations.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct FavoriteAck {
    /// Identifier of the affected schedule.
    pub schedule_id: ScheduleId,
    /// When the schedule was favorited; absent for unfavorite.
    #[serde(default)]
    pub favorited_at: Option<DateTime>,
    /// Human-readable confirmation message.
    #[serde(default)]
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct HealthStatus {
    /// Liveness status reported by the backend.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_params_skip_favorites_only_when_unset() {
        let query = ScheduleQuery {
            favorites_only: false,
            campuses: vec!["Online".to_string()],
            times: Vec::new(),
            pager: Some((50, 0).into()),
        };

        let params = query.to_params();

        assert!(params.iter().all(|(k, _)| *k != "favorites_only"));
        assert!(params.contains(&("limit", "50".to_string())));
        assert!(params.contains(&("offset", "0".to_string())));
        assert!(params.contains(&("campuses", "Online".to_string())));
    }

    #[test]
    fn query_params_repeat_dimension_values() {
        let query = ScheduleQuery {
            favorites_only: true,
            campuses: Vec::new(),
            times: vec!["Morning".to_string(), "Evening".to_string()],
            pager: None,
        };

        let params = query.to_params();

        let times: Vec<_> = params.iter().filter(|(k, _)| *k == "times").collect();
        assert_eq!(times.len(), 2);
        assert!(params.contains(&("favorites_only", "true".to_string())));
    }
}
