// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Active filter state, mirrored to a navigable query string.

use std::collections::BTreeSet;

use schedview_api::{Pager, ScheduleQuery};

/// Campuses the backend knows about.
pub const CAMPUSES: [&str; 3] = ["Annandale", "Alexandria", "Online"];

/// Times of day the backend knows about.
pub const TIMES: [&str; 3] = ["Morning", "Afternoon", "Evening"];

/// The active schedule filter.
///
/// The persisted query-string representation never carries an empty
/// dimension: zero selected values encode as the parameter being absent,
/// and an absent parameter decodes back to the full value set. This keeps
/// an unreachable empty-filter state from being bookmarked.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FilterState {
    /// Selected campuses.
    pub campuses: BTreeSet<String>,
    /// Selected times of day.
    pub times: BTreeSet<String>,
    /// Only show favorited schedules.
    #[serde(default)]
    pub favorites_only: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            campuses: Self::all_campuses(),
            times: Self::all_times(),
            favorites_only: false,
        }
    }
}

impl FilterState {
    /// The full campus vocabulary.
    pub fn all_campuses() -> BTreeSet<String> {
        CAMPUSES.iter().map(ToString::to_string).collect()
    }

    /// The full time-of-day vocabulary.
    pub fn all_times() -> BTreeSet<String> {
        TIMES.iter().map(ToString::to_string).collect()
    }

    /// Restores filter state from query pairs.
    ///
    /// Repeated `campuses`/`times` parameters accumulate; dimensions with
    /// no parameter at all expand to the full default set.
    pub fn from_query_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut campuses = BTreeSet::new();
        let mut times = BTreeSet::new();
        let mut favorites_only = false;

        for (key, value) in pairs {
            match key {
                "campuses" => {
                    campuses.insert(value.to_string());
                }
                "times" => {
                    times.insert(value.to_string());
                }
                "favorites_only" => favorites_only = value == "true",
                _ => {}
            }
        }

        Self {
            campuses: if campuses.is_empty() {
                Self::all_campuses()
            } else {
                campuses
            },
            times: if times.is_empty() {
                Self::all_times()
            } else {
                times
            },
            favorites_only,
        }
    }

    /// Restores filter state from an encoded query string.
    ///
    /// A leading `?` is tolerated; parameters outside the filter
    /// vocabulary are ignored. Values are drawn from fixed vocabularies,
    /// so no percent-decoding is performed.
    pub fn parse_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        Self::from_query_pairs(
            query
                .split('&')
                .filter(|part| !part.is_empty())
                .map(|part| part.split_once('=').unwrap_or((part, ""))),
        )
    }

    /// Encodes the filter as query pairs for URL mirroring.
    ///
    /// Empty dimensions are skipped so that "nothing selected" persists
    /// as "all values implied"; `favorites_only` appears only when set.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for campus in &self.campuses {
            pairs.push(("campuses".to_string(), campus.clone()));
        }
        for time in &self.times {
            pairs.push(("times".to_string(), time.clone()));
        }
        if self.favorites_only {
            pairs.push(("favorites_only".to_string(), "true".to_string()));
        }
        pairs
    }

    /// Encodes the filter as a query string suitable for a shareable link.
    pub fn query_string(&self) -> String {
        let pairs = self.to_query_pairs();
        let mut out = String::new();
        for (i, (key, value)) in pairs.iter().enumerate() {
            if i > 0 {
                out.push('&');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }

    /// Translates the filter into a backend query for the given page window.
    ///
    /// A dimension that selects the full vocabulary is sent unconstrained.
    pub(crate) fn to_schedule_query(&self, pager: Pager) -> ScheduleQuery {
        let campuses = if self.campuses == Self::all_campuses() {
            Vec::new()
        } else {
            self.campuses.iter().cloned().collect()
        };
        let times = if self.times == Self::all_times() {
            Vec::new()
        } else {
            self.times.iter().cloned().collect()
        };

        ScheduleQuery {
            favorites_only: self.favorites_only,
            campuses,
            times,
            pager: Some(pager),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn filter_round_trips_explicit_selection() {
        // Arrange
        let filter = FilterState {
            campuses: set(&["Online"]),
            times: set(&["Morning", "Evening"]),
            favorites_only: false,
        };

        // Act
        let decoded = FilterState::parse_query(&filter.query_string());

        // Assert
        assert_eq!(decoded, filter);
    }

    #[test]
    fn filter_empty_dimension_encodes_absent_and_decodes_to_all() {
        // Arrange
        let filter = FilterState {
            campuses: BTreeSet::new(),
            times: set(&["Morning"]),
            favorites_only: false,
        };

        // Act
        let encoded = filter.query_string();
        let decoded = FilterState::parse_query(&encoded);

        // Assert: no explicit campuses value was persisted, yet the
        // decoded state selects every campus.
        assert!(!encoded.contains("campuses"));
        assert_eq!(decoded.campuses, FilterState::all_campuses());
        assert_eq!(decoded.times, set(&["Morning"]));
    }

    #[test]
    fn filter_absent_query_decodes_to_defaults() {
        let decoded = FilterState::parse_query("");
        assert_eq!(decoded, FilterState::default());
    }

    #[test]
    fn filter_favorites_only_persists_only_when_set() {
        let mut filter = FilterState::default();
        assert!(!filter.query_string().contains("favorites_only"));

        filter.favorites_only = true;
        let decoded = FilterState::parse_query(&filter.query_string());
        assert!(decoded.favorites_only);
    }

    #[test]
    fn filter_parse_tolerates_leading_question_mark_and_noise() {
        let decoded = FilterState::parse_query("?campuses=Online&page=3&times=Evening");
        assert_eq!(decoded.campuses, set(&["Online"]));
        assert_eq!(decoded.times, set(&["Evening"]));
    }

    #[test]
    fn filter_full_vocabulary_queries_unconstrained() {
        // Arrange
        let filter = FilterState::default();

        // Act
        let query = filter.to_schedule_query((50, 0).into());

        // Assert
        assert!(query.campuses.is_empty());
        assert!(query.times.is_empty());
        assert!(!query.favorites_only);
    }

    #[test]
    fn filter_subset_queries_with_values() {
        let filter = FilterState {
            campuses: set(&["Alexandria", "Online"]),
            times: FilterState::all_times(),
            favorites_only: true,
        };

        let query = filter.to_schedule_query((50, 0).into());

        assert_eq!(query.campuses, vec!["Alexandria", "Online"]);
        assert!(query.times.is_empty());
        assert!(query.favorites_only);
    }
}
