// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The ordered, deduplicated page buffer for the active filter.

use std::collections::HashSet;

use schedview_api::{ScheduleId, ScheduleSummary};

/// Position of the next page to fetch for the current epoch.
#[derive(Debug, Clone, Copy)]
pub struct PageCursor {
    /// Number of items to skip in the next fetch.
    pub offset: usize,
    /// Page size.
    pub limit: usize,
    /// No further pages exist for the current filter and epoch.
    ///
    /// Latches true the first time a fetch returns fewer than `limit` raw
    /// items; only a reset clears it.
    pub exhausted: bool,
}

/// The schedules currently loaded for the active filter.
///
/// Items keep arrival order and ids are unique. Favorite status is not
/// stored here; it is joined against the favorite set at read time.
#[derive(Debug)]
pub struct PaginatedCollection {
    items: Vec<ScheduleSummary>,
    seen: HashSet<ScheduleId>,
    cursor: PageCursor,
}

impl PaginatedCollection {
    /// Creates an empty collection with the given page size.
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            cursor: PageCursor {
                offset: 0,
                limit,
                exhausted: false,
            },
        }
    }

    /// The loaded items, in arrival order.
    #[must_use]
    pub fn items(&self) -> &[ScheduleSummary] {
        &self.items
    }

    /// Number of loaded items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current page cursor.
    #[must_use]
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Discards all items and rearms the cursor for a new epoch.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.seen.clear();
        self.cursor.offset = 0;
        self.cursor.exhausted = false;
    }

    /// Replaces the collection wholesale with page 0 of a new epoch.
    pub(crate) fn replace_with(&mut self, page: Vec<ScheduleSummary>) {
        self.clear();
        self.append_page(page);
    }

    /// Appends a fetched page, dropping ids already present.
    ///
    /// Exhaustion is recomputed from the raw page length before dedup, so
    /// dropped duplicates cannot mask true exhaustion; the offset likewise
    /// advances by the raw length, keeping the fetch window moving even
    /// when the backend returns overlapping pages.
    ///
    /// Returns the number of items actually appended.
    pub(crate) fn append_page(&mut self, page: Vec<ScheduleSummary>) -> usize {
        let raw = page.len();
        if raw < self.cursor.limit {
            self.cursor.exhausted = true;
        }

        let mut appended = 0;
        for item in page {
            if self.seen.insert(item.schedule_id) {
                self.items.push(item);
                appended += 1;
            } else {
                tracing::debug!(id = %item.schedule_id, "dropping duplicate schedule from page");
            }
        }
        self.cursor.offset += raw;
        appended
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil;
    use schedview_api::ScheduleSummary;

    use super::*;

    /// Test helper to create a schedule summary with the given id.
    fn summary(id: i64) -> ScheduleSummary {
        ScheduleSummary {
            schedule_id: id.into(),
            total_credits: 12,
            total_instructor_score: Some(4.0),
            num_sections: 3,
            meets_mon: true,
            meets_tue: false,
            meets_wed: true,
            meets_thu: false,
            meets_fri: false,
            meets_sat: false,
            earliest_start: civil::time(9, 0, 0, 0),
            latest_end: civil::time(14, 45, 0, 0),
            campus_pattern: "Annandale-only".to_string(),
            created_at: civil::date(2026, 1, 15).at(8, 0, 0, 0),
            sections: Vec::new(),
        }
    }

    fn page(ids: std::ops::RangeInclusive<i64>) -> Vec<ScheduleSummary> {
        ids.map(summary).collect()
    }

    fn ids(collection: &PaginatedCollection) -> Vec<i64> {
        collection.items().iter().map(|s| s.schedule_id.get()).collect()
    }

    #[test]
    fn collection_appends_in_arrival_order() {
        // Arrange
        let mut collection = PaginatedCollection::new(3);

        // Act
        collection.replace_with(page(1..=3));
        collection.append_page(page(4..=6));

        // Assert
        assert_eq!(ids(&collection), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(collection.cursor().offset, 6);
        assert!(!collection.cursor().exhausted);
    }

    #[test]
    fn collection_drops_duplicate_ids_exactly_once() {
        // Arrange
        let mut collection = PaginatedCollection::new(3);
        collection.replace_with(page(1..=3));

        // Act: overlapping page, as a backend under concurrent inserts
        // might return.
        let appended = collection.append_page(page(3..=5));

        // Assert
        assert_eq!(appended, 2);
        assert_eq!(ids(&collection), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn collection_offset_advances_by_raw_page_length() {
        // Arrange
        let mut collection = PaginatedCollection::new(3);
        collection.replace_with(page(1..=3));

        // Act: every item is a duplicate.
        let appended = collection.append_page(page(1..=3));

        // Assert: nothing appended, but the window still moved.
        assert_eq!(appended, 0);
        assert_eq!(collection.len(), 3);
        assert_eq!(collection.cursor().offset, 6);
    }

    #[test]
    fn collection_short_page_latches_exhaustion() {
        // Arrange
        let mut collection = PaginatedCollection::new(50);

        // Act
        collection.replace_with(page(1..=50));
        assert!(!collection.cursor().exhausted);
        collection.append_page(page(51..=80));

        // Assert
        assert_eq!(collection.len(), 80);
        assert!(collection.cursor().exhausted);
    }

    #[test]
    fn collection_dedup_does_not_mask_exhaustion() {
        // Arrange
        let mut collection = PaginatedCollection::new(3);
        collection.replace_with(page(1..=3));

        // Act: two raw items, both duplicates; raw length is what counts.
        collection.append_page(page(2..=3));

        // Assert
        assert!(collection.cursor().exhausted);
    }

    #[test]
    fn collection_reset_clears_exhaustion_and_items() {
        // Arrange
        let mut collection = PaginatedCollection::new(3);
        collection.replace_with(page(1..=2));
        assert!(collection.cursor().exhausted);

        // Act
        collection.replace_with(page(10..=12));

        // Assert
        assert_eq!(ids(&collection), vec![10, 11, 12]);
        assert_eq!(collection.cursor().offset, 3);
        assert!(!collection.cursor().exhausted);
    }
}
