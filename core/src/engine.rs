// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Orchestration of filter resets, incremental loads, and favorite toggles.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use async_trait::async_trait;
use schedview_api::{ApiError, Pager, ScheduleApi, ScheduleId, ScheduleQuery, ScheduleSummary};

use crate::collection::{PageCursor, PaginatedCollection};
use crate::error::SyncError;
use crate::favorites::FavoriteSet;
use crate::filter::FilterState;

/// Default page size for collection fetches.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Where the engine gets schedules and favorites from.
///
/// [`ScheduleApi`] is the production implementation; tests substitute
/// scripted sources. Futures are `?Send` because the engine itself is
/// single-threaded.
#[async_trait(?Send)]
pub trait ScheduleSource {
    /// Fetches one page of schedule summaries.
    async fn schedules(&self, query: &ScheduleQuery) -> Result<Vec<ScheduleSummary>, ApiError>;

    /// Fetches the ids of all favorited schedules.
    async fn favorite_ids(&self) -> Result<Vec<ScheduleId>, ApiError>;

    /// Marks a schedule as favorited.
    async fn add_favorite(&self, id: ScheduleId) -> Result<(), ApiError>;

    /// Removes a schedule from the favorites.
    async fn remove_favorite(&self, id: ScheduleId) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
impl ScheduleSource for ScheduleApi {
    async fn schedules(&self, query: &ScheduleQuery) -> Result<Vec<ScheduleSummary>, ApiError> {
        self.list_schedules(query).await
    }

    async fn favorite_ids(&self) -> Result<Vec<ScheduleId>, ApiError> {
        self.favorites().await
    }

    async fn add_favorite(&self, id: ScheduleId) -> Result<(), ApiError> {
        self.favorite(id).await.map(drop)
    }

    async fn remove_favorite(&self, id: ScheduleId) -> Result<(), ApiError> {
        self.unfavorite(id).await.map(drop)
    }
}

// Lets callers keep their own handle on a shared source (tests do).
#[async_trait(?Send)]
impl<S: ScheduleSource> ScheduleSource for Rc<S> {
    async fn schedules(&self, query: &ScheduleQuery) -> Result<Vec<ScheduleSummary>, ApiError> {
        (**self).schedules(query).await
    }

    async fn favorite_ids(&self) -> Result<Vec<ScheduleId>, ApiError> {
        (**self).favorite_ids().await
    }

    async fn add_favorite(&self, id: ScheduleId) -> Result<(), ApiError> {
        (**self).add_favorite(id).await
    }

    async fn remove_favorite(&self, id: ScheduleId) -> Result<(), ApiError> {
        (**self).remove_favorite(id).await
    }
}

/// Load state of the collection for the current epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// No load attempted yet.
    Idle,
    /// Page 0 (and, on first load, the favorite seed) is in flight.
    Loading,
    /// Collection usable; load-more permitted while not exhausted.
    Ready,
    /// Initial load failed; retry is manual.
    Failed,
}

#[derive(Debug)]
struct ViewState {
    filter: FilterState,
    favorites: FavoriteSet,
    collection: PaginatedCollection,
    phase: LoadPhase,
    epoch: u64,
    in_flight: bool,
    last_error: Option<String>,
}

/// The client-side synchronization engine.
///
/// Owns the filter, favorite set, and paginated collection, and is their
/// only mutation entry point; the presentation layer reads snapshots. The
/// engine is single-threaded and cooperative: shared state is mutated
/// fully between suspension points, and re-entrancy across awaits is
/// guarded by the epoch counter and the in-flight flag rather than locks.
///
/// Cloning is cheap and shares the underlying state, so one clone can sit
/// in an event handler while another drives loads.
#[derive(Debug)]
pub struct SyncEngine<S> {
    source: Rc<S>,
    state: Rc<RefCell<ViewState>>,
}

impl<S> Clone for SyncEngine<S> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            state: Rc::clone(&self.state),
        }
    }
}

impl<S: ScheduleSource> SyncEngine<S> {
    /// Creates an engine with the default filter and page size.
    pub fn new(source: S) -> Self {
        Self::with_filter(source, FilterState::default())
    }

    /// Creates an engine restoring filter state from a persisted query
    /// string (e.g. a bookmarked link).
    pub fn with_query(source: S, query: &str) -> Self {
        Self::with_filter(source, FilterState::parse_query(query))
    }

    fn with_filter(source: S, filter: FilterState) -> Self {
        Self {
            source: Rc::new(source),
            state: Rc::new(RefCell::new(ViewState {
                filter,
                favorites: FavoriteSet::new(),
                collection: PaginatedCollection::new(DEFAULT_PAGE_LIMIT),
                phase: LoadPhase::Idle,
                epoch: 0,
                in_flight: false,
                last_error: None,
            })),
        }
    }

    /// Overrides the page size. Takes effect from the next reset.
    #[must_use]
    pub fn with_page_limit(self, limit: usize) -> Self {
        {
            let mut st = self.state.borrow_mut();
            st.collection = PaginatedCollection::new(limit);
        }
        self
    }

    /// Starts a new epoch: discards the collection and fetches page 0.
    ///
    /// The first call also fetches the favorite seed concurrently; both
    /// must succeed for the view to become ready, and a failure in either
    /// surfaces as a load error for the whole view. A slow response from
    /// an older epoch is discarded when it eventually resolves.
    ///
    /// # Errors
    ///
    /// Returns the backend error when the load fails; the engine is left
    /// in [`LoadPhase::Failed`] awaiting a manual retry.
    pub async fn reset_and_load(&self) -> Result<(), SyncError> {
        let (epoch, query, need_seed) = {
            let mut st = self.state.borrow_mut();
            st.epoch += 1;
            st.in_flight = false; // anything older is now stale by epoch
            st.phase = LoadPhase::Loading;
            st.last_error = None;
            st.collection.clear();

            let limit = st.collection.cursor().limit;
            let pager = Pager::from((limit as i64, 0));
            let query = st.filter.to_schedule_query(pager);
            (st.epoch, query, !st.favorites.is_seeded())
        };
        tracing::debug!(epoch, "starting reset-and-load");

        let result = if need_seed {
            let (page, seed) = tokio::join!(
                self.source.schedules(&query),
                self.source.favorite_ids()
            );
            page.and_then(|p| seed.map(|s| (p, Some(s))))
        } else {
            self.source.schedules(&query).await.map(|p| (p, None))
        };

        let mut st = self.state.borrow_mut();
        if st.epoch != epoch {
            tracing::debug!(epoch, current = st.epoch, "discarding stale reset result");
            return Ok(());
        }

        match result {
            Ok((page, seed)) => {
                if let Some(ids) = seed {
                    st.favorites.seed(ids);
                }
                st.collection.replace_with(page);
                st.phase = LoadPhase::Ready;
                tracing::debug!(
                    epoch,
                    items = st.collection.len(),
                    exhausted = st.collection.cursor().exhausted,
                    "reset-and-load complete"
                );
                Ok(())
            }
            Err(e) => {
                st.phase = LoadPhase::Failed;
                st.last_error = Some(e.to_string());
                tracing::warn!(epoch, err = %e, "initial load failed");
                Err(e.into())
            }
        }
    }

    /// Pull-based load-more entry point; safe to call repeatedly.
    ///
    /// The call is dropped (not queued) unless the view is ready, the
    /// collection is not exhausted, and no fetch is already in flight for
    /// this epoch. Returns whether a page was fetched and applied.
    ///
    /// # Errors
    ///
    /// Returns the backend error when the fetch fails. The failure is
    /// non-fatal: items and exhaustion are untouched and a later call may
    /// try again.
    pub async fn request_more(&self) -> Result<bool, SyncError> {
        let (epoch, query) = {
            let mut st = self.state.borrow_mut();
            let cursor = st.collection.cursor();
            if st.phase != LoadPhase::Ready || cursor.exhausted || st.in_flight {
                tracing::trace!(
                    phase = ?st.phase,
                    exhausted = cursor.exhausted,
                    in_flight = st.in_flight,
                    "dropping load-more request"
                );
                return Ok(false);
            }
            st.in_flight = true;

            let pager = Pager::from((cursor.limit as i64, cursor.offset as i64));
            let query = st.filter.to_schedule_query(pager);
            (st.epoch, query)
        };

        let result = self.source.schedules(&query).await;

        let mut st = self.state.borrow_mut();
        if st.epoch != epoch {
            tracing::debug!(epoch, current = st.epoch, "discarding stale page");
            return Ok(false);
        }
        st.in_flight = false;

        match result {
            Ok(page) => {
                let appended = st.collection.append_page(page);
                tracing::debug!(
                    epoch,
                    appended,
                    total = st.collection.len(),
                    exhausted = st.collection.cursor().exhausted,
                    "appended page"
                );
                Ok(true)
            }
            Err(e) => {
                st.last_error = Some(e.to_string());
                tracing::warn!(epoch, err = %e, "load-more failed");
                Err(e.into())
            }
        }
    }

    /// Toggles the favorite state of a schedule.
    ///
    /// The membership flip applies immediately, before the backend
    /// confirms. On rejection the flip is reversed (rollback of whatever
    /// state is currently held, FIFO across overlapping toggles) and the
    /// error is returned; a confirmation is never force-applied, since the
    /// optimistic state is already the intended truth. Returns the target
    /// membership on success.
    ///
    /// # Errors
    ///
    /// Returns the backend error after rolling the flip back. The caller
    /// decides whether to retry; the engine never does.
    pub async fn toggle_favorite(&self, id: ScheduleId) -> Result<bool, SyncError> {
        let target = self.state.borrow_mut().favorites.toggle(id);
        tracing::debug!(%id, target, "optimistic favorite toggle");

        let result = if target {
            self.source.add_favorite(id).await
        } else {
            self.source.remove_favorite(id).await
        };

        match result {
            Ok(()) => Ok(target),
            Err(e) => {
                self.state.borrow_mut().favorites.rollback(id);
                tracing::warn!(%id, err = %e, "favorite toggle rejected, rolled back");
                Err(e.into())
            }
        }
    }

    /// Replaces the selected campuses and reloads from page 0.
    ///
    /// # Errors
    ///
    /// Propagates the reload error, as [`reset_and_load`](Self::reset_and_load).
    pub async fn set_campuses(&self, campuses: BTreeSet<String>) -> Result<(), SyncError> {
        self.state.borrow_mut().filter.campuses = campuses;
        self.reset_and_load().await
    }

    /// Replaces the selected times of day and reloads from page 0.
    ///
    /// # Errors
    ///
    /// Propagates the reload error, as [`reset_and_load`](Self::reset_and_load).
    pub async fn set_times(&self, times: BTreeSet<String>) -> Result<(), SyncError> {
        self.state.borrow_mut().filter.times = times;
        self.reset_and_load().await
    }

    /// Sets the favorites-only flag and reloads from page 0.
    ///
    /// # Errors
    ///
    /// Propagates the reload error, as [`reset_and_load`](Self::reset_and_load).
    pub async fn set_favorites_only(&self, favorites_only: bool) -> Result<(), SyncError> {
        self.state.borrow_mut().filter.favorites_only = favorites_only;
        self.reset_and_load().await
    }

    /// The current load phase.
    pub fn phase(&self) -> LoadPhase {
        self.state.borrow().phase
    }

    /// The current epoch (bumped on every reset).
    pub fn epoch(&self) -> u64 {
        self.state.borrow().epoch
    }

    /// A snapshot of the loaded items, in arrival order.
    pub fn items(&self) -> Vec<ScheduleSummary> {
        self.state.borrow().collection.items().to_vec()
    }

    /// Number of loaded items.
    pub fn len(&self) -> usize {
        self.state.borrow().collection.len()
    }

    /// Whether nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.state.borrow().collection.is_empty()
    }

    /// The current page cursor.
    pub fn cursor(&self) -> PageCursor {
        self.state.borrow().collection.cursor()
    }

    /// Whether no further pages exist for the current filter and epoch.
    pub fn is_exhausted(&self) -> bool {
        self.state.borrow().collection.cursor().exhausted
    }

    /// Whether the given schedule is favorited (joined at read time).
    pub fn is_favorite(&self, id: ScheduleId) -> bool {
        self.state.borrow().favorites.contains(id)
    }

    /// The favorited ids, in ascending order.
    pub fn favorite_ids(&self) -> Vec<ScheduleId> {
        let mut ids: Vec<_> = self.state.borrow().favorites.iter().collect();
        ids.sort_unstable();
        ids
    }

    /// A snapshot of the active filter.
    pub fn filter(&self) -> FilterState {
        self.state.borrow().filter.clone()
    }

    /// The encoded filter for URL mirroring / shareable links.
    pub fn query_string(&self) -> String {
        self.state.borrow().filter.query_string()
    }

    /// The most recent load error, if any.
    pub fn last_error(&self) -> Option<String> {
        self.state.borrow().last_error.clone()
    }
}
