// SPDX-FileCopyrightText: 2026 Schedview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Optimistically mutated favorite membership.

use std::collections::HashSet;

use schedview_api::ScheduleId;

/// The set of favorited schedule ids.
///
/// Seeded once from the backend, then flipped optimistically by toggle
/// operations. Membership reflects best-known server state; during an
/// in-flight toggle it is transiently ahead of the server, and a rejected
/// toggle is undone by the [`rollback`](Self::rollback) transition.
#[derive(Debug, Default)]
pub struct FavoriteSet {
    ids: HashSet<ScheduleId>,
    seeded: bool,
}

impl FavoriteSet {
    /// Creates an empty, unseeded set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the initial backend seed has been applied.
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Whether the given schedule is favorited.
    #[must_use]
    pub fn contains(&self, id: ScheduleId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of favorited schedules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no schedule is favorited.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over the favorited ids in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = ScheduleId> + '_ {
        self.ids.iter().copied()
    }

    /// Replaces the membership with the backend's answer.
    pub(crate) fn seed(&mut self, ids: impl IntoIterator<Item = ScheduleId>) {
        self.ids = ids.into_iter().collect();
        self.seeded = true;
    }

    /// Flips membership for `id` and returns the new (target) state.
    ///
    /// This is the optimistic mutation: it applies before the backend
    /// confirms.
    pub(crate) fn toggle(&mut self, id: ScheduleId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Reverses the optimistic flip for `id` after a rejected toggle.
    ///
    /// Overlapping toggles on one id resolve FIFO: each failure, in
    /// completion order, flips whatever state is currently held, never a
    /// remembered snapshot.
    pub(crate) fn rollback(&mut self, id: ScheduleId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }
}
