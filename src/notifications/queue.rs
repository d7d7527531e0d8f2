// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationQueue` moves notifications from `active` to `inactive`,
//! suppresses duplicates, and optionally expires active notifications on a
//! fixed interval. It never reads the clock itself: callers pass `now`, which
//! keeps expiry deterministic under test.

use super::expiry::{ExpirySchedule, TimerHandle};
use super::notification::{DedupKey, Notification};
use crate::domain::toasts::ExpiryInterval;
use crate::error::{Error, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::time::Instant;

/// Behavior of a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueConfig {
    auto_remove_interval: Option<ExpiryInterval>,
}

impl QueueConfig {
    /// Alerts stay until dismissed.
    #[must_use]
    pub fn alerts() -> Self {
        Self {
            auto_remove_interval: None,
        }
    }

    /// Toasts are removed automatically after `interval`.
    #[must_use]
    pub fn toasts(interval: ExpiryInterval) -> Self {
        Self {
            auto_remove_interval: Some(interval),
        }
    }

    #[must_use]
    pub fn auto_remove_interval(&self) -> Option<ExpiryInterval> {
        self.auto_remove_interval
    }
}

/// Point-in-time copy of the queue collections, handed to display layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueueSnapshot {
    pub active: Vec<Notification>,
    pub inactive: Vec<Notification>,
    pub all: Vec<Notification>,
}

#[derive(Debug, Clone)]
struct ActiveEntry {
    notification: Notification,
    timer: Option<TimerHandle>,
}

/// Deduplicating queue of active and dismissed notifications.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    /// Displayed notifications, oldest first.
    active: Vec<ActiveEntry>,
    /// Dismissed or expired notifications, in removal order.
    inactive: Vec<Notification>,
    /// Every notification accepted since creation or the last reset.
    all: Vec<Notification>,
    seen: HashSet<DedupKey>,
    expiry: Option<ExpirySchedule>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(QueueConfig::default())
    }
}

impl NotificationQueue {
    #[must_use]
    pub fn new(config: QueueConfig) -> Self {
        Self {
            active: Vec::new(),
            inactive: Vec::new(),
            all: Vec::new(),
            seen: HashSet::new(),
            expiry: config
                .auto_remove_interval()
                .map(|interval| ExpirySchedule::new(interval.as_duration())),
        }
    }

    /// Adds a notification at the current instant.
    ///
    /// See [`NotificationQueue::add_at`].
    pub fn add(&mut self, notification: Notification) -> bool {
        self.add_at(notification, Instant::now())
    }

    /// Adds a notification unless one with the same dedup key was already
    /// accepted since the last reset.
    ///
    /// Returns `true` if the notification became active. Duplicates are
    /// ignored silently, including ones that were already dismissed.
    pub fn add_at(&mut self, notification: Notification, now: Instant) -> bool {
        let key = notification.dedup_key();
        if self.seen.contains(&key) {
            tracing::debug!(?key, "duplicate notification ignored");
            return false;
        }

        let timer = self
            .expiry
            .as_mut()
            .map(|schedule| schedule.schedule(key.clone(), now));
        tracing::debug!(?key, severity = %notification.severity(), "notification added");

        self.seen.insert(key);
        self.all.push(notification.clone());
        self.active.push(ActiveEntry {
            notification,
            timer,
        });
        true
    }

    /// Dismisses the active notification at `index`.
    ///
    /// The notification moves to the inactive list and its pending expiry,
    /// if any, is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] and leaves the queue untouched if
    /// `index` is past the end of the active list.
    pub fn remove(&mut self, index: usize) -> Result<Notification> {
        if index >= self.active.len() {
            tracing::warn!(index, len = self.active.len(), "removal index out of bounds");
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.active.len(),
            });
        }

        let entry = self.active.remove(index);
        if let (Some(schedule), Some(handle)) = (self.expiry.as_mut(), entry.timer) {
            schedule.cancel(handle);
        }
        tracing::debug!(index, key = ?entry.notification.dedup_key(), "notification dismissed");

        self.inactive.push(entry.notification.clone());
        Ok(entry.notification)
    }

    /// Expires every notification whose deadline is at or before `now`.
    ///
    /// Returns the expired notifications in the order they were removed.
    pub fn expire_due(&mut self, now: Instant) -> Vec<Notification> {
        let mut expired = Vec::new();
        let Some(schedule) = self.expiry.as_mut() else {
            return expired;
        };

        while let Some(key) = schedule.pop_due(now) {
            let Some(pos) = self
                .active
                .iter()
                .position(|entry| entry.notification.dedup_key() == key)
            else {
                continue;
            };
            let entry = self.active.remove(pos);
            tracing::debug!(?key, "notification expired");
            self.inactive.push(entry.notification.clone());
            expired.push(entry.notification);
        }
        expired
    }

    /// Clears all collections and pending expiries.
    pub fn reset(&mut self) {
        self.active.clear();
        self.inactive.clear();
        self.all.clear();
        self.seen.clear();
        if let Some(schedule) = self.expiry.as_mut() {
            schedule.clear();
        }
        tracing::debug!("notification queue reset");
    }

    /// Earliest pending expiry deadline, if auto-removal is enabled.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.expiry.as_ref().and_then(ExpirySchedule::next_deadline)
    }

    /// Returns the active notifications in display order.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.active.iter().map(|entry| &entry.notification)
    }

    #[must_use]
    pub fn inactive(&self) -> &[Notification] {
        &self.inactive
    }

    #[must_use]
    pub fn all(&self) -> &[Notification] {
        &self.all
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            active: self.active().cloned().collect(),
            inactive: self.inactive.clone(),
            all: self.all.clone(),
        }
    }
}
