// SPDX-License-Identifier: MPL-2.0
//! Cancellable auto-expiry timers for active notifications.
//!
//! Timers are kept in a FIFO whose deadlines never decrease: a timer fires
//! one interval after `max(added_at, deadline of the timer ahead of it)`.
//! Toasts added in a burst therefore leave one interval apart, oldest first,
//! while a lone toast leaves one interval after it was added. Cancelling a
//! timer re-staggers the ones behind it against their new predecessor.

use super::notification::DedupKey;
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Handle to a scheduled expiry, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Timer {
    handle: TimerHandle,
    key: DedupKey,
    added_at: Instant,
    deadline: Instant,
}

/// FIFO schedule of pending expiries.
#[derive(Debug, Clone)]
pub struct ExpirySchedule {
    interval: Duration,
    timers: VecDeque<Timer>,
    next_handle: u64,
}

impl ExpirySchedule {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            timers: VecDeque::new(),
            next_handle: 0,
        }
    }

    /// Schedules an expiry for `key` and returns the handle that cancels it.
    pub fn schedule(&mut self, key: DedupKey, now: Instant) -> TimerHandle {
        let deadline = self.stagger(self.timers.back().map(|t| t.deadline), now);
        let handle = TimerHandle(self.next_handle);
        self.next_handle = self.next_handle.wrapping_add(1);
        self.timers.push_back(Timer {
            handle,
            key,
            added_at: now,
            deadline,
        });
        handle
    }

    /// Cancels a pending expiry.
    ///
    /// Returns `false` if the timer already fired or was cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.timers.iter().position(|t| t.handle == handle) {
            Some(pos) => {
                self.timers.remove(pos);
                self.restagger_from(pos);
                true
            }
            None => false,
        }
    }

    /// Recomputes deadlines from `pos` onward after the timer ahead changed.
    fn restagger_from(&mut self, pos: usize) {
        let mut previous = pos
            .checked_sub(1)
            .and_then(|i| self.timers.get(i))
            .map(|t| t.deadline);
        for i in pos..self.timers.len() {
            let deadline = self.stagger(previous, self.timers[i].added_at);
            self.timers[i].deadline = deadline;
            previous = Some(deadline);
        }
    }

    fn stagger(&self, previous: Option<Instant>, added_at: Instant) -> Instant {
        match previous {
            Some(deadline) if deadline > added_at => deadline + self.interval,
            _ => added_at + self.interval,
        }
    }

    /// Pops the oldest timer if its deadline has passed.
    pub fn pop_due(&mut self, now: Instant) -> Option<DedupKey> {
        if self.timers.front()?.deadline <= now {
            self.timers.pop_front().map(|t| t.key)
        } else {
            None
        }
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.front().map(|t| t.deadline)
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_secs(10);

    fn key(text: &str) -> DedupKey {
        DedupKey::Message(text.to_string())
    }

    #[test]
    fn lone_timer_fires_one_interval_after_scheduling() {
        let start = Instant::now();
        let mut schedule = ExpirySchedule::new(INTERVAL);
        schedule.schedule(key("a"), start);

        assert_eq!(schedule.next_deadline(), Some(start + INTERVAL));
        assert_eq!(schedule.pop_due(start + INTERVAL - Duration::from_millis(1)), None);
        assert_eq!(schedule.pop_due(start + INTERVAL), Some(key("a")));
        assert!(schedule.is_empty());
    }

    #[test]
    fn burst_is_staggered_in_insertion_order() {
        let start = Instant::now();
        let mut schedule = ExpirySchedule::new(INTERVAL);
        schedule.schedule(key("a"), start);
        schedule.schedule(key("b"), start);
        schedule.schedule(key("c"), start);

        let after_one = start + INTERVAL;
        assert_eq!(schedule.pop_due(after_one), Some(key("a")));
        assert_eq!(schedule.pop_due(after_one), None);
        assert_eq!(schedule.pop_due(after_one + INTERVAL), Some(key("b")));
        assert_eq!(schedule.pop_due(after_one + INTERVAL * 2), Some(key("c")));
    }

    #[test]
    fn late_arrival_starts_from_its_own_add_time() {
        let start = Instant::now();
        let mut schedule = ExpirySchedule::new(INTERVAL);
        schedule.schedule(key("a"), start);
        let later = start + INTERVAL * 5;
        schedule.pop_due(later);
        schedule.schedule(key("b"), later);

        assert_eq!(schedule.next_deadline(), Some(later + INTERVAL));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let start = Instant::now();
        let mut schedule = ExpirySchedule::new(INTERVAL);
        let first = schedule.schedule(key("a"), start);
        schedule.schedule(key("b"), start);

        assert!(schedule.cancel(first));
        assert!(!schedule.cancel(first), "second cancel is a no-op");
        assert_eq!(schedule.pop_due(start + INTERVAL), Some(key("b")));
        assert!(schedule.is_empty());
    }

    #[test]
    fn cancelling_head_pulls_followers_back_to_their_add_time() {
        let start = Instant::now();
        let mut schedule = ExpirySchedule::new(INTERVAL);
        let first = schedule.schedule(key("a"), start);
        schedule.schedule(key("b"), start);
        schedule.schedule(key("c"), start);

        schedule.cancel(first);

        assert_eq!(schedule.next_deadline(), Some(start + INTERVAL));
        assert_eq!(schedule.pop_due(start + INTERVAL), Some(key("b")));
        assert_eq!(schedule.pop_due(start + INTERVAL), None);
        assert_eq!(schedule.pop_due(start + INTERVAL * 2), Some(key("c")));
    }

    #[test]
    fn cancelling_middle_restaggers_only_later_timers() {
        let start = Instant::now();
        let mut schedule = ExpirySchedule::new(INTERVAL);
        schedule.schedule(key("a"), start);
        let middle = schedule.schedule(key("b"), start);
        schedule.schedule(key("c"), start);

        schedule.cancel(middle);

        assert_eq!(schedule.pop_due(start + INTERVAL), Some(key("a")));
        assert_eq!(schedule.pop_due(start + INTERVAL * 2), Some(key("c")));
        assert!(schedule.is_empty());
    }

    #[test]
    fn restagger_never_moves_deadline_before_add_time() {
        let start = Instant::now();
        let later = start + INTERVAL * 3;
        let mut schedule = ExpirySchedule::new(INTERVAL);
        let first = schedule.schedule(key("a"), start);
        schedule.schedule(key("b"), later);

        schedule.cancel(first);

        assert_eq!(schedule.next_deadline(), Some(later + INTERVAL));
    }

    #[test]
    fn cancel_after_fire_returns_false() {
        let start = Instant::now();
        let mut schedule = ExpirySchedule::new(INTERVAL);
        let handle = schedule.schedule(key("a"), start);
        schedule.pop_due(start + INTERVAL);

        assert!(!schedule.cancel(handle));
    }

    #[test]
    fn clear_drops_every_timer() {
        let start = Instant::now();
        let mut schedule = ExpirySchedule::new(INTERVAL);
        schedule.schedule(key("a"), start);
        schedule.schedule(key("b"), start);
        schedule.clear();

        assert!(schedule.is_empty());
        assert_eq!(schedule.next_deadline(), None);
    }
}
