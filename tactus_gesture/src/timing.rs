// Copyright 2026 the Tactus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic timer slots for the gesture state machine.
//!
//! Deadlines are plain millisecond timestamps compared against the time the
//! host supplies with each sample or tick; there is no OS timer and nothing
//! here blocks. Each [`TimerId`] has at most one pending deadline: arming an
//! already-armed id replaces the previous deadline, which is what rules out
//! duplicate or overlapping fires.

/// Named timers used by the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerId {
    /// Debounce window after a pinch or pan ends. While pending, further
    /// pinch and pan samples are ignored so an end-of-gesture rebound is not
    /// re-interpreted as a new gesture.
    Settle,
    /// Window during which a recognized single tap may still be superseded
    /// by a double-tap. The tap callback fires only if this elapses.
    TapWindow,
}

/// Deadline slots keyed by [`TimerId`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimerQueue {
    settle: Option<u64>,
    tap_window: Option<u64>,
}

impl TimerQueue {
    /// Arms `id` to fire `duration_ms` after `now`, replacing any pending
    /// deadline for the same id.
    pub fn arm(&mut self, id: TimerId, now: u64, duration_ms: u64) {
        *self.slot(id) = Some(now.saturating_add(duration_ms));
    }

    /// Cancels `id` if pending.
    pub fn clear(&mut self, id: TimerId) {
        *self.slot(id) = None;
    }

    /// Cancels everything.
    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while `id` is armed and its deadline lies after `now`.
    ///
    /// A deadline exactly at `now` is due, not pending, matching a host
    /// timer that fires once its duration has fully elapsed.
    #[must_use]
    pub fn is_pending(&self, id: TimerId, now: u64) -> bool {
        match *self.slot_ref(id) {
            Some(deadline) => now < deadline,
            None => false,
        }
    }

    /// Fires every timer whose deadline is at or before `now`, clearing its
    /// slot and invoking `fire` with its id, earliest deadline first.
    pub fn fire_due(&mut self, now: u64, mut fire: impl FnMut(TimerId)) {
        let mut due: [Option<(u64, TimerId)>; 2] = [None, None];
        let mut n = 0;
        for id in [TimerId::Settle, TimerId::TapWindow] {
            if let Some(deadline) = *self.slot_ref(id) {
                if deadline <= now {
                    due[n] = Some((deadline, id));
                    n += 1;
                }
            }
        }
        if let (Some(a), Some(b)) = (due[0], due[1]) {
            if b.0 < a.0 {
                due.swap(0, 1);
            }
        }
        for entry in due.into_iter().flatten() {
            self.clear(entry.1);
            fire(entry.1);
        }
    }

    fn slot(&mut self, id: TimerId) -> &mut Option<u64> {
        match id {
            TimerId::Settle => &mut self.settle,
            TimerId::TapWindow => &mut self.tap_window,
        }
    }

    fn slot_ref(&self, id: TimerId) -> &Option<u64> {
        match id {
            TimerId::Settle => &self.settle,
            TimerId::TapWindow => &self.tap_window,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{TimerId, TimerQueue};

    #[test]
    fn fresh_queue_has_nothing_pending() {
        let timers = TimerQueue::default();
        assert!(!timers.is_pending(TimerId::Settle, 0));
        assert!(!timers.is_pending(TimerId::TapWindow, u64::MAX));
    }

    #[test]
    fn armed_timer_is_pending_until_its_deadline() {
        let mut timers = TimerQueue::default();
        timers.arm(TimerId::Settle, 1000, 100);

        assert!(timers.is_pending(TimerId::Settle, 1000));
        assert!(timers.is_pending(TimerId::Settle, 1099));
        assert!(!timers.is_pending(TimerId::Settle, 1100));
    }

    #[test]
    fn rearming_replaces_the_previous_deadline() {
        let mut timers = TimerQueue::default();
        timers.arm(TimerId::TapWindow, 0, 300);
        timers.arm(TimerId::TapWindow, 200, 300);

        // The first deadline (300) must not fire.
        let mut fired = Vec::new();
        timers.fire_due(300, |id| fired.push(id));
        assert!(fired.is_empty());

        timers.fire_due(500, |id| fired.push(id));
        assert_eq!(fired, [TimerId::TapWindow]);
    }

    #[test]
    fn clear_cancels_a_pending_timer() {
        let mut timers = TimerQueue::default();
        timers.arm(TimerId::TapWindow, 0, 300);
        timers.clear(TimerId::TapWindow);

        let mut fired = Vec::new();
        timers.fire_due(1000, |id| fired.push(id));
        assert!(fired.is_empty());
    }

    #[test]
    fn fired_timer_does_not_fire_again() {
        let mut timers = TimerQueue::default();
        timers.arm(TimerId::Settle, 0, 100);

        let mut count = 0;
        timers.fire_due(100, |_| count += 1);
        timers.fire_due(200, |_| count += 1);
        assert_eq!(count, 1);
        assert!(!timers.is_pending(TimerId::Settle, 150));
    }

    #[test]
    fn due_timers_fire_earliest_first() {
        let mut timers = TimerQueue::default();
        timers.arm(TimerId::TapWindow, 0, 300);
        timers.arm(TimerId::Settle, 0, 100);

        let mut fired = Vec::new();
        timers.fire_due(1000, |id| fired.push(id));
        assert_eq!(fired, [TimerId::Settle, TimerId::TapWindow]);
    }

    #[test]
    fn deadline_saturates_instead_of_wrapping() {
        let mut timers = TimerQueue::default();
        timers.arm(TimerId::Settle, u64::MAX - 10, 100);
        assert!(timers.is_pending(TimerId::Settle, u64::MAX - 1));
    }
}
