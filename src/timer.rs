//! Cancellable timed tasks standing in for slow work.
//!
//! The loading delay, payment processing, the post-payment redirect and the
//! baggage scan are all fixed delays. Each is scheduled against the current
//! view and cancelled when the view goes away, so a late timer can never
//! write into a screen that is no longer showing.

use std::time::{Duration, Instant};

use tracing::debug;

/// What a timer means when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    LoadingComplete,
    PaymentProcessed,
    RedirectToTickets,
    ScanComplete,
}

#[derive(Debug)]
struct Pending {
    due: Instant,
    event: TimerEvent,
}

/// Timers owned by the current view.
#[derive(Debug, Default)]
pub struct Timers {
    pending: Vec<Pending>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Instant, delay: Duration, event: TimerEvent) {
        self.pending.push(Pending {
            due: now + delay,
            event,
        });
        debug!(?event, ?delay, "timer scheduled");
    }

    /// Drops pending timers for `event`. Returns whether any were pending.
    pub fn cancel(&mut self, event: TimerEvent) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.event != event);
        before != self.pending.len()
    }

    /// Cancels everything, e.g. when navigating away from the owning view.
    pub fn cancel_all(&mut self) {
        if !self.pending.is_empty() {
            let events: Vec<TimerEvent> = self.pending.iter().map(|p| p.event).collect();
            debug!(?events, "timers cancelled");
        }
        self.pending.clear();
    }

    /// Removes and returns the events due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerEvent> {
        let mut due: Vec<Pending> = Vec::new();
        let mut index = 0;
        while index < self.pending.len() {
            if self.pending[index].due <= now {
                due.push(self.pending.remove(index));
            } else {
                index += 1;
            }
        }
        due.sort_by_key(|p| p.due);
        due.into_iter()
            .map(|p| {
                debug!(event = ?p.event, "timer fired");
                p.event
            })
            .collect()
    }

    /// The earliest deadline, if anything is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn fires_only_when_due() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(start, 2 * SECOND, TimerEvent::PaymentProcessed);

        assert!(timers.take_due(start + SECOND).is_empty());
        assert_eq!(
            timers.take_due(start + 2 * SECOND),
            vec![TimerEvent::PaymentProcessed]
        );
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn fires_once() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(start, SECOND, TimerEvent::ScanComplete);

        assert_eq!(timers.take_due(start + 5 * SECOND).len(), 1);
        assert!(timers.take_due(start + 10 * SECOND).is_empty());
    }

    #[test]
    fn due_events_come_back_in_deadline_order() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(start, 3 * SECOND, TimerEvent::RedirectToTickets);
        timers.schedule(start, SECOND, TimerEvent::PaymentProcessed);

        assert_eq!(
            timers.take_due(start + 4 * SECOND),
            vec![TimerEvent::PaymentProcessed, TimerEvent::RedirectToTickets]
        );
    }

    #[test]
    fn cancel_all_drops_pending() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(start, SECOND, TimerEvent::LoadingComplete);
        timers.schedule(start, SECOND, TimerEvent::ScanComplete);
        timers.cancel_all();

        assert!(timers.take_due(start + 5 * SECOND).is_empty());
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn cancel_one() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(start, SECOND, TimerEvent::ScanComplete);
        timers.schedule(start, SECOND, TimerEvent::LoadingComplete);

        assert!(timers.cancel(TimerEvent::ScanComplete));
        assert!(!timers.cancel(TimerEvent::ScanComplete));
        assert_eq!(
            timers.take_due(start + SECOND),
            vec![TimerEvent::LoadingComplete]
        );
    }

    #[test]
    fn next_deadline_is_earliest() {
        let start = Instant::now();
        let mut timers = Timers::new();
        timers.schedule(start, 3 * SECOND, TimerEvent::RedirectToTickets);
        timers.schedule(start, SECOND, TimerEvent::PaymentProcessed);
        assert_eq!(timers.next_deadline(), Some(start + SECOND));
    }
}
