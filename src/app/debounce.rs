//! Quiescence timers owned by the app state.
//!
//! Nothing here sleeps: the event loop asks for [`Debouncer::next_deadline`],
//! waits until then and collects whatever [`Debouncer::take_due`] returns.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Pending<K, A> {
    key: K,
    deadline: Instant,
    action: A,
}

#[derive(Debug, Clone)]
pub struct Debouncer<K, A> {
    pending: Vec<Pending<K, A>>,
}

impl<K, A> Default for Debouncer<K, A> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K: PartialEq, A> Debouncer<K, A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `key` to fire `action` once `delay` has passed without another schedule.
    /// A timer already armed for `key` is replaced.
    pub fn schedule(&mut self, key: K, delay: Duration, action: A, now: Instant) {
        self.cancel(&key);
        self.pending.push(Pending {
            key,
            deadline: now + delay,
            action,
        });
    }

    /// Returns true if a timer was armed for `key`.
    pub fn cancel(&mut self, key: &K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| &p.key != key);
        before != self.pending.len()
    }

    pub fn is_armed(&self, key: &K) -> bool {
        self.pending.iter().any(|p| &p.key == key)
    }

    /// Disarms and returns every action whose deadline is at or before `now`,
    /// earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<A> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.deadline <= now);
        self.pending = rest;
        due.sort_by_key(|p| p.deadline);
        due.into_iter().map(|p| p.action).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.deadline).min()
    }
}
