//! Cancellable deferred actions.
//!
//! The schedule is owned by the component that created it, so dropping the
//! owner drops every pending action with it. No callback can fire against
//! a view that no longer exists.

use std::time::Duration;

#[derive(Debug)]
struct Entry<T> {
    remaining: Duration,
    action: T,
}

/// A set of actions that fire after fixed delays, advanced by frame deltas.
#[derive(Debug)]
pub struct Schedule<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Schedule<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Schedule `action` to fire once `delay` has elapsed.
    pub fn after(&mut self, delay: Duration, action: T) {
        self.entries.push(Entry {
            remaining: delay,
            action,
        });
    }

    /// Advance all pending actions and return the ones that are due, in
    /// scheduling order.
    pub fn advance(&mut self, delta: Duration) -> Vec<T> {
        for entry in &mut self.entries {
            entry.remaining = entry.remaining.saturating_sub(delta);
        }

        let mut due = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].remaining.is_zero() {
                due.push(self.entries.remove(i).action);
            } else {
                i += 1;
            }
        }
        due
    }

    /// Drop every pending action without firing it.
    pub fn cancel_all(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self::new()
    }
}
