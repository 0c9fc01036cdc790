//! Trailing-edge debouncer
//!
//! Every accepted event bumps a counter and hands back the new value as a
//! [`Ticket`]. After the delay, the ticket is resolved against the live
//! counter: only the ticket matching the final increment of a burst fires.

use std::time::Duration;

use crate::domain::value_objects::Ticket;

/// Debounce delay used when nothing else is configured
pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

/// Outcome of resolving a pending ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// No newer event arrived during the delay window
    Fire,
    /// A later event was accepted; this check is a no-op
    Superseded { latest: Ticket },
}

/// Per-target event counter and delay.
///
/// The counter starts at 0, increments exactly once per accepted event and
/// never goes down.
#[derive(Debug, Clone)]
pub struct Debouncer {
    counter: u64,
    delay: Duration,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { counter: 0, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current counter value (number of accepted events so far)
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Record an accepted event and return its ticket (post-increment value)
    pub fn accept(&mut self) -> Ticket {
        self.counter += 1;
        Ticket::new(self.counter)
    }

    /// Decide whether a pending check should run its action
    pub fn resolve(&self, ticket: Ticket) -> Resolution {
        if ticket.value() == self.counter {
            Resolution::Fire
        } else {
            Resolution::Superseded {
                latest: Ticket::new(self.counter),
            }
        }
    }
}
