//! Scheduler port - run a task after a delay
//!
//! There is no cancel operation. A superseded task still comes due and is
//! discarded by the debouncer when it resolves to `Superseded`.

use std::time::{Duration, Instant};

/// Delayed-task facility driven by an external clock.
///
/// Time is always passed in, so the same scheduler works against
/// `Instant::now()` in production and virtual instants in tests.
pub trait Scheduler {
    type Task;

    /// Queue `task` to come due `delay` after `now`
    fn schedule_after(&mut self, now: Instant, delay: Duration, task: Self::Task);

    /// Earliest deadline among queued tasks
    fn next_deadline(&self) -> Option<Instant>;

    /// Remove and return the earliest task whose deadline is `<= now`
    fn pop_due(&mut self, now: Instant) -> Option<Self::Task>;

    /// Number of queued tasks
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
