//! Coalescer: turns accepted notifications into at most one trigger per burst
//!
//! Each target gets its own [`Debouncer`], so targets never supersede each
//! other. All targets share one scheduler. Time is passed in explicitly.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::domain::ports::Scheduler;
use crate::domain::services::{Debouncer, Resolution};
use crate::domain::value_objects::{Notification, SuffixFilter, Ticket};
use crate::infrastructure::TimerQueue;

/// Check queued in the scheduler for one accepted event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCheck {
    pub target: usize,
    pub ticket: Ticket,
    pub filename: PathBuf,
}

/// A check that resolved to `Fire`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub target: usize,
    pub ticket: Ticket,
    pub filename: PathBuf,
}

/// Why a notification was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NoFilename,
    SuffixMismatch,
    UnknownTarget,
}

/// Result of offering a notification to the coalescer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    Accepted(Ticket),
    Ignored(IgnoreReason),
}

struct Lane {
    filter: SuffixFilter,
    debouncer: Debouncer,
}

pub struct Coalescer<S = TimerQueue<PendingCheck>> {
    lanes: Vec<Lane>,
    scheduler: S,
}

impl Default for Coalescer {
    fn default() -> Self {
        Self::new()
    }
}

impl Coalescer {
    pub fn new() -> Self {
        Self::with_scheduler(TimerQueue::new())
    }
}

impl<S> Coalescer<S>
where
    S: Scheduler<Task = PendingCheck>,
{
    pub fn with_scheduler(scheduler: S) -> Self {
        Self {
            lanes: Vec::new(),
            scheduler,
        }
    }

    /// Register a target; returns its index
    pub fn add_target(&mut self, filter: SuffixFilter, delay: Duration) -> usize {
        self.lanes.push(Lane {
            filter,
            debouncer: Debouncer::new(delay),
        });
        self.lanes.len() - 1
    }

    /// Filter a notification and, if relevant, bump the target's counter and
    /// schedule its check
    pub fn offer(&mut self, target: usize, notification: &Notification, now: Instant) -> Offer {
        let Some(lane) = self.lanes.get_mut(target) else {
            return Offer::Ignored(IgnoreReason::UnknownTarget);
        };
        let Some(filename) = notification.filename() else {
            return Offer::Ignored(IgnoreReason::NoFilename);
        };
        if !lane.filter.matches(filename) {
            return Offer::Ignored(IgnoreReason::SuffixMismatch);
        }

        let ticket = lane.debouncer.accept();
        self.scheduler.schedule_after(
            now,
            lane.debouncer.delay(),
            PendingCheck {
                target,
                ticket,
                filename: filename.to_path_buf(),
            },
        );
        Offer::Accepted(ticket)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Resolve every check due at `now`, returning the ones that fire
    pub fn drain_due(&mut self, now: Instant) -> Vec<Trigger> {
        let mut fired = Vec::new();
        while let Some(check) = self.scheduler.pop_due(now) {
            let Some(lane) = self.lanes.get(check.target) else {
                continue;
            };
            match lane.debouncer.resolve(check.ticket) {
                Resolution::Fire => fired.push(Trigger {
                    target: check.target,
                    ticket: check.ticket,
                    filename: check.filename,
                }),
                Resolution::Superseded { latest } => {
                    tracing::debug!(
                        lane = check.target,
                        ticket = %check.ticket,
                        %latest,
                        "superseded"
                    );
                }
            }
        }
        fired
    }

    /// Accepted-event count for a target
    pub fn counter(&self, target: usize) -> Option<u64> {
        self.lanes.get(target).map(|lane| lane.debouncer.counter())
    }

    /// Checks still waiting for their deadline
    pub fn pending(&self) -> usize {
        self.scheduler.len()
    }
}
