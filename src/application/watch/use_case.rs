//! Watch Use Case implementation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{SettleError, SettleResult};
use crate::infrastructure::{FsWatcher, SourceMessage};

use super::action::{action_for, Action, ActionContext, ActionStatus};
use super::coalescer::{Coalescer, Offer, Trigger};
use super::event::WatchEvent;
use super::options::{WatchOptions, WatchTarget, DEFAULT_TICK};

/// A target paired with the action it runs
pub struct BoundTarget {
    pub target: WatchTarget,
    pub action: Box<dyn Action>,
}

impl BoundTarget {
    pub fn new(target: WatchTarget, action: Box<dyn Action>) -> Self {
        Self { target, action }
    }
}

/// Watch Use Case
///
/// Runs every target on the calling thread. Actions block the loop;
/// notifications arriving meanwhile wait in the channel and are handled
/// once the action returns.
pub struct WatchUseCase {
    targets: Vec<BoundTarget>,
    tick: Duration,
}

impl WatchUseCase {
    /// Create a use case with the production action for each target
    pub fn new(options: WatchOptions) -> Self {
        let targets = options
            .targets
            .into_iter()
            .map(|target| {
                let action = action_for(&target);
                BoundTarget::new(target, action)
            })
            .collect();
        Self {
            targets,
            tick: options.tick,
        }
    }

    /// Create a use case with caller-supplied actions
    pub fn with_targets(targets: Vec<BoundTarget>) -> Self {
        Self {
            targets,
            tick: DEFAULT_TICK,
        }
    }

    /// Start watching (blocking)
    ///
    /// Blocks until the running flag is cleared or a view-backed target asks
    /// to quit. Use the callback to receive events.
    pub fn start<F>(&mut self, running: Arc<AtomicBool>, on_event: F) -> SettleResult<()>
    where
        F: Fn(WatchEvent),
    {
        let (tx, rx) = channel();

        let mut watchers = Vec::with_capacity(self.targets.len());
        for (index, bound) in self.targets.iter().enumerate() {
            watchers.push(FsWatcher::spawn(index, &bound.target.root, tx.clone())?);
            on_event(WatchEvent::WatchStarted {
                target: bound.target.name.clone(),
                root: bound.target.root.display().to_string(),
                suffixes: bound.target.filter.suffixes().to_vec(),
                delay_ms: bound.target.delay_ms(),
                action: bound.action.kind().to_string(),
            });
        }
        drop(tx);

        let result = self.drive(rx, running, on_event);
        drop(watchers);
        result
    }

    /// Run the loop over an existing notification stream
    pub fn drive<F>(
        &mut self,
        rx: Receiver<SourceMessage>,
        running: Arc<AtomicBool>,
        on_event: F,
    ) -> SettleResult<()>
    where
        F: Fn(WatchEvent),
    {
        let on_event: &dyn Fn(WatchEvent) = &on_event;

        let mut coalescer = Coalescer::new();
        for bound in &self.targets {
            coalescer.add_target(bound.target.filter.clone(), bound.target.delay);
        }

        for bound in &mut self.targets {
            let cx = ActionContext {
                target: &bound.target.name,
                on_event,
            };
            bound.action.open(&cx)?;
        }

        while running.load(Ordering::SeqCst) {
            let now = Instant::now();
            let wait = coalescer
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(now))
                .unwrap_or(self.tick)
                .min(self.tick);

            match rx.recv_timeout(wait) {
                Ok(message) => self.handle_message(&mut coalescer, message, on_event),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    if !running.load(Ordering::SeqCst) {
                        break;
                    }
                    return Err(SettleError::WatcherDisconnected);
                }
            }

            for trigger in coalescer.drain_due(Instant::now()) {
                self.fire(&trigger, on_event)?;
            }

            if self.poll_actions(on_event)? == ActionStatus::Quit {
                break;
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    fn handle_message(
        &self,
        coalescer: &mut Coalescer,
        message: SourceMessage,
        on_event: &dyn Fn(WatchEvent),
    ) {
        let name = self
            .targets
            .get(message.target)
            .map(|bound| bound.target.name.clone());

        let notification = match message.result {
            Ok(notification) => notification,
            Err(e) => {
                tracing::warn!(watch = ?name, error = %e, "file watcher error");
                on_event(WatchEvent::Error {
                    target: name,
                    message: e.to_string(),
                });
                return;
            }
        };

        tracing::debug!(
            watch = ?name,
            kind = %notification.kind,
            filename = ?notification.filename,
            "notification"
        );

        if let Offer::Accepted(ticket) =
            coalescer.offer(message.target, &notification, Instant::now())
        {
            if let (Some(target), Some(path)) = (name, notification.filename()) {
                on_event(WatchEvent::ChangeAccepted {
                    target,
                    path: path.display().to_string(),
                    ticket,
                });
            }
        }
    }

    fn fire(&mut self, trigger: &Trigger, on_event: &dyn Fn(WatchEvent)) -> SettleResult<()> {
        let Some(bound) = self.targets.get_mut(trigger.target) else {
            return Ok(());
        };

        let path = trigger.filename.display().to_string();
        tracing::info!(
            watch = %bound.target.name,
            %path,
            ticket = %trigger.ticket,
            "changes settled"
        );
        on_event(WatchEvent::ActionStarted {
            target: bound.target.name.clone(),
            path,
            ticket: trigger.ticket,
            action: bound.action.kind().to_string(),
        });

        let cx = ActionContext {
            target: &bound.target.name,
            on_event,
        };
        bound.action.run(&cx, trigger)
    }

    fn poll_actions(&mut self, on_event: &dyn Fn(WatchEvent)) -> SettleResult<ActionStatus> {
        let mut status = ActionStatus::Continue;
        for bound in &mut self.targets {
            let cx = ActionContext {
                target: &bound.target.name,
                on_event,
            };
            if bound.action.poll(&cx)? == ActionStatus::Quit {
                status = ActionStatus::Quit;
            }
        }
        Ok(status)
    }
}
