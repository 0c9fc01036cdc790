//! Actions performed once a burst of changes settles

use std::path::PathBuf;

use crate::config::{ActionConfig, FailurePolicy};
use crate::domain::ports::View;
use crate::error::{SettleError, SettleResult};
use crate::infrastructure::{ProcessView, ShellCommand};

use super::coalescer::Trigger;
use super::event::WatchEvent;
use super::options::WatchTarget;

/// Whether the loop keeps going after polling an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    Continue,
    Quit,
}

/// What an action needs from the loop
pub struct ActionContext<'a> {
    pub target: &'a str,
    pub on_event: &'a dyn Fn(WatchEvent),
}

impl ActionContext<'_> {
    fn emit(&self, event: WatchEvent) {
        (self.on_event)(event)
    }
}

/// Something a target does. All methods run on the control thread.
pub trait Action {
    fn kind(&self) -> &'static str;

    /// Called once before watching begins
    fn open(&mut self, _cx: &ActionContext<'_>) -> SettleResult<()> {
        Ok(())
    }

    /// Called for every trigger; blocks the loop until it returns
    fn run(&mut self, cx: &ActionContext<'_>, trigger: &Trigger) -> SettleResult<()>;

    /// Called on every loop tick
    fn poll(&mut self, _cx: &ActionContext<'_>) -> SettleResult<ActionStatus> {
        Ok(ActionStatus::Continue)
    }
}

/// Build the production action for a target
pub fn action_for(target: &WatchTarget) -> Box<dyn Action> {
    match &target.action {
        ActionConfig::Build(build) => {
            let cwd = match &build.cwd {
                Some(cwd) => target.base_dir.join(cwd),
                None => target.base_dir.clone(),
            };
            Box::new(
                BuildAction::new(ShellCommand::new(build.command.clone()).with_cwd(cwd))
                    .with_failure_policy(build.on_failure)
                    .with_initial(build.initial),
            )
        }
        ActionConfig::Reload(reload) => Box::new(ReloadAction::new(
            ProcessView::new(reload.viewer.clone()).with_cwd(target.base_dir.clone()),
            reload.entry.clone(),
            reload.quits_when_closed(),
        )),
    }
}

/// Runs a shell command and reports its output
pub struct BuildAction {
    command: ShellCommand,
    on_failure: FailurePolicy,
    initial: bool,
}

impl BuildAction {
    pub fn new(command: ShellCommand) -> Self {
        Self {
            command,
            on_failure: FailurePolicy::Report,
            initial: false,
        }
    }

    pub fn with_failure_policy(mut self, on_failure: FailurePolicy) -> Self {
        self.on_failure = on_failure;
        self
    }

    pub fn with_initial(mut self, initial: bool) -> Self {
        self.initial = initial;
        self
    }

    fn build(&self, cx: &ActionContext<'_>) -> SettleResult<()> {
        let result = self.command.run()?;

        if !result.output.is_empty() {
            cx.emit(WatchEvent::BuildOutput {
                target: cx.target.to_string(),
                output: result.output.clone(),
            });
        }
        cx.emit(WatchEvent::BuildComplete {
            target: cx.target.to_string(),
            success: result.success,
            code: result.code,
            duration_ms: u64::try_from(result.duration.as_millis()).unwrap_or(u64::MAX),
        });

        if result.success {
            return Ok(());
        }

        tracing::warn!(
            command = %self.command.line(),
            code = ?result.code,
            "build command failed"
        );
        match self.on_failure {
            FailurePolicy::Report => Ok(()),
            FailurePolicy::Exit => Err(SettleError::CommandFailed {
                command: self.command.line().to_string(),
                code: result.code,
                output: result.output,
            }),
        }
    }
}

impl Action for BuildAction {
    fn kind(&self) -> &'static str {
        "build"
    }

    fn open(&mut self, cx: &ActionContext<'_>) -> SettleResult<()> {
        if !self.initial {
            return Ok(());
        }
        cx.emit(WatchEvent::StartupAction {
            target: cx.target.to_string(),
            action: self.kind().to_string(),
        });
        self.build(cx)
    }

    fn run(&mut self, cx: &ActionContext<'_>, _trigger: &Trigger) -> SettleResult<()> {
        self.build(cx)
    }
}

/// Keeps a view open on an entry file and reloads it on change
pub struct ReloadAction<V = ProcessView> {
    view: V,
    entry: PathBuf,
    quit_when_closed: bool,
    closed: bool,
}

impl<V: View> ReloadAction<V> {
    pub fn new(view: V, entry: impl Into<PathBuf>, quit_when_closed: bool) -> Self {
        Self {
            view,
            entry: entry.into(),
            quit_when_closed,
            closed: false,
        }
    }
}

impl<V: View> Action for ReloadAction<V> {
    fn kind(&self) -> &'static str {
        "reload"
    }

    fn open(&mut self, cx: &ActionContext<'_>) -> SettleResult<()> {
        self.view.load(&self.entry)?;
        cx.emit(WatchEvent::ViewOpened {
            target: cx.target.to_string(),
            entry: self.entry.display().to_string(),
        });
        Ok(())
    }

    fn run(&mut self, cx: &ActionContext<'_>, trigger: &Trigger) -> SettleResult<()> {
        if self.view.is_open() {
            self.view.reload()?;
        } else {
            // No view left: bring one back up.
            self.view.load(&self.entry)?;
            self.closed = false;
            cx.emit(WatchEvent::ViewOpened {
                target: cx.target.to_string(),
                entry: self.entry.display().to_string(),
            });
        }
        cx.emit(WatchEvent::Reloaded {
            target: cx.target.to_string(),
            path: trigger.filename.display().to_string(),
        });
        Ok(())
    }

    fn poll(&mut self, cx: &ActionContext<'_>) -> SettleResult<ActionStatus> {
        if self.closed || self.view.is_open() {
            return Ok(ActionStatus::Continue);
        }

        self.closed = true;
        cx.emit(WatchEvent::ViewClosed {
            target: cx.target.to_string(),
        });
        if self.quit_when_closed {
            Ok(ActionStatus::Quit)
        } else {
            Ok(ActionStatus::Continue)
        }
    }
}
