//! `View` implementation backed by a viewer process
//!
//! The viewer command receives the entry file as its last argument. A
//! reload restarts the process; the view counts as closed once the process
//! exits on its own.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use crate::domain::ports::View;
use crate::error::{SettleError, SettleResult};

pub struct ProcessView {
    viewer: String,
    cwd: Option<PathBuf>,
    entry: Option<PathBuf>,
    child: Option<Child>,
}

impl ProcessView {
    pub fn new(viewer: impl Into<String>) -> Self {
        Self {
            viewer: viewer.into(),
            cwd: None,
            entry: None,
            child: None,
        }
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    fn spawn(&mut self, entry: &Path) -> SettleResult<()> {
        let mut cmd = viewer_command(&self.viewer, entry);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        let child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| SettleError::Spawn {
                command: self.viewer.clone(),
                source,
            })?;

        tracing::debug!(viewer = %self.viewer, pid = child.id(), "viewer started");
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            // Already exited is fine.
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

impl View for ProcessView {
    fn load(&mut self, entry: &Path) -> SettleResult<()> {
        self.stop();
        self.entry = Some(entry.to_path_buf());
        self.spawn(entry)
    }

    fn reload(&mut self) -> SettleResult<()> {
        let Some(entry) = self.entry.clone() else {
            tracing::warn!("reload requested before anything was loaded");
            return Ok(());
        };
        self.stop();
        self.spawn(&entry)
    }

    fn is_open(&mut self) -> bool {
        let Some(child) = self.child.as_mut() else {
            return false;
        };
        match child.try_wait() {
            Ok(None) => true,
            Ok(Some(status)) => {
                tracing::debug!(%status, "viewer exited");
                self.child = None;
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not query viewer process");
                self.child = None;
                false
            }
        }
    }
}

impl Drop for ProcessView {
    fn drop(&mut self) {
        self.stop();
    }
}

/// `viewer "<entry>"` through the platform shell; on Unix the shell execs the viewer
fn viewer_command(viewer: &str, entry: &Path) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(viewer).arg(entry);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c")
            .arg(format!("exec {} \"$1\"", viewer))
            .arg("settle-viewer")
            .arg(entry);
        cmd
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::thread;
    use std::time::{Duration, Instant};

    fn wait_closed(view: &mut ProcessView) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if !view.is_open() {
                return true;
            }
            thread::sleep(Duration::from_millis(20));
        }
        false
    }

    #[test]
    fn not_open_before_load() {
        let mut view = ProcessView::new("sleep 5");
        assert!(!view.is_open());
    }

    #[test]
    fn load_starts_viewer_and_reload_restarts_it() {
        let mut view = ProcessView::new("sh -c 'sleep 5' viewer");
        view.load(Path::new("app.html")).unwrap();
        assert!(view.is_open());
        let first = view.child.as_ref().map(Child::id);

        view.reload().unwrap();
        assert!(view.is_open());
        let second = view.child.as_ref().map(Child::id);
        assert_ne!(first, second);
    }

    #[test]
    fn view_closes_when_viewer_exits() {
        let mut view = ProcessView::new("true");
        view.load(Path::new("app.html")).unwrap();
        assert!(wait_closed(&mut view));
    }

    #[test]
    fn reload_without_load_is_noop() {
        let mut view = ProcessView::new("true");
        view.reload().unwrap();
        assert!(!view.is_open());
    }
}
