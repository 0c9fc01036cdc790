//! Shell command execution for build actions
//!
//! Command lines go through the platform shell (`sh -c` on Unix,
//! `cmd /C` on Windows) so users can write them the way they would type
//! them. The call blocks until the command exits; there is no timeout.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{SettleError, SettleResult};

/// Captured result of a finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub success: bool,
    /// stdout followed by stderr, decoded lossily
    pub output: String,
    pub duration: Duration,
}

/// A command line plus the directory it runs in
#[derive(Debug, Clone)]
pub struct ShellCommand {
    line: String,
    cwd: Option<PathBuf>,
}

impl ShellCommand {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            cwd: None,
        }
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    /// Run to completion and capture output
    pub fn run(&self) -> SettleResult<CommandOutput> {
        let started = Instant::now();
        let mut cmd = shell_command(&self.line);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        let output = cmd
            .stdin(Stdio::null())
            .output()
            .map_err(|source| SettleError::Spawn {
                command: self.line.clone(),
                source,
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutput {
            code: output.status.code(),
            success: output.status.success(),
            output: text,
            duration: started.elapsed(),
        })
    }
}

/// Platform shell invocation for a command line
fn shell_command(line: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C").arg(line);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(line);
        cmd
    }
}
