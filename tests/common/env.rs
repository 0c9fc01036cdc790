//! Isolated environment for running the `settle` binary.

#![allow(dead_code)]

use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Output, Stdio};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a Settle CLI command to completion
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parsed NDJSON lines of stdout
    pub fn events(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    /// Names of the emitted events in order
    pub fn event_names(&self) -> Vec<String> {
        self.events().iter().map(event_name).collect()
    }
}

pub fn event_name(event: &Value) -> String {
    event["event"].as_str().unwrap_or_default().to_string()
}

/// Isolated test environment: a project directory and a HOME with no user config
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("project tempdir"),
            home_dir: tempfile::tempdir().expect("home tempdir"),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Write a file under the project, creating parent directories
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, content).expect("write project file");
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_settle"));
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("SETTLE_LOG")
            .env_remove("SETTLE_DELAY_MS")
            .env_remove("SETTLE_COLOR");
        cmd
    }

    /// Run to completion
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to execute settle");
        output_to_result(output)
    }

    /// Start a long-running watch and stream its stdout
    pub fn spawn(&self, args: &[&str]) -> WatchProcess {
        let mut child = self
            .command(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("Failed to start settle");

        let stdout = child.stdout.take().expect("piped stdout");
        let (tx, rx) = channel();
        thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        WatchProcess {
            child,
            lines: rx,
            seen: Vec::new(),
        }
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// A running `settle --json` process; killed on drop
pub struct WatchProcess {
    child: Child,
    lines: Receiver<String>,
    seen: Vec<Value>,
}

impl WatchProcess {
    fn record(&mut self, line: &str) -> Option<Value> {
        let event = serde_json::from_str::<Value>(line).ok()?;
        self.seen.push(event.clone());
        Some(event)
    }

    /// Block until an event with this name arrives (or the timeout passes)
    pub fn wait_for(&mut self, name: &str, timeout: Duration) -> Option<Value> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.checked_duration_since(Instant::now())?;
            let line = self.lines.recv_timeout(remaining).ok()?;
            if let Some(event) = self.record(&line) {
                if event_name(&event) == name {
                    return Some(event);
                }
            }
        }
    }

    /// Collect whatever arrives during `period`
    pub fn drain_for(&mut self, period: Duration) {
        let deadline = Instant::now() + period;
        while let Some(remaining) = deadline.checked_duration_since(Instant::now()) {
            match self.lines.recv_timeout(remaining) {
                Ok(line) => {
                    self.record(&line);
                }
                Err(_) => break,
            }
        }
    }

    /// Every event seen so far
    pub fn seen(&self) -> &[Value] {
        &self.seen
    }

    pub fn count(&self, name: &str) -> usize {
        self.seen.iter().filter(|e| event_name(e) == name).count()
    }

    /// Wait for the process to exit on its own
    pub fn wait_exit(&mut self, timeout: Duration) -> Option<ExitStatus> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(Some(status)) = self.child.try_wait() {
                return Some(status);
            }
            thread::sleep(Duration::from_millis(20));
        }
        None
    }
}

impl Drop for WatchProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
