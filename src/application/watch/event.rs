//! Watch event types

use serde::Serialize;

use crate::domain::value_objects::Ticket;

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// A target's watch is registered
    WatchStarted {
        target: String,
        root: String,
        suffixes: Vec<String>,
        delay_ms: u64,
        action: String,
    },
    /// A relevant change was accepted and a check scheduled
    ChangeAccepted {
        target: String,
        path: String,
        ticket: Ticket,
    },
    /// A burst settled and the target's action is running
    ActionStarted {
        target: String,
        path: String,
        ticket: Ticket,
        action: String,
    },
    /// The action ran once at startup, before any change
    StartupAction { target: String, action: String },
    /// Captured build output
    BuildOutput { target: String, output: String },
    /// Build command finished
    BuildComplete {
        target: String,
        success: bool,
        code: Option<i32>,
        duration_ms: u64,
    },
    /// Viewer opened on its entry file
    ViewOpened { target: String, entry: String },
    /// Viewer reloaded after a change
    Reloaded { target: String, path: String },
    /// Viewer was closed
    ViewClosed { target: String },
    /// Non-fatal error (watching continues)
    Error {
        target: Option<String>,
        message: String,
    },
    /// Watch stopped
    Shutdown,
}

impl WatchEvent {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Name of the target the event belongs to, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            WatchEvent::WatchStarted { target, .. }
            | WatchEvent::ChangeAccepted { target, .. }
            | WatchEvent::ActionStarted { target, .. }
            | WatchEvent::StartupAction { target, .. }
            | WatchEvent::BuildOutput { target, .. }
            | WatchEvent::BuildComplete { target, .. }
            | WatchEvent::ViewOpened { target, .. }
            | WatchEvent::Reloaded { target, .. }
            | WatchEvent::ViewClosed { target } => Some(target),
            WatchEvent::Error { target, .. } => target.as_deref(),
            WatchEvent::Shutdown => None,
        }
    }
}
