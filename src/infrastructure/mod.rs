//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `timer` - In-memory `Scheduler` (deadline-ordered queue)
//! - `fs_watcher` - Recursive filesystem notifications via `notify`
//! - `shell` - Runs build command lines through the platform shell
//! - `viewer` - `View` backed by a viewer process

pub mod fs_watcher;
pub mod shell;
pub mod timer;
pub mod viewer;

// Re-export for convenience
pub use fs_watcher::{FsWatcher, SourceMessage};
pub use shell::{CommandOutput, ShellCommand};
pub use timer::TimerQueue;
pub use viewer::ProcessView;
