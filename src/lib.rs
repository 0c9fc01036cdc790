//! Settle - debounced watch-and-act
//!
//! Settle watches directories for changes, waits for bursts of filesystem
//! events to settle, then acts once: run a build command and print its
//! output, or reload a live view.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{WatchEvent, WatchOptions, WatchTarget, WatchUseCase};
pub use config::{Config, TargetConfig};
pub use domain::services::{Debouncer, Resolution};
pub use domain::value_objects::{Notification, SuffixFilter, Ticket};
pub use error::{SettleError, SettleResult};
