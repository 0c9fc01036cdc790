//! Watch Use Case
//!
//! Continuous watch-and-act. It orchestrates:
//! - File system monitoring (via `notify`)
//! - Trailing-edge debouncing per target (100ms default)
//! - The target's action (build command or view reload)
//!
//! ## Architecture
//!
//! - `WatchUseCase` - Main loop on a single control thread
//! - `Coalescer` - Suffix filtering, tickets and the timer queue
//! - `Action` - What happens once a burst settles
//! - `WatchEvent` - Events emitted during watch operation
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new(vec![target]);
//! let mut use_case = WatchUseCase::new(options);
//! use_case.start(running, |event| { ... })?;
//! ```

mod action;
mod coalescer;
mod event;
mod options;
mod use_case;


pub use action::{action_for, Action, ActionContext, ActionStatus, BuildAction, ReloadAction};
pub use coalescer::{Coalescer, IgnoreReason, Offer, PendingCheck, Trigger};
pub use event::WatchEvent;
pub use options::{WatchOptions, WatchTarget, DEFAULT_TICK};
pub use use_case::{BoundTarget, WatchUseCase};
