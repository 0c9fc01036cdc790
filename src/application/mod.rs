//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (debouncer, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `WatchUseCase` - Watches targets, debounces changes, runs their actions

pub mod watch;

pub use watch::{
    Action, ActionContext, ActionStatus, BoundTarget, BuildAction, Coalescer, Offer,
    ReloadAction, Trigger, WatchEvent, WatchOptions, WatchTarget, WatchUseCase,
};
