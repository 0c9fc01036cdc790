//! Common test utilities for Settle CLI tests.
//!
//! - `TestEnv`: isolated project and home directories plus CLI runners
//! - `WatchProcess`: a running `settle` whose NDJSON events can be awaited

pub mod env;

pub use env::*;
