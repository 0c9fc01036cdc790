//! Domain Services
//!
//! Stateful rules that operate on domain values without touching I/O.

mod debouncer;

pub use debouncer::{Debouncer, Resolution, DEFAULT_DELAY};
