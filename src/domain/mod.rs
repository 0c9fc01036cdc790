//! Domain Layer
//!
//! The debounce model without any I/O: tickets, suffix filters, the
//! per-target debouncer, and the ports the watch loop talks through.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Ticket, SuffixFilter, Notification)
//! - `services/` - Debouncer
//! - `ports/` - Scheduler and View interfaces for infrastructure

pub mod ports;
pub mod services;
pub mod value_objects;
