//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod scheduler;
pub mod view;

pub use scheduler::Scheduler;
pub use view::View;
