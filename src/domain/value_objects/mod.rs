//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod notification;
mod suffix_filter;
mod ticket;

pub use notification::{ChangeKind, Notification};
pub use suffix_filter::SuffixFilter;
pub use ticket::Ticket;
