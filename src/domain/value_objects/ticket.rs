//! Ticket value object - a snapshot of a debouncer's event counter

use serde::Serialize;

/// Counter value captured when an event was accepted.
///
/// A pending check fires only if its ticket still equals the debouncer's
/// live counter when the delay elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Ticket(u64);

impl Ticket {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Ticket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_displays_with_hash_prefix() {
        assert_eq!(Ticket::new(3).to_string(), "#3");
    }

    #[test]
    fn ticket_serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&Ticket::new(7)).unwrap(), "7");
    }
}
