//! Colors and icons for terminal output. Views never pick raw colors.

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const FAILURE: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    /// Actions in flight (rebuild, reload)
    pub const ACTIVE: Color = Color::Magenta;
    pub const WATCH: Color = Color::Cyan;
    pub const MUTED: Color = Color::DarkGrey;
}

/// Icons when the locale can show them
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const BUILD: &str = "⚙";
    pub const RELOAD: &str = "↻";
    pub const CHANGE: &str = "✎";
    pub const WATCH: &str = "👁";
    pub const CLOSED: &str = "⊘";
}

/// Fallbacks for `TERM=dumb` and C/POSIX locales
pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const FAILURE: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const BUILD: &str = "[BUILD]";
    pub const RELOAD: &str = "[RELOAD]";
    pub const CHANGE: &str = "[CHG]";
    pub const WATCH: &str = "[WATCH]";
    pub const CLOSED: &str = "[CLOSED]";
}

/// Width of the `=` rule printed before each build
pub const RULE_WIDTH: usize = 60;
