use crossterm::style::{Color, Stylize};

use crate::ui::theme::{colors, icons, icons_ascii};

/// Line markers for watch output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Failure,
    Warning,
    /// A build action
    Build,
    /// A reload action or an opened view
    Reload,
    /// An accepted change
    Change,
    Watch,
    /// The view went away
    Closed,
}

impl Icon {
    /// Icon for an action kind as reported in watch events
    pub fn for_action(kind: &str) -> Self {
        if kind == "reload" {
            Icon::Reload
        } else {
            Icon::Build
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii) = match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS),
            Icon::Failure => (icons::FAILURE, icons_ascii::FAILURE),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING),
            Icon::Build => (icons::BUILD, icons_ascii::BUILD),
            Icon::Reload => (icons::RELOAD, icons_ascii::RELOAD),
            Icon::Change => (icons::CHANGE, icons_ascii::CHANGE),
            Icon::Watch => (icons::WATCH, icons_ascii::WATCH),
            Icon::Closed => (icons::CLOSED, icons_ascii::CLOSED),
        };
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    fn color(&self) -> Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Failure => colors::FAILURE,
            Icon::Warning => colors::WARNING,
            Icon::Build | Icon::Reload => colors::ACTIVE,
            Icon::Watch => colors::WATCH,
            Icon::Change | Icon::Closed => colors::MUTED,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if supports_color {
            format!("{}", s.with(self.color()))
        } else {
            s.to_string()
        }
    }
}
