//! Notification value object - one `(kind, filename)` pair from the watcher

use std::path::{Path, PathBuf};

use serde::Serialize;

/// What the filesystem reported for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Create,
    Modify,
    Remove,
    Rename,
    Other,
}

impl From<&notify::EventKind> for ChangeKind {
    fn from(kind: &notify::EventKind) -> Self {
        use notify::event::{AccessKind, AccessMode, ModifyKind};
        use notify::EventKind;

        match kind {
            EventKind::Create(_) => ChangeKind::Create,
            EventKind::Modify(ModifyKind::Name(_)) => ChangeKind::Rename,
            EventKind::Modify(_) => ChangeKind::Modify,
            EventKind::Access(AccessKind::Close(AccessMode::Write)) => ChangeKind::Modify,
            EventKind::Remove(_) => ChangeKind::Remove,
            EventKind::Access(_) | EventKind::Any | EventKind::Other => ChangeKind::Other,
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ChangeKind::Create => "create",
            ChangeKind::Modify => "modify",
            ChangeKind::Remove => "remove",
            ChangeKind::Rename => "rename",
            ChangeKind::Other => "other",
        };
        f.write_str(s)
    }
}

/// A single change notification.
///
/// `filename` is relative to the watch root. It may be absent, in which
/// case the notification carries no usable information and is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: ChangeKind,
    pub filename: Option<PathBuf>,
}

impl Notification {
    pub fn new(kind: ChangeKind, filename: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            filename: Some(filename.into()),
        }
    }

    /// A notification the backend delivered without any path
    pub fn anonymous(kind: ChangeKind) -> Self {
        Self {
            kind,
            filename: None,
        }
    }

    /// Filename, treating an empty path the same as a missing one
    pub fn filename(&self) -> Option<&Path> {
        self.filename
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, ModifyKind, RenameMode};

    #[test]
    fn maps_notify_kinds() {
        assert_eq!(
            ChangeKind::from(&notify::EventKind::Create(CreateKind::File)),
            ChangeKind::Create
        );
        assert_eq!(
            ChangeKind::from(&notify::EventKind::Modify(ModifyKind::Data(
                DataChange::Content
            ))),
            ChangeKind::Modify
        );
        assert_eq!(
            ChangeKind::from(&notify::EventKind::Modify(ModifyKind::Name(
                RenameMode::Both
            ))),
            ChangeKind::Rename
        );
        assert_eq!(ChangeKind::from(&notify::EventKind::Any), ChangeKind::Other);
    }

    #[test]
    fn empty_filename_counts_as_absent() {
        let n = Notification::new(ChangeKind::Modify, "");
        assert!(n.filename().is_none());
        assert!(Notification::anonymous(ChangeKind::Modify).filename().is_none());
    }
}
