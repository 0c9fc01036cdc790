//! Recursive filesystem watching via `notify`
//!
//! Each path carried by a `notify::Event` is forwarded as one
//! [`Notification`], with the filename made relative to the watch root.
//! Read-only access (a viewer opening its entry file) is dropped here.
//! Backend errors are forwarded too, so the watch loop can report them.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use notify::event::{AccessKind, AccessMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::value_objects::{ChangeKind, Notification};
use crate::error::{SettleError, SettleResult};

/// A notification (or backend error) tagged with the target that produced it
#[derive(Debug)]
pub struct SourceMessage {
    pub target: usize,
    pub result: Result<Notification, notify::Error>,
}

/// Keeps a recursive watch alive; dropping it stops the subscription
pub struct FsWatcher {
    _watcher: RecommendedWatcher,
    root: PathBuf,
}

impl FsWatcher {
    /// Start watching `root` recursively, sending into `tx`
    pub fn spawn(target: usize, root: &Path, tx: Sender<SourceMessage>) -> SettleResult<Self> {
        if !root.is_dir() {
            return Err(SettleError::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let canonical_root = root.canonicalize()?;
        let strip_root = canonical_root.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                for result in split_event(res, &strip_root) {
                    let _ = tx.send(SourceMessage { target, result });
                }
            },
            Config::default(),
        )?;

        watcher.watch(&canonical_root, RecursiveMode::Recursive)?;
        tracing::debug!(root = %canonical_root.display(), target, "watching");

        Ok(Self {
            _watcher: watcher,
            root: canonical_root,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Turn one backend callback into per-path notifications
fn split_event(
    res: Result<Event, notify::Error>,
    root: &Path,
) -> Vec<Result<Notification, notify::Error>> {
    match res {
        Ok(event) if is_read_only(&event.kind) => Vec::new(),
        Ok(event) => {
            let kind = ChangeKind::from(&event.kind);
            if event.paths.is_empty() {
                return vec![Ok(Notification::anonymous(kind))];
            }
            event
                .paths
                .iter()
                .map(|path| Ok(Notification::new(kind, relative_to(path, root))))
                .collect()
        }
        Err(e) => vec![Err(e)],
    }
}

fn is_read_only(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Access(access) if *access != AccessKind::Close(AccessMode::Write))
}

fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
