//! View port - a live view that can be loaded and reloaded
//!
//! Implementations:
//! - `ProcessView` - runs a viewer program and restarts it on reload
//! - test doubles that record calls

use std::path::Path;

use crate::error::SettleResult;

pub trait View {
    /// Open the view on `entry` (replacing whatever was shown before)
    fn load(&mut self, entry: &Path) -> SettleResult<()>;

    /// Reload the currently loaded content
    fn reload(&mut self) -> SettleResult<()>;

    /// Whether the view is still open
    fn is_open(&mut self) -> bool;
}
