//! Watch options: resolved targets ready to be watched

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::{ActionConfig, DefaultsConfig, TargetConfig};
use crate::domain::value_objects::SuffixFilter;
use crate::error::SettleResult;

/// Longest the loop blocks before re-checking timers, views and Ctrl+C
pub const DEFAULT_TICK: Duration = Duration::from_millis(50);

/// A target with every path and default resolved
#[derive(Debug, Clone)]
pub struct WatchTarget {
    pub name: String,
    /// Directory watched recursively
    pub root: PathBuf,
    pub filter: SuffixFilter,
    pub delay: Duration,
    pub action: ActionConfig,
    /// Directory the action's relative paths resolve against
    pub base_dir: PathBuf,
}

impl WatchTarget {
    /// Resolve a `[[target]]` entry against config defaults and a base directory
    pub fn from_config(
        config: &TargetConfig,
        defaults: &DefaultsConfig,
        base_dir: &Path,
    ) -> SettleResult<Self> {
        config.validate()?;
        Ok(Self {
            name: config.name.clone(),
            root: base_dir.join(&config.root),
            filter: SuffixFilter::new(config.suffixes.iter().cloned()),
            delay: Duration::from_millis(config.effective_delay_ms(defaults)),
            action: config.action.clone(),
            base_dir: base_dir.to_path_buf(),
        })
    }

    pub fn delay_ms(&self) -> u64 {
        u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX)
    }
}

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub targets: Vec<WatchTarget>,
    /// Loop tick (upper bound on blocking between checks)
    pub tick: Duration,
}

impl WatchOptions {
    pub fn new(targets: Vec<WatchTarget>) -> Self {
        Self {
            targets,
            tick: DEFAULT_TICK,
        }
    }
}
