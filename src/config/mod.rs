//! Configuration module for Settle
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SETTLE_*)
//! 3. Project config (`--config PATH`, else `./settle.toml`)
//! 4. User config (`<config dir>/settle/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{
    load_or_default, load_with_warnings, with_env_overrides, with_env_overrides_from,
    user_config_path, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{
    ActionConfig, BuildConfig, ColorMode, Config, DefaultsConfig, FailurePolicy, OutputConfig,
    ReloadConfig, TargetConfig, DEFAULT_BUILD_COMMAND, DEFAULT_ENTRY, DEFAULT_VIEWER,
};
