//! Configuration type definitions

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{SettleError, SettleResult};

/// Compiler invocation used by `settle build` when none is given
pub const DEFAULT_BUILD_COMMAND: &str = "elm make src/Main.elm --output=elm.js";
/// Viewer program used by `settle reload` when none is given
pub const DEFAULT_VIEWER: &str = "electron";
/// Entry file the viewer loads at startup
pub const DEFAULT_ENTRY: &str = "app.html";

/// Values applied to every target unless the target overrides them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_delay_ms() -> u64 {
    100
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// What to do when the build command exits non-zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Report the failure and keep watching
    #[default]
    Report,
    /// Stop watching and exit with an error
    Exit,
}

/// Build action: run a shell command and print its output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_build_command")]
    pub command: String,

    /// Working directory for the command (defaults to the base directory)
    #[serde(default)]
    pub cwd: Option<PathBuf>,

    #[serde(default)]
    pub on_failure: FailurePolicy,

    /// Run the command once before the first change
    #[serde(default)]
    pub initial: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: default_build_command(),
            cwd: None,
            on_failure: FailurePolicy::default(),
            initial: false,
        }
    }
}

fn default_build_command() -> String {
    DEFAULT_BUILD_COMMAND.to_string()
}

/// Reload action: keep a viewer open on an entry file, restart it on change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReloadConfig {
    #[serde(default = "default_viewer")]
    pub viewer: String,

    #[serde(default = "default_entry")]
    pub entry: PathBuf,

    /// Stop watching once the viewer is closed.
    /// Unset means "yes, except on macOS".
    #[serde(default)]
    pub quit_when_closed: Option<bool>,
}

impl Default for ReloadConfig {
    fn default() -> Self {
        Self {
            viewer: default_viewer(),
            entry: default_entry(),
            quit_when_closed: None,
        }
    }
}

impl ReloadConfig {
    pub fn quits_when_closed(&self) -> bool {
        self.quit_when_closed.unwrap_or(!cfg!(target_os = "macos"))
    }
}

fn default_viewer() -> String {
    DEFAULT_VIEWER.to_string()
}

fn default_entry() -> PathBuf {
    PathBuf::from(DEFAULT_ENTRY)
}

/// Action performed once a burst of changes settles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ActionConfig {
    Build(BuildConfig),
    Reload(ReloadConfig),
}

impl ActionConfig {
    pub fn kind(&self) -> &'static str {
        match self {
            ActionConfig::Build(_) => "build",
            ActionConfig::Reload(_) => "reload",
        }
    }
}

/// One `[[target]]` entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub name: String,

    pub root: PathBuf,

    pub suffixes: Vec<String>,

    /// Overrides `defaults.delay_ms`
    #[serde(default)]
    pub delay_ms: Option<u64>,

    pub action: ActionConfig,
}

impl TargetConfig {
    /// Watch `src` for `.elm` changes and run the Elm compiler
    pub fn build_preset() -> Self {
        Self {
            name: "build".to_string(),
            root: PathBuf::from("src"),
            suffixes: vec![".elm".to_string()],
            delay_ms: None,
            action: ActionConfig::Build(BuildConfig::default()),
        }
    }

    /// Watch the current directory for `.js`/`.html` changes and reload the viewer
    pub fn reload_preset() -> Self {
        Self {
            name: "reload".to_string(),
            root: PathBuf::from("."),
            suffixes: vec![".js".to_string(), ".html".to_string()],
            delay_ms: None,
            action: ActionConfig::Reload(ReloadConfig::default()),
        }
    }

    pub fn effective_delay_ms(&self, defaults: &DefaultsConfig) -> u64 {
        self.delay_ms.unwrap_or(defaults.delay_ms)
    }

    pub fn validate(&self) -> SettleResult<()> {
        let invalid = |message: &str| SettleError::InvalidTarget {
            target: self.name.clone(),
            message: message.to_string(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if self.suffixes.iter().all(|s| s.is_empty()) {
            return Err(invalid("at least one suffix is required"));
        }
        match &self.action {
            ActionConfig::Build(build) if build.command.trim().is_empty() => {
                Err(invalid("build command must not be empty"))
            }
            ActionConfig::Reload(reload) if reload.viewer.trim().is_empty() => {
                Err(invalid("viewer command must not be empty"))
            }
            _ => Ok(()),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default, rename = "target")]
    pub targets: Vec<TargetConfig>,
}

impl Config {
    /// Check every declared target, and that target names are unique
    pub fn validate(&self) -> SettleResult<()> {
        let mut seen = HashSet::new();
        for target in &self.targets {
            target.validate()?;
            if !seen.insert(target.name.as_str()) {
                return Err(SettleError::InvalidTarget {
                    target: target.name.clone(),
                    message: "duplicate target name".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn target(&self, name: &str) -> Option<&TargetConfig> {
        self.targets.iter().find(|t| t.name == name)
    }
}
