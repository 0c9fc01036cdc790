//! Tests for the config module

use super::loader::*;
use super::types::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.defaults.delay_ms, 100);
    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(config.output.unicode);
    assert!(config.targets.is_empty());
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[defaults]
delay_ms = 250

[output]
color = "never"

[[target]]
name = "elm"
root = "src"
suffixes = [".elm"]
action = { kind = "build", command = "elm make src/Main.elm --output=elm.js", on_failure = "exit" }

[[target]]
name = "app"
root = "."
suffixes = [".js", ".html"]
delay_ms = 50
action = { kind = "reload", viewer = "electron", entry = "app.html" }
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(config.defaults.delay_ms, 250);
    assert_eq!(config.output.color, ColorMode::Never);
    assert_eq!(config.targets.len(), 2);

    let elm = config.target("elm").unwrap();
    assert_eq!(elm.effective_delay_ms(&config.defaults), 250);
    match &elm.action {
        ActionConfig::Build(build) => {
            assert_eq!(build.command, "elm make src/Main.elm --output=elm.js");
            assert_eq!(build.on_failure, FailurePolicy::Exit);
            assert!(!build.initial);
        }
        other => panic!("expected build action, got {:?}", other),
    }

    let app = config.target("app").unwrap();
    assert_eq!(app.effective_delay_ms(&config.defaults), 50);
    match &app.action {
        ActionConfig::Reload(reload) => {
            assert_eq!(reload.viewer, "electron");
            assert_eq!(reload.entry, PathBuf::from("app.html"));
            assert_eq!(reload.quit_when_closed, None);
        }
        other => panic!("expected reload action, got {:?}", other),
    }
}

#[test]
fn test_action_defaults_fill_in() {
    let toml = r#"
[[target]]
name = "elm"
root = "src"
suffixes = [".elm"]

[target.action]
kind = "build"
"#;
    let config: Config = toml::from_str(toml).unwrap();
    match &config.targets[0].action {
        ActionConfig::Build(build) => {
            assert_eq!(build.command, DEFAULT_BUILD_COMMAND);
            assert_eq!(build.on_failure, FailurePolicy::Report);
        }
        other => panic!("expected build action, got {:?}", other),
    }
}

#[test]
fn test_unknown_action_kind_is_error() {
    let toml = r#"
[[target]]
name = "x"
root = "."
suffixes = [".x"]
action = { kind = "deploy" }
"#;
    assert!(toml::from_str::<Config>(toml).is_err());
}

#[test]
fn test_presets_mirror_builtin_watchers() {
    let build = TargetConfig::build_preset();
    assert_eq!(build.root, PathBuf::from("src"));
    assert_eq!(build.suffixes, vec![".elm".to_string()]);
    assert_eq!(build.action.kind(), "build");

    let reload = TargetConfig::reload_preset();
    assert_eq!(reload.root, PathBuf::from("."));
    assert_eq!(reload.suffixes, vec![".js".to_string(), ".html".to_string()]);
    assert_eq!(reload.action.kind(), "reload");
}

#[test]
fn test_validate_rejects_missing_suffixes() {
    let mut target = TargetConfig::build_preset();
    target.suffixes.clear();
    let err = target.validate().unwrap_err();
    assert!(err.to_string().contains("at least one suffix"));
}

#[test]
fn test_validate_rejects_empty_command() {
    let mut target = TargetConfig::build_preset();
    target.action = ActionConfig::Build(BuildConfig {
        command: "   ".to_string(),
        ..BuildConfig::default()
    });
    assert!(target.validate().is_err());
}

#[test]
fn test_validate_rejects_duplicate_names() {
    let config = Config {
        targets: vec![TargetConfig::build_preset(), TargetConfig::build_preset()],
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate target name"));
}

#[test]
fn test_reload_quit_when_closed_override() {
    let reload = ReloadConfig {
        quit_when_closed: Some(false),
        ..ReloadConfig::default()
    };
    assert!(!reload.quits_when_closed());

    let default = ReloadConfig::default();
    assert_eq!(default.quits_when_closed(), !cfg!(target_os = "macos"));
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settle.toml");
    fs::write(&path, "[defaults]\ndelay_msec = 20\n").unwrap();

    let (config, warnings) = load_with_warnings(&path).unwrap();

    assert_eq!(config.defaults.delay_ms, 100);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "delay_msec");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("delay_ms"));
}

#[test]
fn test_load_invalid_toml_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settle.toml");
    fs::write(&path, "[defaults\n").unwrap();

    let err = load_with_warnings(&path).unwrap_err();
    assert!(matches!(err, crate::error::SettleError::Config { .. }));
}

#[test]
fn test_load_or_default_explicit_missing_file_errors() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    assert!(load_or_default(Some(&missing)).is_err());
}

#[test]
fn test_loaded_config_base_dir() {
    let loaded = LoadedConfig {
        path: Some(PathBuf::from("project/settle.toml")),
        ..LoadedConfig::default()
    };
    assert_eq!(loaded.base_dir(), PathBuf::from("project"));

    let bare = LoadedConfig {
        path: Some(PathBuf::from("settle.toml")),
        ..LoadedConfig::default()
    };
    assert_eq!(bare.base_dir(), PathBuf::from("."));
    assert_eq!(LoadedConfig::default().base_dir(), PathBuf::from("."));
}

#[test]
fn test_env_overrides() {
    let config = with_env_overrides_from(Config::default(), |key| match key {
        "SETTLE_DELAY_MS" => Some("40".to_string()),
        "SETTLE_COLOR" => Some("always".to_string()),
        _ => None,
    });
    assert_eq!(config.defaults.delay_ms, 40);
    assert_eq!(config.output.color, ColorMode::Always);
}

#[test]
fn test_env_delay_overrides_target_delay() {
    let mut target = TargetConfig::build_preset();
    target.delay_ms = Some(250);
    let config = Config {
        targets: vec![target, TargetConfig::reload_preset()],
        ..Config::default()
    };

    let config = with_env_overrides_from(config, |key| match key {
        "SETTLE_DELAY_MS" => Some("500".to_string()),
        _ => None,
    });

    for target in &config.targets {
        assert_eq!(target.effective_delay_ms(&config.defaults), 500);
    }
}

#[test]
fn test_env_override_invalid_delay_is_ignored() {
    let config = with_env_overrides_from(Config::default(), |key| match key {
        "SETTLE_DELAY_MS" => Some("soon".to_string()),
        _ => None,
    });
    assert_eq!(config.defaults.delay_ms, 100);
}
