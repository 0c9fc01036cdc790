use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use settle::config::{load_or_default, ActionConfig, LoadedConfig, TargetConfig};
use settle::{WatchEvent, WatchOptions, WatchTarget, WatchUseCase};

use crate::cli::{BuildArgs, ReloadArgs, WatchArgs};
use crate::commands::GlobalArgs;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::views::watch::{render_watch_event, render_watch_header, WatchStyle};

pub fn cmd_build(global: &GlobalArgs, args: BuildArgs) -> Result<()> {
    let loaded = load_config(global)?;
    let (mut config, base_dir) = preset_or_configured(&loaded, TargetConfig::build_preset());

    apply_watch_args(&mut config, &args.watch)?;
    if let ActionConfig::Build(build) = &mut config.action {
        if let Some(command) = args.command {
            build.command = command;
        }
        if let Some(cwd) = args.cwd {
            build.cwd = Some(absolute(&cwd)?);
        }
        if let Some(on_failure) = args.on_failure {
            build.on_failure = on_failure.into();
        }
        build.initial |= args.initial;
    }

    let target = WatchTarget::from_config(&config, &loaded.config.defaults, &base_dir)?;
    run_watch(global, &loaded, vec![target])
}

pub fn cmd_reload(global: &GlobalArgs, args: ReloadArgs) -> Result<()> {
    let loaded = load_config(global)?;
    let (mut config, base_dir) = preset_or_configured(&loaded, TargetConfig::reload_preset());

    apply_watch_args(&mut config, &args.watch)?;
    if let ActionConfig::Reload(reload) = &mut config.action {
        if let Some(viewer) = args.viewer {
            reload.viewer = viewer;
        }
        if let Some(entry) = args.entry {
            reload.entry = absolute(&entry)?;
        }
        if args.keep_open {
            reload.quit_when_closed = Some(false);
        }
    }

    let target = WatchTarget::from_config(&config, &loaded.config.defaults, &base_dir)?;
    run_watch(global, &loaded, vec![target])
}

pub fn cmd_run(global: &GlobalArgs, names: &[String]) -> Result<()> {
    let loaded = load_config(global)?;
    let base_dir = loaded.base_dir();
    let config = &loaded.config;

    config.validate()?;
    for name in names {
        if config.target(name).is_none() {
            bail!("no target named '{}' in the config", name);
        }
    }

    let targets = config
        .targets
        .iter()
        .filter(|t| names.is_empty() || names.contains(&t.name))
        .map(|t| WatchTarget::from_config(t, &config.defaults, &base_dir))
        .collect::<Result<Vec<_>, _>>()?;

    if targets.is_empty() {
        match &loaded.path {
            Some(path) => bail!("no [[target]] entries in {}", path.display()),
            None => bail!("no config file found; create settle.toml or pass --config"),
        }
    }

    run_watch(global, &loaded, targets)
}

fn load_config(global: &GlobalArgs) -> Result<LoadedConfig> {
    let loaded = load_or_default(global.config.as_deref())?;
    if !loaded.warnings.is_empty() {
        let ui = UiContext::new(global.json, global.verbose, global.color, &loaded.config.output);
        print_config_warnings(&loaded.warnings, ui.unicode);
    }
    Ok(loaded)
}

/// A configured target named like the preset wins if it has the same action kind
fn preset_or_configured(loaded: &LoadedConfig, preset: TargetConfig) -> (TargetConfig, PathBuf) {
    match loaded.config.target(&preset.name) {
        Some(configured) if configured.action.kind() == preset.action.kind() => {
            (configured.clone(), loaded.base_dir())
        }
        _ => (preset, PathBuf::from(".")),
    }
}

fn apply_watch_args(config: &mut TargetConfig, args: &WatchArgs) -> Result<()> {
    if let Some(root) = &args.root {
        config.root = absolute(root)?;
    }
    if !args.suffixes.is_empty() {
        config.suffixes = args.suffixes.clone();
    }
    if let Some(delay_ms) = args.delay_ms {
        config.delay_ms = Some(delay_ms);
    }
    Ok(())
}

/// Flag paths are relative to the invocation directory, not the config file
fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    Ok(cwd.join(path))
}

fn run_watch(global: &GlobalArgs, loaded: &LoadedConfig, targets: Vec<WatchTarget>) -> Result<()> {
    let ui = UiContext::new(global.json, global.verbose, global.color, &loaded.config.output);
    let style = WatchStyle {
        color: ui.color,
        unicode: ui.unicode,
        verbose: ui.verbose > 0,
        show_target: targets.len() > 1,
    };

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("Failed to install the Ctrl+C handler")?;

    if !global.json {
        print!("{}", render_watch_header(&targets, ui.color, ui.unicode));
    }

    let mut use_case = WatchUseCase::new(WatchOptions::new(targets));
    let result = use_case.start(running, |event| {
        if global.json {
            println!("{}", event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_watch_event(&timestamp, &event, style);
        match event {
            WatchEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    });

    if let Err(err) = &result {
        if global.json {
            let event = WatchEvent::Error {
                target: None,
                message: err.to_string(),
            };
            println!("{}", event.to_json());
        }
    }

    result.context("Watch stopped with an error")
}
