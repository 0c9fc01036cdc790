use settle::application::WatchEvent;
use settle::WatchTarget;

use crate::ui::blocks::header::{TargetRow, WatchHeader};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;

/// How watch events are rendered for humans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchStyle {
    pub color: bool,
    pub unicode: bool,
    pub verbose: bool,
    /// Prefix lines with the target name (several targets share the terminal)
    pub show_target: bool,
}

pub fn render_watch_header(
    targets: &[WatchTarget],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = WatchHeader::new();
    for target in targets {
        header.add(TargetRow {
            name: target.name.clone(),
            root: target.root.display().to_string(),
            suffixes: target.filter.to_string(),
            action: target.action.kind().to_string(),
            delay_ms: target.delay_ms(),
        });
    }
    header.render(supports_color, supports_unicode)
}

/// Render one event; hidden events render as an empty string
pub fn render_watch_event(timestamp: &str, event: &WatchEvent, style: WatchStyle) -> String {
    let prefix = format!("[{}]", timestamp);
    let tag = match event.target() {
        Some(target) if style.show_target => format!("{target}: "),
        _ => String::new(),
    };
    let icon = |icon: Icon| icon.colored(style.color, style.unicode);

    match event {
        WatchEvent::WatchStarted {
            root,
            suffixes,
            delay_ms,
            action,
            ..
        } => format!(
            "{} {} {}Watching {} for {} ({}, {}ms)\n",
            prefix,
            icon(Icon::Watch),
            tag,
            root,
            suffixes.join(", "),
            action,
            delay_ms
        ),
        WatchEvent::ChangeAccepted { path, ticket, .. } if style.verbose => format!(
            "{} {} {}Changed: {} {}\n",
            prefix,
            icon(Icon::Change),
            tag,
            path,
            ColoredText::dim(ticket.to_string()).render(style.color)
        ),
        WatchEvent::ActionStarted { path, action, .. } if action == "build" => format!(
            "{}\n{} {} {}{} updated, rebuilding\n",
            "=".repeat(theme::RULE_WIDTH),
            prefix,
            icon(Icon::Build),
            tag,
            path
        ),
        WatchEvent::ActionStarted { path, .. } => format!(
            "{} {} {}Reloading on file change: {}\n",
            prefix,
            icon(Icon::Reload),
            tag,
            path
        ),
        WatchEvent::StartupAction { action, .. } => {
            let what = if action == "build" {
                "Initial build"
            } else {
                "Opening viewer"
            };
            format!(
                "{} {} {}{}\n",
                prefix,
                icon(Icon::for_action(action)),
                tag,
                what
            )
        }
        WatchEvent::BuildOutput { output, .. } => {
            if output.ends_with('\n') {
                output.clone()
            } else {
                format!("{output}\n")
            }
        }
        WatchEvent::BuildComplete {
            success: true,
            duration_ms,
            ..
        } => format!(
            "{} {} {}{} in {}ms\n",
            prefix,
            icon(Icon::Success),
            tag,
            ColoredText::success("Build succeeded").render(style.color),
            duration_ms
        ),
        WatchEvent::BuildComplete {
            success: false,
            code,
            duration_ms,
            ..
        } => {
            let status = match code {
                Some(code) => format!("Build failed (exit code {code})"),
                None => "Build failed (terminated by signal)".to_string(),
            };
            format!(
                "{} {} {}{} in {}ms\n",
                prefix,
                icon(Icon::Failure),
                tag,
                ColoredText::error(status).bold().render(style.color),
                duration_ms
            )
        }
        WatchEvent::ViewOpened { entry, .. } => format!(
            "{} {} {}Viewer opened: {}\n",
            prefix,
            icon(Icon::Reload),
            tag,
            entry
        ),
        WatchEvent::Reloaded { path, .. } if style.verbose => format!(
            "{} {} {}Reloaded after {}\n",
            prefix,
            icon(Icon::Success),
            tag,
            path
        ),
        WatchEvent::ViewClosed { .. } => format!(
            "{} {} {}Viewer closed\n",
            prefix,
            icon(Icon::Closed),
            tag
        ),
        WatchEvent::Error { message, .. } => format!(
            "{} {} {}Error: {}\n",
            prefix,
            icon(Icon::Failure),
            tag,
            message
        ),
        WatchEvent::Shutdown => format!("\n{} {} Watch stopped.\n", prefix, icon(Icon::Watch)),
        WatchEvent::ChangeAccepted { .. } | WatchEvent::Reloaded { .. } => String::new(),
    }
}
