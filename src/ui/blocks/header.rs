use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// One watched target as listed in the header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetRow {
    pub name: String,
    pub root: String,
    pub suffixes: String,
    pub action: String,
    pub delay_ms: u64,
}

/// Banner printed once before watching starts: one aligned row per target
#[derive(Debug, Clone, Default)]
pub struct WatchHeader {
    rows: Vec<TargetRow>,
}

impl WatchHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, row: TargetRow) {
        self.rows.push(row);
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = ColoredText::info("settle").bold().render(supports_color);
        let mut out = format!(
            "{} {} {}\n",
            Icon::Watch.colored(supports_color, supports_unicode),
            title,
            ColoredText::dim(env!("CARGO_PKG_VERSION")).render(supports_color)
        );

        let width = self.rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
        for row in &self.rows {
            out.push_str(&format!(
                "  {:<width$}  {} {} ({}) after {}ms\n",
                row.name,
                Icon::for_action(&row.action).render(supports_unicode),
                row.root,
                row.suffixes,
                row.delay_ms,
            ));
        }
        out.push_str(&ColoredText::dim("Press Ctrl+C to stop").render(supports_color));
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, root: &str, suffixes: &str, action: &str) -> TargetRow {
        TargetRow {
            name: name.to_string(),
            root: root.to_string(),
            suffixes: suffixes.to_string(),
            action: action.to_string(),
            delay_ms: 100,
        }
    }

    #[test]
    fn rows_align_on_the_longest_target_name() {
        let mut header = WatchHeader::new();
        header.add(row("elm", "src", ".elm", "build"));
        header.add(row("electron", ".", ".js, .html", "reload"));

        let rendered = header.render(false, false);
        let lines: Vec<_> = rendered.lines().collect();
        assert!(lines[0].starts_with("[WATCH] settle "));
        assert_eq!(lines[1], "  elm       [BUILD] src (.elm) after 100ms");
        assert_eq!(lines[2], "  electron  [RELOAD] . (.js, .html) after 100ms");
        assert_eq!(lines[3], "Press Ctrl+C to stop");
    }

    #[test]
    fn header_without_targets_still_has_hint() {
        let rendered = WatchHeader::new().render(false, true);
        assert!(rendered.ends_with("Press Ctrl+C to stop\n"));
    }
}
