use settle::config::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn render_config_warnings(warnings: &[ConfigWarning], supports_unicode: bool) -> String {
    let mut out = String::new();
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        out.push_str(&format!(
            "{} Unknown config key '{}' in {}\n",
            Icon::Warning.render(supports_unicode),
            w.key,
            location
        ));
        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

pub fn print_config_warnings(warnings: &[ConfigWarning], supports_unicode: bool) {
    eprint!("{}", render_config_warnings(warnings, supports_unicode));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_includes_line_and_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "delay_msec".to_string(),
            file: PathBuf::from("settle.toml"),
            line: Some(2),
            suggestion: Some("delay_ms".to_string()),
        }];
        let rendered = render_config_warnings(&warnings, false);
        assert_eq!(
            rendered,
            "[WARN] Unknown config key 'delay_msec' in settle.toml:2\n   Did you mean 'delay_ms'?\n"
        );
    }

    #[test]
    fn warning_without_line() {
        let warnings = vec![ConfigWarning {
            key: "extra".to_string(),
            file: PathBuf::from("settle.toml"),
            line: None,
            suggestion: None,
        }];
        assert_eq!(
            render_config_warnings(&warnings, false),
            "[WARN] Unknown config key 'extra' in settle.toml\n"
        );
    }
}
