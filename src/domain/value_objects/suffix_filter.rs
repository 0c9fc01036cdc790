//! SuffixFilter value object - decides which filenames are relevant

use std::path::Path;

/// Ordered set of filename suffixes.
///
/// Matching is a case-sensitive `ends_with` on the filename as text, so
/// `.js` matches `app.js` but not `app.json`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuffixFilter {
    suffixes: Vec<String>,
}

impl SuffixFilter {
    pub fn new<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for suffix in suffixes {
            let suffix = suffix.into();
            if !suffix.is_empty() && !list.contains(&suffix) {
                list.push(suffix);
            }
        }
        Self { suffixes: list }
    }

    pub fn matches(&self, filename: &Path) -> bool {
        let name = filename.to_string_lossy();
        self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}

impl std::fmt::Display for SuffixFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.suffixes.join(", "))
    }
}
