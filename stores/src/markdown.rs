//! Title and excerpt derivation from Markdown bodies.
//!
//! Deliberately regex-based, not a Markdown parse: the title is the first
//! `# `-prefixed line, the excerpt the first non-heading non-blank line.
//! Anything smarter would change what users see for existing posts.

use regex::Regex;
use std::sync::LazyLock;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# +(.+)$").expect("title pattern is valid"));

pub const DEFAULT_TITLE: &str = "Untitled";

const EXCERPT_MAX_CHARS: usize = 150;

/// First `# `-prefixed line, or [`DEFAULT_TITLE`] when the body has none.
pub fn derive_title(body: &str) -> String {
    TITLE_RE
        .captures(body)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// First non-heading, non-blank line, truncated to 150 characters with a
/// trailing `"..."`. Empty when the body has no such line.
pub fn derive_excerpt(body: &str) -> String {
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if line.chars().count() > EXCERPT_MAX_CHARS {
            let truncated: String = line.chars().take(EXCERPT_MAX_CHARS).collect();
            return format!("{truncated}...");
        }
        return line.to_string();
    }

    String::new()
}
