//! Noise removal for raw documents.
//!
//! Chat exports and pasted LLM output carry citation tokens, footnote markers
//! and placeholders that would otherwise leak into vocabulary and n-gram counts.

use regex::Regex;
use std::sync::LazyLock;

static NOISE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)citeturn\d+search\d+",
        r"(?i)turn\d+search\d+",
        r"(?i)\[citation needed\]",
        r"【\d+†source】",
        r"(?i)entity\s*\w+",
        r"(?m)^[ \t]*---[ \t]*$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static EXCESS_NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());
static EXCESS_SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Strip noise artifacts, collapse 3+ newlines to 2 and runs of spaces to 1, then trim.
pub fn clean_text(text: &str) -> String {
    let mut cleaned = text.to_string();

    for pattern in NOISE_PATTERNS.iter() {
        if pattern.is_match(&cleaned) {
            cleaned = pattern.replace_all(&cleaned, "").into_owned();
        }
    }

    let cleaned = EXCESS_NEWLINES.replace_all(&cleaned, "\n\n");
    let cleaned = EXCESS_SPACES.replace_all(&cleaned, " ");

    cleaned.trim().to_string()
}
