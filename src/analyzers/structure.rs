use regex::Regex;
use std::sync::LazyLock;

use crate::types::{StructuralPatterns, StructureCounts, StructureFlags};

static BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-•*][ \t]").unwrap());
static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\d+[.)][ \t]").unwrap());
static MARKDOWN_HEADER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#+[ \t]").unwrap());
/// Markdown headers or short capitalised lines ending in a colon ("Next steps:").
static HEADER_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#+[ \t]|^[A-Z][^.!?\n]{0,50}:$").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*[^*]+\*\*").unwrap());
static TABLE_ROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\|.+\|").unwrap());

const CODE_FENCE: &str = "```";

/// Markup usage flags and counts across the corpus.
pub fn analyze_structure(texts: &[String]) -> StructuralPatterns {
    let combined = texts.join("\n");

    let counts = StructureCounts {
        bullet_count: BULLET.find_iter(&combined).count(),
        number_count: NUMBERED.find_iter(&combined).count(),
        header_count: MARKDOWN_HEADER.find_iter(&combined).count(),
        question_count: combined.matches('?').count(),
    };

    let patterns = StructureFlags {
        uses_bullet_points: counts.bullet_count > 0,
        uses_numbering: counts.number_count > 0,
        uses_headers: HEADER_LIKE.is_match(&combined),
        uses_bold: BOLD.is_match(&combined),
        uses_code_blocks: combined.contains(CODE_FENCE),
        uses_tables: TABLE_ROW.is_match(&combined),
    };

    StructuralPatterns { patterns, counts }
}
