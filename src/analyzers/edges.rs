//! Paragraph opening and closing patterns.

use crate::analyzers::lexicon::{PhrasePattern, GREETINGS, SIGNOFFS};
use crate::analyzers::ranking::FrequencyTable;
use crate::segmenter::{char_len, split_sentences, take_chars, take_last_chars};
use crate::types::{
    ClosingPatterns, CountMap, OpeningPatterns, Ranked, EDGE_RANK_CAP, SAMPLE_EDGE_CAP,
};

/// Opening/closing excerpts are cut to this many characters.
const EXCERPT_CHARS: usize = 100;

pub fn extract_opening_patterns(paragraphs: &[String]) -> OpeningPatterns {
    let openings: Vec<String> = paragraphs.iter().map(|p| opening_excerpt(p)).collect();
    let (words, phrases) = rank_edges(&openings, Edge::Leading);

    OpeningPatterns {
        common_first_words: words,
        common_first_phrases: phrases,
        greeting_patterns: detect_catalogue(&openings, GREETINGS),
        sample_openings: openings.into_iter().take(SAMPLE_EDGE_CAP).collect(),
    }
}

pub fn extract_closing_patterns(paragraphs: &[String]) -> ClosingPatterns {
    let closings: Vec<String> = paragraphs.iter().map(|p| closing_excerpt(p)).collect();
    let (words, phrases) = rank_edges(&closings, Edge::Trailing);

    ClosingPatterns {
        common_last_words: words,
        common_last_phrases: phrases,
        signoff_patterns: detect_catalogue(&closings, SIGNOFFS),
        sample_closings: closings.into_iter().take(SAMPLE_EDGE_CAP).collect(),
    }
}

/// First sentence, or the paragraph head when no sentence survives segmentation.
fn opening_excerpt(paragraph: &str) -> String {
    let sentences = split_sentences(paragraph);
    let source = sentences.first().map(String::as_str).unwrap_or(paragraph);
    take_chars(source, EXCERPT_CHARS)
}

/// Last sentence, or the paragraph tail when no sentence survives segmentation.
fn closing_excerpt(paragraph: &str) -> String {
    let sentences = split_sentences(paragraph);
    let source = sentences.last().map(String::as_str).unwrap_or(paragraph);
    take_last_chars(source, EXCERPT_CHARS)
}

#[derive(Clone, Copy)]
enum Edge {
    Leading,
    Trailing,
}

/// Rank edge words and 2-/3-word edge phrases.
fn rank_edges(excerpts: &[String], edge: Edge) -> (Ranked, Ranked) {
    let mut words = FrequencyTable::new();
    let mut phrases = FrequencyTable::new();

    for excerpt in excerpts {
        let tokens: Vec<&str> = excerpt.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        let n = tokens.len();
        let slice = |len: usize| match edge {
            Edge::Leading => tokens[..len].join(" "),
            Edge::Trailing => tokens[n - len..].join(" "),
        };

        words.add(&slice(1));
        for len in 2..=3 {
            if n >= len {
                phrases.add(&slice(len));
            }
        }
    }

    (words.top(EDGE_RANK_CAP), phrases.top(EDGE_RANK_CAP))
}

/// Count excerpts matching each catalogue entry; unmatched entries are omitted.
fn detect_catalogue(excerpts: &[String], catalogue: &[PhrasePattern]) -> CountMap {
    let mut counts = CountMap::new();

    for excerpt in excerpts {
        let lowered = excerpt.to_lowercase();
        let mut matched: Vec<&str> = Vec::new();

        for pattern in catalogue {
            if pattern.unless.is_some_and(|label| matched.contains(&label)) {
                continue;
            }
            if pattern.max_chars.is_some_and(|max| char_len(excerpt) >= max) {
                continue;
            }
            if pattern.needles.iter().any(|needle| matches_needle(&lowered, needle, pattern.anchored)) {
                matched.push(pattern.label);
                *counts.entry(pattern.label.to_string()).or_insert(0) += 1;
            }
        }
    }

    counts
}

fn matches_needle(text: &str, needle: &str, anchored: bool) -> bool {
    if !anchored {
        return text.contains(needle);
    }
    match text.strip_prefix(needle) {
        Some(rest) => !rest.starts_with(|c: char| c.is_alphanumeric() || c == '_'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_greeting_and_signoff_detection() {
        let paragraphs = owned(&["Dear Sam, Thank you for your time. Best regards, Alex."]);
        let opening = extract_opening_patterns(&paragraphs);
        let closing = extract_closing_patterns(&paragraphs);

        assert_eq!(opening.greeting_patterns.get("Dear"), Some(&1));
        assert_eq!(opening.greeting_patterns.get("Thank you"), Some(&1));
        assert_eq!(closing.signoff_patterns.get("Best regards"), Some(&1));
        assert!(closing.signoff_patterns.get("Best").is_none());
    }

    #[test]
    fn test_korean_greeting_suppresses_short_form() {
        let paragraphs = owned(&["안녕하세요, 오늘 회의 내용을 공유드립니다.", "안녕, 오늘 저녁에 시간 괜찮아?"]);
        let opening = extract_opening_patterns(&paragraphs);
        assert_eq!(opening.greeting_patterns.get("안녕하세요"), Some(&1));
        assert_eq!(opening.greeting_patterns.get("안녕"), Some(&1));
    }

    #[test]
    fn test_hi_only_counts_at_start() {
        let paragraphs = owned(&["Hi team, the build is green again.", "Nothing this time, highly unusual."]);
        let opening = extract_opening_patterns(&paragraphs);
        assert_eq!(opening.greeting_patterns.get("Hi"), Some(&1));
    }

    #[test]
    fn test_zero_count_patterns_omitted() {
        let paragraphs = owned(&["Plain text paragraph without any catalogue phrase."]);
        let opening = extract_opening_patterns(&paragraphs);
        let closing = extract_closing_patterns(&paragraphs);
        assert!(opening.greeting_patterns.is_empty());
        assert!(closing.signoff_patterns.is_empty());
    }

    #[test]
    fn test_first_and_last_words_ranked() {
        let paragraphs = owned(&[
            "So we agreed on the plan today. That is settled now.",
            "So the next step is review. Please send it soon.",
        ]);
        let opening = extract_opening_patterns(&paragraphs);
        let closing = extract_closing_patterns(&paragraphs);

        assert_eq!(opening.common_first_words[0], ("So".to_string(), 2));
        assert_eq!(opening.common_first_phrases[0], ("So we".to_string(), 1));
        assert_eq!(closing.common_last_words[0], ("now.".to_string(), 1));
        assert_eq!(closing.sample_closings, vec!["That is settled now.", "Please send it soon."]);
    }

    #[test]
    fn test_unsegmentable_paragraph_falls_back_to_raw_text() {
        let paragraphs = owned(&["Hi"]);
        let opening = extract_opening_patterns(&paragraphs);
        assert_eq!(opening.sample_openings, vec!["Hi"]);
        assert_eq!(opening.greeting_patterns.get("Hi"), Some(&1));
    }

    #[test]
    fn test_closing_excerpt_keeps_tail() {
        let long = format!("{} end of the line.", "word ".repeat(40));
        let closing = closing_excerpt(&long);
        assert_eq!(char_len(&closing), EXCERPT_CHARS);
        assert!(closing.ends_with("end of the line."));
    }

    #[test]
    fn test_empty_paragraphs() {
        let opening = extract_opening_patterns(&[]);
        assert!(opening.is_empty());
    }
}
