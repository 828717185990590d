//! Sentence, paragraph and word segmentation for Korean/English text.

use regex::Regex;
use std::sync::LazyLock;

/// Sentence-final punctuation followed by whitespace.
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?。]\s+").unwrap());

/// Fragments made only of bullets, digits, punctuation or symbols.
static MARKUP_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\s\d\p{P}\p{S}]+$").unwrap());

static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n[ \t]*\n").unwrap());

/// Latin or Hangul-syllable words.
static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[a-zA-Z가-힣]+\b").unwrap());

/// Fragments at or below this many characters are not sentences.
const MIN_SENTENCE_CHARS: usize = 10;

/// Split text into sentences, dropping short or markup-only fragments.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut pieces: Vec<&str> = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        let punct_len = m.as_str().chars().next().map_or(1, char::len_utf8);
        pieces.push(&text[start..m.start() + punct_len]);
        start = m.end();
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|s| is_sentence(s))
        .map(str::to_string)
        .collect()
}

fn is_sentence(fragment: &str) -> bool {
    fragment.chars().count() > MIN_SENTENCE_CHARS && !MARKUP_ONLY.is_match(fragment)
}

/// Split text on blank lines into trimmed, non-empty paragraphs.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    BLANK_LINE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Alphabetic word tokens (Latin + Hangul), in order of appearance.
pub fn word_tokens(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Character count, the unit every length statistic is measured in.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// First `n` characters of `s`.
pub fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Last `n` characters of `s`.
pub fn take_last_chars(s: &str, n: usize) -> String {
    let len = char_len(s);
    s.chars().skip(len.saturating_sub(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_english_sentences() {
        let sentences = split_sentences("Dear Sam, Thank you for your time. Best regards, Alex.");
        assert_eq!(
            sentences,
            vec!["Dear Sam, Thank you for your time.", "Best regards, Alex."]
        );
    }

    #[test]
    fn test_split_korean_sentences() {
        let sentences =
            split_sentences("회의 내용을 정리해서 공유드립니다. 주요 논의 사항은 다음과 같습니다.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].ends_with("공유드립니다."));
    }

    #[test]
    fn test_short_fragments_dropped() {
        let sentences = split_sentences("Ok. Sure! This one is long enough to keep.");
        assert_eq!(sentences, vec!["This one is long enough to keep."]);
    }

    #[test]
    fn test_markup_only_fragments_dropped() {
        let sentences = split_sentences("- - - - 12) ### *** •••");
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_cjk_full_stop() {
        let sentences = split_sentences("これは最初の長い文です。 これは二番目の長い文です。");
        assert_eq!(sentences.len(), 2);
    }

    #[test]
    fn test_split_paragraphs() {
        let paragraphs = split_paragraphs("first para\n\n  \n\nsecond para\n \nthird");
        assert_eq!(paragraphs, vec!["first para", "second para", "third"]);
    }

    #[test]
    fn test_split_empty_text() {
        assert!(split_sentences("").is_empty());
        assert!(split_paragraphs("").is_empty());
    }

    #[test]
    fn test_word_tokens_mixed_script() {
        let tokens = word_tokens("conventional 커밋을 3번 해줘, ok?");
        assert_eq!(tokens, vec!["conventional", "커밋을", "해줘", "ok"]);
    }

    #[test]
    fn test_take_last_chars_multibyte() {
        assert_eq!(take_last_chars("안녕하세요", 2), "세요");
        assert_eq!(take_chars("안녕하세요", 2), "안녕");
        assert_eq!(take_last_chars("ab", 5), "ab");
    }
}
