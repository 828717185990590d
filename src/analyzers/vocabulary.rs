use regex::Regex;
use std::sync::LazyLock;

use crate::analyzers::lexicon::{ENGLISH_STOPWORDS, KOREAN_PARTICLES};
use crate::analyzers::ranking::FrequencyTable;
use crate::segmenter::{char_len, word_tokens};
use crate::types::{Ranked, Vocabulary, TOP_WORDS_CAP};

/// Leftovers of citation markup that survive cleaning. Anything starting with
/// one of these stems is dropped, so "turned" and "cited" go but "return" stays.
static NOISE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:turn|search|cite|entity)").unwrap());

static HANGUL_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[가-힣]+$").unwrap());
static LATIN_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

/// How many of the most frequent words are split into the per-language lists.
const TOP_WORDS_POOL: usize = 50;

/// Word-frequency profile of the cleaned corpus.
pub fn analyze_vocabulary(texts: &[String]) -> Vocabulary {
    let combined = texts.join(" ").to_lowercase();

    let table: FrequencyTable = word_tokens(&combined)
        .into_iter()
        .filter(|w| is_meaningful(w))
        .collect();

    let total = table.total();
    let unique = table.unique();
    let top = table.top(TOP_WORDS_POOL);

    Vocabulary {
        total_meaningful_words: total,
        unique_words: unique,
        vocabulary_richness: richness(unique, total),
        top_korean_words: select(&top, &HANGUL_WORD),
        top_english_words: select(&top, &LATIN_WORD),
    }
}

/// `unique / total`, 0 for an empty corpus.
pub fn richness(unique: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        unique as f64 / total as f64
    }
}

fn is_meaningful(word: &str) -> bool {
    char_len(word) > 1
        && !ENGLISH_STOPWORDS.contains(word)
        && !KOREAN_PARTICLES.contains(word)
        && !NOISE_TOKEN.is_match(word)
}

fn select(top: &Ranked, script: &Regex) -> Ranked {
    top.iter()
        .filter(|(w, _)| script.is_match(w))
        .take(TOP_WORDS_CAP)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_stopwords_and_particles() {
        let texts = vec!["The report is ready and the 보고서 는 완료".to_string()];
        let vocab = analyze_vocabulary(&texts);
        // report, ready, 보고서, 완료
        assert_eq!(vocab.total_meaningful_words, 4);
        assert_eq!(vocab.unique_words, 4);
        assert_eq!(vocab.top_english_words[0], ("report".to_string(), 1));
        assert_eq!(vocab.top_korean_words[0], ("보고서".to_string(), 1));
    }

    #[test]
    fn test_counts_are_case_insensitive() {
        let texts = vec!["Rust rust RUST compiler".to_string()];
        let vocab = analyze_vocabulary(&texts);
        assert_eq!(vocab.top_english_words[0], ("rust".to_string(), 3));
        assert!((vocab.vocabulary_richness - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_noise_tokens_removed() {
        let texts = vec!["citeturn search valid words".to_string()];
        let vocab = analyze_vocabulary(&texts);
        assert_eq!(vocab.total_meaningful_words, 2);
    }

    #[test]
    fn test_noise_stems_drop_derived_words() {
        let texts = vec!["searching turned entitled cited report".to_string()];
        let vocab = analyze_vocabulary(&texts);
        // entitled, report
        assert_eq!(vocab.total_meaningful_words, 2);
        let words: Vec<&str> = vocab.top_english_words.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["entitled", "report"]);
    }

    #[test]
    fn test_noise_stem_only_matches_at_start() {
        let texts = vec!["return overturn research".to_string()];
        let vocab = analyze_vocabulary(&texts);
        assert_eq!(vocab.total_meaningful_words, 3);
    }

    #[test]
    fn test_mixed_script_tokens_counted_but_not_listed() {
        let texts = vec!["commit으로 정리".to_string()];
        let vocab = analyze_vocabulary(&texts);
        assert_eq!(vocab.total_meaningful_words, 2);
        assert!(vocab.top_english_words.is_empty());
        assert_eq!(vocab.top_korean_words, vec![("정리".to_string(), 1)]);
    }

    #[test]
    fn test_empty_corpus_has_zero_richness() {
        let vocab = analyze_vocabulary(&[]);
        assert_eq!(vocab.total_meaningful_words, 0);
        assert_eq!(vocab.vocabulary_richness, 0.0);
    }

    #[test]
    fn test_top_lists_capped() {
        let words: Vec<String> = (0..40).map(|i| format!("word{}", "x".repeat(i + 1))).collect();
        let texts = vec![words.join(" ")];
        let vocab = analyze_vocabulary(&texts);
        assert_eq!(vocab.top_english_words.len(), TOP_WORDS_CAP);
    }
}
