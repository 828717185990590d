use tracing::debug;

use crate::analyzers::{
    analyze_paragraphs, analyze_sentences, analyze_structure, analyze_tone, analyze_transitions,
    analyze_vocabulary, extract_closing_patterns, extract_opening_patterns,
    extract_signature_phrases, representative_sentences,
};
use crate::cleaner::clean_text;
use crate::segmenter::{char_len, split_paragraphs, split_sentences};
use crate::types::{Metadata, StyleProfile};

/// Build a style profile snapshot from raw documents.
///
/// Never fails: an empty corpus, or one with no extractable sentences,
/// yields a profile whose sections are all zero/empty.
pub fn analyze<S: AsRef<str>>(documents: &[S]) -> StyleProfile {
    let cleaned: Vec<String> = documents.iter().map(|d| clean_text(d.as_ref())).collect();

    let mut sentences: Vec<String> = Vec::new();
    let mut paragraphs: Vec<String> = Vec::new();
    for text in &cleaned {
        sentences.extend(split_sentences(text));
        paragraphs.extend(split_paragraphs(text));
    }

    debug!(
        documents = documents.len(),
        sentences = sentences.len(),
        paragraphs = paragraphs.len(),
        "analyzing corpus"
    );

    StyleProfile {
        metadata: Metadata {
            total_documents: documents.len(),
            total_characters: cleaned.iter().map(|t| char_len(t)).sum(),
        },
        sentence_stats: analyze_sentences(&sentences),
        paragraph_stats: analyze_paragraphs(&paragraphs),
        vocabulary: analyze_vocabulary(&cleaned),
        opening_patterns: extract_opening_patterns(&paragraphs),
        closing_patterns: extract_closing_patterns(&paragraphs),
        transition_analysis: analyze_transitions(&cleaned),
        tone_analysis: analyze_tone(&cleaned),
        structural_patterns: analyze_structure(&cleaned),
        signature_phrases: extract_signature_phrases(&cleaned),
        sample_sentences: representative_sentences(&sentences),
    }
}
