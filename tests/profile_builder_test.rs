/// Library-level tests for profile construction over realistic corpora.
mod helpers;

use helpers::{ENGLISH_EMAIL, KOREAN_REPORT};
use style_profile::analyze;
use style_profile::types::{
    Tone, BIGRAM_CAP, EDGE_RANK_CAP, SAMPLE_EDGE_CAP, SAMPLE_SENTENCE_CAP, TOP_WORDS_CAP,
    TRANSITION_RANK_CAP, TRIGRAM_CAP,
};

#[test]
fn short_email_sentences_greeting_and_signoff() {
    let profile = analyze(&["Dear Sam, Thank you for your time. Best regards, Alex."]);

    assert_eq!(profile.sentence_stats.total_sentences, 2);
    assert_eq!(profile.closing_patterns.signoff_patterns["Best regards"], 1);
    assert_eq!(profile.opening_patterns.greeting_patterns["Dear"], 1);
}

#[test]
fn empty_corpus_yields_empty_profile() {
    let docs: [&str; 0] = [];
    let profile = analyze(&docs);

    assert_eq!(profile.metadata.total_documents, 0);
    assert!(profile.is_empty());
    assert_eq!(profile.vocabulary.vocabulary_richness, 0.0);
    assert!(profile.sample_sentences.is_empty());
}

#[test]
fn bullet_list_detected() {
    let profile = analyze(&["- item one\n- item two"]);

    assert!(profile.structural_patterns.patterns.uses_bullet_points);
    assert_eq!(profile.structural_patterns.counts.bullet_count, 2);
}

#[test]
fn korean_report_is_formal() {
    let profile = analyze(&[KOREAN_REPORT]);
    let tone = &profile.tone_analysis;

    assert!(tone.korean_formality.formal_high >= 4);
    assert_eq!(tone.primary_korean_tone, Some(Tone::Formal));
    assert_eq!(profile.opening_patterns.greeting_patterns["안녕하세요"], 1);
    assert!(!profile.opening_patterns.greeting_patterns.contains_key("안녕"));
    assert_eq!(profile.closing_patterns.signoff_patterns["부탁드립니다"], 1);
}

#[test]
fn korean_transitions_counted_by_category() {
    let profile = analyze(&[KOREAN_REPORT]);
    let trans = &profile.transition_analysis;

    assert_eq!(trans.korean_by_category["additive"], 1);
    assert_eq!(trans.korean_by_category["causal"], 1);
    assert_eq!(trans.korean_by_category["concluding"], 0);
    assert!(trans.top_korean_transitions.iter().all(|(_, c)| *c > 0));
    // every category is reported even when unused
    assert_eq!(trans.english_by_category.len(), 6);
}

#[test]
fn email_markup_and_tone() {
    let profile = analyze(&[ENGLISH_EMAIL]);

    assert_eq!(profile.structural_patterns.counts.bullet_count, 2);
    assert!(!profile.structural_patterns.patterns.uses_numbering);
    assert_eq!(profile.tone_analysis.english_formality.formal, 2); // please, regards
    assert_eq!(profile.tone_analysis.primary_english_tone, Some(Tone::Formal));
}

#[test]
fn distribution_sums_to_hundred() {
    let profile = analyze(&[ENGLISH_EMAIL, KOREAN_REPORT]);
    let total = profile.sentence_stats.length_distribution.total();

    assert!(profile.sentence_stats.total_sentences > 0);
    assert!((total - 100.0).abs() < 1e-6, "distribution total was {total}");
}

#[test]
fn richness_bounded() {
    let profile = analyze(&[ENGLISH_EMAIL, KOREAN_REPORT]);
    let vocab = &profile.vocabulary;

    assert!(vocab.total_meaningful_words > 0);
    assert!(vocab.vocabulary_richness > 0.0 && vocab.vocabulary_richness <= 1.0);
}

#[test]
fn noise_is_cleaned_before_analysis() {
    let profile = analyze(&["Revenue grew this quarter citeturn0search3 as expected.\n\n\n\nMore later."]);

    assert!(profile.sample_sentences.iter().all(|s| !s.contains("citeturn")));
    assert!(profile
        .vocabulary
        .top_english_words
        .iter()
        .all(|(w, _)| !w.contains("cite") && !w.contains("turn")));
}

#[test]
fn caps_hold_on_large_corpus() {
    let docs: Vec<String> = (0..60)
        .map(|i| {
            format!(
                "Opening{i} words number{i} here. In addition we kept going with item{i} today!\n\n\
                 Sentence body {i} has enough characters to be sampled properly. Best regards, Team{i}"
            )
        })
        .collect();
    let profile = analyze(&docs);

    assert!(profile.vocabulary.top_english_words.len() <= TOP_WORDS_CAP);
    assert!(profile.vocabulary.top_korean_words.len() <= TOP_WORDS_CAP);
    assert!(profile.opening_patterns.common_first_words.len() <= EDGE_RANK_CAP);
    assert!(profile.opening_patterns.common_first_phrases.len() <= EDGE_RANK_CAP);
    assert!(profile.closing_patterns.common_last_phrases.len() <= EDGE_RANK_CAP);
    assert!(profile.opening_patterns.sample_openings.len() <= SAMPLE_EDGE_CAP);
    assert!(profile.transition_analysis.top_english_transitions.len() <= TRANSITION_RANK_CAP);
    assert!(profile.signature_phrases.signature_bigrams.len() <= BIGRAM_CAP);
    assert!(profile.signature_phrases.signature_trigrams.len() <= TRIGRAM_CAP);
    assert_eq!(profile.sample_sentences.len(), SAMPLE_SENTENCE_CAP);
    assert_eq!(profile.closing_patterns.signoff_patterns["Best regards"], 60);
}

#[test]
fn persisted_shape_round_trips() {
    let profile = analyze(&[ENGLISH_EMAIL, KOREAN_REPORT]);
    let json = serde_json::to_value(&profile).unwrap();

    assert!(json["vocabulary"]["top_english_words"][0].is_array());
    assert!(json["closing_patterns"]["signoff_patterns"].is_object());
    assert_eq!(json["tone_analysis"]["primary_korean_tone"], "formal");

    let back: style_profile::StyleProfile = serde_json::from_value(json).unwrap();
    assert_eq!(back, profile);
}

#[test]
fn profile_survives_json_text_round_trip() {
    let profile = analyze(&[ENGLISH_EMAIL, KOREAN_REPORT]);
    let text = serde_json::to_string_pretty(&profile).unwrap();
    let back: style_profile::StyleProfile = serde_json::from_str(&text).unwrap();

    assert_eq!(back, profile);
    assert_eq!(
        back.vocabulary.vocabulary_richness.to_bits(),
        profile.vocabulary.vocabulary_richness.to_bits()
    );
}
