//! Incremental profile merging.
//!
//! Two snapshots are combined without the raw text they came from. Each
//! section is combined on its own terms:
//! - counts and totals are summed
//! - means and percentages are averaged, weighted by each side's item count
//! - min/max take the element-wise min/max
//! - ranked lists are unioned, counts summed, re-ranked and capped
//! - flags are OR-ed
//! - sample lists keep the newest entries first
//!
//! The merged sentence-length standard deviation is a count-weighted average
//! of the two inputs, not the pooled deviation. The pooled value would need
//! the per-side sum of squares, which a profile does not store.

use tracing::debug;

use crate::analyzers::ranking::{merge_ranked, merge_samples, sum_counts};
use crate::analyzers::tone::{english_tone, korean_tone};
use crate::analyzers::vocabulary::richness;
use crate::types::*;

/// A profile section that can absorb a newer snapshot of itself.
pub trait Combine: Clone {
    fn is_empty(&self) -> bool;

    /// Combine two non-empty sections. `self` is the older side.
    fn combine_nonempty(&self, newer: &Self) -> Self;

    /// An empty side leaves the other side untouched.
    fn combine(&self, newer: &Self) -> Self {
        if self.is_empty() {
            return newer.clone();
        }
        if newer.is_empty() {
            return self.clone();
        }
        self.combine_nonempty(newer)
    }
}

/// Merge an existing profile with a newly analyzed one into a new snapshot.
pub fn merge(existing: &StyleProfile, new: &StyleProfile) -> StyleProfile {
    if existing.is_empty() {
        return new.clone();
    }
    if new.is_empty() {
        return existing.clone();
    }

    let merged = StyleProfile {
        metadata: existing.metadata.combine(&new.metadata),
        sentence_stats: existing.sentence_stats.combine(&new.sentence_stats),
        paragraph_stats: existing.paragraph_stats.combine(&new.paragraph_stats),
        vocabulary: existing.vocabulary.combine(&new.vocabulary),
        opening_patterns: existing.opening_patterns.combine(&new.opening_patterns),
        closing_patterns: existing.closing_patterns.combine(&new.closing_patterns),
        transition_analysis: existing.transition_analysis.combine(&new.transition_analysis),
        tone_analysis: existing.tone_analysis.combine(&new.tone_analysis),
        structural_patterns: existing.structural_patterns.combine(&new.structural_patterns),
        signature_phrases: existing.signature_phrases.combine(&new.signature_phrases),
        sample_sentences: merge_samples(
            &new.sample_sentences,
            &existing.sample_sentences,
            SAMPLE_SENTENCE_CAP,
            SAMPLE_SENTENCE_CAP,
        ),
    };

    debug!(
        documents = merged.metadata.total_documents,
        sentences = merged.sentence_stats.total_sentences,
        "merged profiles"
    );

    merged
}

/// Mean of `a` over `na` items combined with mean of `b` over `nb` items.
fn weighted_mean(a: f64, na: usize, b: f64, nb: usize) -> f64 {
    let total = na + nb;
    if total == 0 {
        return 0.0;
    }
    (a * na as f64 + b * nb as f64) / total as f64
}

impl Combine for Metadata {
    fn is_empty(&self) -> bool {
        self.total_documents == 0 && self.total_characters == 0
    }

    fn combine_nonempty(&self, newer: &Self) -> Self {
        Metadata {
            total_documents: self.total_documents + newer.total_documents,
            total_characters: self.total_characters + newer.total_characters,
        }
    }
}

impl Combine for SentenceStats {
    fn is_empty(&self) -> bool {
        SentenceStats::is_empty(self)
    }

    fn combine_nonempty(&self, newer: &Self) -> Self {
        let (na, nb) = (self.total_sentences, newer.total_sentences);
        let mean = |a: f64, b: f64| weighted_mean(a, na, b, nb);
        let (da, db) = (&self.length_distribution, &newer.length_distribution);

        SentenceStats {
            avg_length_chars: mean(self.avg_length_chars, newer.avg_length_chars),
            // approximation, see module docs
            std_dev_length: mean(self.std_dev_length, newer.std_dev_length),
            avg_word_count: mean(self.avg_word_count, newer.avg_word_count),
            min_length: self.min_length.min(newer.min_length),
            max_length: self.max_length.max(newer.max_length),
            total_sentences: na + nb,
            length_distribution: LengthDistribution {
                short_pct: mean(da.short_pct, db.short_pct),
                medium_pct: mean(da.medium_pct, db.medium_pct),
                long_pct: mean(da.long_pct, db.long_pct),
            },
        }
    }
}

impl Combine for ParagraphStats {
    fn is_empty(&self) -> bool {
        ParagraphStats::is_empty(self)
    }

    fn combine_nonempty(&self, newer: &Self) -> Self {
        let (na, nb) = (self.total_paragraphs, newer.total_paragraphs);
        let mean = |a: f64, b: f64| weighted_mean(a, na, b, nb);

        ParagraphStats {
            avg_length_chars: mean(self.avg_length_chars, newer.avg_length_chars),
            avg_sentences_per_para: mean(self.avg_sentences_per_para, newer.avg_sentences_per_para),
            total_paragraphs: na + nb,
            single_sentence_para_pct: mean(
                self.single_sentence_para_pct,
                newer.single_sentence_para_pct,
            ),
        }
    }
}

impl Combine for Vocabulary {
    fn is_empty(&self) -> bool {
        Vocabulary::is_empty(self)
    }

    /// `unique_words` is summed: the size of the union is not recoverable
    /// from two snapshots, so richness is an upper estimate after merging.
    fn combine_nonempty(&self, newer: &Self) -> Self {
        let total = self.total_meaningful_words + newer.total_meaningful_words;
        let unique = self.unique_words + newer.unique_words;

        Vocabulary {
            total_meaningful_words: total,
            unique_words: unique,
            vocabulary_richness: richness(unique, total),
            top_korean_words: merge_ranked(&self.top_korean_words, &newer.top_korean_words, TOP_WORDS_CAP),
            top_english_words: merge_ranked(&self.top_english_words, &newer.top_english_words, TOP_WORDS_CAP),
        }
    }
}

/// Catalogue counts are summed; entries that end up at zero are dropped.
fn merge_catalogue(older: &CountMap, newer: &CountMap) -> CountMap {
    let mut merged = sum_counts(older, newer);
    merged.retain(|_, count| *count > 0);
    merged
}

impl Combine for OpeningPatterns {
    fn is_empty(&self) -> bool {
        OpeningPatterns::is_empty(self)
    }

    fn combine_nonempty(&self, newer: &Self) -> Self {
        OpeningPatterns {
            common_first_words: merge_ranked(&self.common_first_words, &newer.common_first_words, EDGE_RANK_CAP),
            common_first_phrases: merge_ranked(&self.common_first_phrases, &newer.common_first_phrases, EDGE_RANK_CAP),
            greeting_patterns: merge_catalogue(&self.greeting_patterns, &newer.greeting_patterns),
            sample_openings: merge_samples(
                &newer.sample_openings,
                &self.sample_openings,
                SAMPLE_EDGE_CAP / 2,
                SAMPLE_EDGE_CAP,
            ),
        }
    }
}

impl Combine for ClosingPatterns {
    fn is_empty(&self) -> bool {
        ClosingPatterns::is_empty(self)
    }

    fn combine_nonempty(&self, newer: &Self) -> Self {
        ClosingPatterns {
            common_last_words: merge_ranked(&self.common_last_words, &newer.common_last_words, EDGE_RANK_CAP),
            common_last_phrases: merge_ranked(&self.common_last_phrases, &newer.common_last_phrases, EDGE_RANK_CAP),
            signoff_patterns: merge_catalogue(&self.signoff_patterns, &newer.signoff_patterns),
            sample_closings: merge_samples(
                &newer.sample_closings,
                &self.sample_closings,
                SAMPLE_EDGE_CAP / 2,
                SAMPLE_EDGE_CAP,
            ),
        }
    }
}

impl Combine for TransitionAnalysis {
    fn is_empty(&self) -> bool {
        TransitionAnalysis::is_empty(self)
    }

    fn combine_nonempty(&self, newer: &Self) -> Self {
        TransitionAnalysis {
            korean_by_category: sum_counts(&self.korean_by_category, &newer.korean_by_category),
            english_by_category: sum_counts(&self.english_by_category, &newer.english_by_category),
            top_korean_transitions: merge_ranked(
                &self.top_korean_transitions,
                &newer.top_korean_transitions,
                TRANSITION_RANK_CAP,
            ),
            top_english_transitions: merge_ranked(
                &self.top_english_transitions,
                &newer.top_english_transitions,
                TRANSITION_RANK_CAP,
            ),
        }
    }
}

impl Combine for ToneAnalysis {
    fn is_empty(&self) -> bool {
        ToneAnalysis::is_empty(self)
    }

    /// Marker counts are summed and the primary tones re-derived from the sums.
    fn combine_nonempty(&self, newer: &Self) -> Self {
        let (ka, kb) = (&self.korean_formality, &newer.korean_formality);
        let korean_formality = KoreanFormality {
            formal_high: ka.formal_high + kb.formal_high,
            formal_polite: ka.formal_polite + kb.formal_polite,
            informal: ka.informal + kb.informal,
        };

        let (ea, eb) = (&self.english_formality, &newer.english_formality);
        let english_formality = EnglishFormality {
            formal: ea.formal + eb.formal,
            polite: ea.polite + eb.polite,
            casual: ea.casual + eb.casual,
        };

        let (xa, xb) = (&self.emotional_indicators, &newer.emotional_indicators);
        let emotional_indicators = EmotionalIndicators {
            enthusiastic: xa.enthusiastic + xb.enthusiastic,
            cautious: xa.cautious + xb.cautious,
            direct: xa.direct + xb.direct,
        };

        ToneAnalysis {
            primary_korean_tone: Some(korean_tone(&korean_formality)),
            primary_english_tone: Some(english_tone(&english_formality)),
            korean_formality,
            english_formality,
            emotional_indicators,
        }
    }
}

impl Combine for StructuralPatterns {
    fn is_empty(&self) -> bool {
        StructuralPatterns::is_empty(self)
    }

    fn combine_nonempty(&self, newer: &Self) -> Self {
        let (pa, pb) = (&self.patterns, &newer.patterns);
        let (ca, cb) = (&self.counts, &newer.counts);

        StructuralPatterns {
            patterns: StructureFlags {
                uses_bullet_points: pa.uses_bullet_points || pb.uses_bullet_points,
                uses_numbering: pa.uses_numbering || pb.uses_numbering,
                uses_headers: pa.uses_headers || pb.uses_headers,
                uses_bold: pa.uses_bold || pb.uses_bold,
                uses_code_blocks: pa.uses_code_blocks || pb.uses_code_blocks,
                uses_tables: pa.uses_tables || pb.uses_tables,
            },
            counts: StructureCounts {
                bullet_count: ca.bullet_count + cb.bullet_count,
                number_count: ca.number_count + cb.number_count,
                header_count: ca.header_count + cb.header_count,
                question_count: ca.question_count + cb.question_count,
            },
        }
    }
}

impl Combine for SignaturePhrases {
    fn is_empty(&self) -> bool {
        SignaturePhrases::is_empty(self)
    }

    fn combine_nonempty(&self, newer: &Self) -> Self {
        SignaturePhrases {
            signature_bigrams: merge_ranked(&self.signature_bigrams, &newer.signature_bigrams, BIGRAM_CAP),
            signature_trigrams: merge_ranked(&self.signature_trigrams, &newer.signature_trigrams, TRIGRAM_CAP),
        }
    }
}
