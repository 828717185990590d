use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ranked (item, count) pairs, sorted by count descending, ties in first-seen order.
/// Serializes as `[["item", 3], ...]`.
pub type Ranked = Vec<(String, usize)>;

/// Label → count mapping that keeps insertion order.
pub type CountMap = IndexMap<String, usize>;

// --- Caps for bounded lists ---

pub const TOP_WORDS_CAP: usize = 20;
pub const EDGE_RANK_CAP: usize = 15;
pub const TRANSITION_RANK_CAP: usize = 10;
pub const BIGRAM_CAP: usize = 15;
pub const TRIGRAM_CAP: usize = 10;
pub const SAMPLE_SENTENCE_CAP: usize = 15;
pub const SAMPLE_EDGE_CAP: usize = 10;

/// Statistical fingerprint of a writer's corpus.
///
/// Every field is `#[serde(default)]` so profiles written by older versions,
/// or with whole sections missing, still load as zero/empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleProfile {
    pub metadata: Metadata,
    pub sentence_stats: SentenceStats,
    pub paragraph_stats: ParagraphStats,
    pub vocabulary: Vocabulary,
    pub opening_patterns: OpeningPatterns,
    pub closing_patterns: ClosingPatterns,
    pub transition_analysis: TransitionAnalysis,
    pub tone_analysis: ToneAnalysis,
    pub structural_patterns: StructuralPatterns,
    pub signature_phrases: SignaturePhrases,
    pub sample_sentences: Vec<String>,
}

impl StyleProfile {
    /// True when no section carries any data.
    pub fn is_empty(&self) -> bool {
        self.metadata.total_documents == 0
            && self.metadata.total_characters == 0
            && self.sentence_stats.is_empty()
            && self.paragraph_stats.is_empty()
            && self.vocabulary.is_empty()
            && self.opening_patterns.is_empty()
            && self.closing_patterns.is_empty()
            && self.transition_analysis.is_empty()
            && self.tone_analysis.is_empty()
            && self.structural_patterns.is_empty()
            && self.signature_phrases.is_empty()
            && self.sample_sentences.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    pub total_documents: usize,
    pub total_characters: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceStats {
    pub avg_length_chars: f64,
    pub std_dev_length: f64,
    pub avg_word_count: f64,
    pub min_length: usize,
    pub max_length: usize,
    pub total_sentences: usize,
    pub length_distribution: LengthDistribution,
}

impl SentenceStats {
    pub fn is_empty(&self) -> bool {
        self.total_sentences == 0
    }
}

/// Share of sentences per length bucket, in percent.
/// short: < 50 chars, medium: 50..150, long: >= 150.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LengthDistribution {
    pub short_pct: f64,
    pub medium_pct: f64,
    pub long_pct: f64,
}

impl LengthDistribution {
    pub fn total(&self) -> f64 {
        self.short_pct + self.medium_pct + self.long_pct
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStats {
    pub avg_length_chars: f64,
    pub avg_sentences_per_para: f64,
    pub total_paragraphs: usize,
    pub single_sentence_para_pct: f64,
}

impl ParagraphStats {
    pub fn is_empty(&self) -> bool {
        self.total_paragraphs == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub total_meaningful_words: usize,
    pub unique_words: usize,
    pub vocabulary_richness: f64,
    pub top_korean_words: Ranked,
    pub top_english_words: Ranked,
}

impl Vocabulary {
    pub fn is_empty(&self) -> bool {
        self.total_meaningful_words == 0
            && self.unique_words == 0
            && self.top_korean_words.is_empty()
            && self.top_english_words.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpeningPatterns {
    pub common_first_words: Ranked,
    pub common_first_phrases: Ranked,
    pub greeting_patterns: CountMap,
    pub sample_openings: Vec<String>,
}

impl OpeningPatterns {
    pub fn is_empty(&self) -> bool {
        self.common_first_words.is_empty()
            && self.common_first_phrases.is_empty()
            && self.greeting_patterns.is_empty()
            && self.sample_openings.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosingPatterns {
    pub common_last_words: Ranked,
    pub common_last_phrases: Ranked,
    pub signoff_patterns: CountMap,
    pub sample_closings: Vec<String>,
}

impl ClosingPatterns {
    pub fn is_empty(&self) -> bool {
        self.common_last_words.is_empty()
            && self.common_last_phrases.is_empty()
            && self.signoff_patterns.is_empty()
            && self.sample_closings.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionAnalysis {
    pub korean_by_category: CountMap,
    pub english_by_category: CountMap,
    pub top_korean_transitions: Ranked,
    pub top_english_transitions: Ranked,
}

impl TransitionAnalysis {
    pub fn is_empty(&self) -> bool {
        self.korean_by_category.values().all(|&c| c == 0)
            && self.english_by_category.values().all(|&c| c == 0)
            && self.top_korean_transitions.is_empty()
            && self.top_english_transitions.is_empty()
    }
}

/// Register classification derived from formality marker counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Casual,
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tone::Formal => write!(f, "formal"),
            Tone::Casual => write!(f, "casual"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KoreanFormality {
    /// 습니다/입니다 style endings
    pub formal_high: usize,
    /// 해요/세요 style endings
    pub formal_polite: usize,
    pub informal: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnglishFormality {
    pub formal: usize,
    pub polite: usize,
    pub casual: usize,
}

/// Informational only; never feeds tone classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionalIndicators {
    pub enthusiastic: usize,
    pub cautious: usize,
    pub direct: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneAnalysis {
    pub korean_formality: KoreanFormality,
    pub english_formality: EnglishFormality,
    /// `None` only for profiles persisted without a tone section.
    pub primary_korean_tone: Option<Tone>,
    pub primary_english_tone: Option<Tone>,
    pub emotional_indicators: EmotionalIndicators,
}

impl ToneAnalysis {
    pub fn is_empty(&self) -> bool {
        self.korean_formality == KoreanFormality::default()
            && self.english_formality == EnglishFormality::default()
            && self.emotional_indicators == EmotionalIndicators::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureFlags {
    pub uses_bullet_points: bool,
    pub uses_numbering: bool,
    pub uses_headers: bool,
    pub uses_bold: bool,
    pub uses_code_blocks: bool,
    pub uses_tables: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureCounts {
    pub bullet_count: usize,
    pub number_count: usize,
    pub header_count: usize,
    pub question_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralPatterns {
    pub patterns: StructureFlags,
    pub counts: StructureCounts,
}

impl StructuralPatterns {
    pub fn is_empty(&self) -> bool {
        self.patterns == StructureFlags::default() && self.counts == StructureCounts::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignaturePhrases {
    pub signature_bigrams: Ranked,
    pub signature_trigrams: Ranked,
}

impl SignaturePhrases {
    pub fn is_empty(&self) -> bool {
        self.signature_bigrams.is_empty() && self.signature_trigrams.is_empty()
    }
}
