use crate::segmenter::{char_len, split_sentences};
use crate::types::{LengthDistribution, ParagraphStats, SentenceStats, SAMPLE_SENTENCE_CAP};

const SHORT_SENTENCE_CHARS: usize = 50;
const LONG_SENTENCE_CHARS: usize = 150;

/// Representative sentences must be strictly inside this character range.
const SAMPLE_MIN_CHARS: usize = 30;
const SAMPLE_MAX_CHARS: usize = 300;

/// Length statistics over the corpus-wide sentence pool.
pub fn analyze_sentences(sentences: &[String]) -> SentenceStats {
    if sentences.is_empty() {
        return SentenceStats::default();
    }

    let n = sentences.len() as f64;
    let lengths: Vec<usize> = sentences.iter().map(|s| char_len(s)).collect();
    let word_counts: usize = sentences.iter().map(|s| s.split_whitespace().count()).sum();

    let (mean, std_dev) = mean_stddev(&lengths);

    let short = lengths.iter().filter(|&&l| l < SHORT_SENTENCE_CHARS).count();
    let long = lengths.iter().filter(|&&l| l >= LONG_SENTENCE_CHARS).count();
    let medium = lengths.len() - short - long;

    SentenceStats {
        avg_length_chars: mean,
        std_dev_length: std_dev,
        avg_word_count: word_counts as f64 / n,
        min_length: lengths.iter().copied().min().unwrap_or(0),
        max_length: lengths.iter().copied().max().unwrap_or(0),
        total_sentences: sentences.len(),
        length_distribution: LengthDistribution {
            short_pct: short as f64 / n * 100.0,
            medium_pct: medium as f64 / n * 100.0,
            long_pct: long as f64 / n * 100.0,
        },
    }
}

/// Paragraph length and density statistics.
pub fn analyze_paragraphs(paragraphs: &[String]) -> ParagraphStats {
    if paragraphs.is_empty() {
        return ParagraphStats::default();
    }

    let n = paragraphs.len() as f64;
    let total_chars: usize = paragraphs.iter().map(|p| char_len(p)).sum();
    let sentence_counts: Vec<usize> = paragraphs.iter().map(|p| split_sentences(p).len()).collect();
    let single = sentence_counts.iter().filter(|&&c| c == 1).count();

    ParagraphStats {
        avg_length_chars: total_chars as f64 / n,
        avg_sentences_per_para: sentence_counts.iter().sum::<usize>() as f64 / n,
        total_paragraphs: paragraphs.len(),
        single_sentence_para_pct: single as f64 / n * 100.0,
    }
}

/// Up to 15 mid-length sentences sampled at even strides across the corpus.
pub fn representative_sentences(sentences: &[String]) -> Vec<String> {
    let candidates: Vec<&String> = sentences
        .iter()
        .filter(|s| {
            let len = char_len(s);
            len > SAMPLE_MIN_CHARS && len < SAMPLE_MAX_CHARS
        })
        .collect();

    if candidates.len() <= SAMPLE_SENTENCE_CAP {
        return candidates.into_iter().cloned().collect();
    }

    let step = candidates.len() / SAMPLE_SENTENCE_CAP;
    (0..SAMPLE_SENTENCE_CAP)
        .map(|i| candidates[i * step].clone())
        .collect()
}

/// Population mean and standard deviation.
fn mean_stddev(values: &[usize]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<usize>() as f64 / n;
    let variance = values.iter().map(|&x| (x as f64 - mean).powi(2)).sum::<f64>() / n;
    (mean, variance.sqrt())
}
