use crate::analyzers::lexicon::BIGRAM_LEADING_EXCLUSIONS;
use crate::analyzers::ranking::FrequencyTable;
use crate::segmenter::word_tokens;
use crate::types::{Ranked, SignaturePhrases, BIGRAM_CAP, TRIGRAM_CAP};

/// A phrase must occur more often than this to count as a signature.
const MIN_SIGNATURE_COUNT: usize = 2;

/// Recurring word 2-grams and 3-grams.
///
/// Runs over the unfiltered token stream: function words stay in, since
/// idiomatic phrasing ("in order to", "말씀해 주세요") is mostly made of them.
pub fn extract_signature_phrases(texts: &[String]) -> SignaturePhrases {
    let combined = texts.join(" ");
    let words = word_tokens(&combined);

    let mut bigrams = FrequencyTable::new();
    for pair in words.windows(2) {
        let leading = pair[0].to_lowercase();
        if BIGRAM_LEADING_EXCLUSIONS.contains(&leading.as_str()) {
            continue;
        }
        bigrams.add(&pair.join(" "));
    }

    let mut trigrams = FrequencyTable::new();
    for triple in words.windows(3) {
        trigrams.add(&triple.join(" "));
    }

    SignaturePhrases {
        signature_bigrams: recurring(&bigrams, BIGRAM_CAP),
        signature_trigrams: recurring(&trigrams, TRIGRAM_CAP),
    }
}

fn recurring(table: &FrequencyTable, cap: usize) -> Ranked {
    table
        .ranked()
        .into_iter()
        .filter(|(_, count)| *count > MIN_SIGNATURE_COUNT)
        .take(cap)
        .collect()
}
