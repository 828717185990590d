use regex::Regex;
use std::sync::LazyLock;

use crate::analyzers::lexicon::{TransitionTable, ENGLISH_TRANSITIONS, KOREAN_TRANSITIONS};
use crate::analyzers::ranking::FrequencyTable;
use crate::types::{CountMap, TransitionAnalysis, TRANSITION_RANK_CAP};

struct PhraseMatcher {
    category: &'static str,
    phrase: &'static str,
    bounded: Regex,
}

fn compile(table: TransitionTable, case_insensitive: bool) -> Vec<PhraseMatcher> {
    let flags = if case_insensitive { "(?i)" } else { "" };
    table
        .iter()
        .flat_map(|&(category, phrases)| {
            phrases.iter().map(move |&phrase| PhraseMatcher {
                category,
                phrase,
                bounded: Regex::new(&format!(r"{flags}\b{}\b", regex::escape(phrase))).unwrap(),
            })
        })
        .collect()
}

static KOREAN_MATCHERS: LazyLock<Vec<PhraseMatcher>> =
    LazyLock::new(|| compile(KOREAN_TRANSITIONS, false));
static ENGLISH_MATCHERS: LazyLock<Vec<PhraseMatcher>> =
    LazyLock::new(|| compile(ENGLISH_TRANSITIONS, true));

/// Transition phrase usage per semantic category and per phrase.
///
/// Category totals count whole-word matches. The Korean per-phrase ranking
/// counts literal substrings, since Korean connectives usually carry an
/// attached particle (결국은, 때문에도).
pub fn analyze_transitions(texts: &[String]) -> TransitionAnalysis {
    let combined = texts.join(" ");

    let mut korean_by_category = category_skeleton(KOREAN_TRANSITIONS);
    let mut korean_phrases = FrequencyTable::new();
    for m in KOREAN_MATCHERS.iter() {
        *korean_by_category.entry(m.category.to_string()).or_insert(0) +=
            m.bounded.find_iter(&combined).count();
        korean_phrases.add_count(m.phrase, combined.matches(m.phrase).count());
    }

    let mut english_by_category = category_skeleton(ENGLISH_TRANSITIONS);
    let mut english_phrases = FrequencyTable::new();
    for m in ENGLISH_MATCHERS.iter() {
        let count = m.bounded.find_iter(&combined).count();
        *english_by_category.entry(m.category.to_string()).or_insert(0) += count;
        english_phrases.add_count(m.phrase, count);
    }

    TransitionAnalysis {
        korean_by_category,
        english_by_category,
        top_korean_transitions: korean_phrases.top(TRANSITION_RANK_CAP),
        top_english_transitions: english_phrases.top(TRANSITION_RANK_CAP),
    }
}

/// Every category present with a zero count, in table order.
fn category_skeleton(table: TransitionTable) -> CountMap {
    table.iter().map(|(category, _)| (category.to_string(), 0)).collect()
}
