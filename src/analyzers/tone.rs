use regex::Regex;
use std::sync::LazyLock;

use crate::analyzers::lexicon::{
    CAUTIOUS_MARKERS, DIRECT_MARKERS, ENGLISH_CASUAL, ENGLISH_FORMAL, ENGLISH_POLITE,
    ENTHUSIASTIC_MARKERS, KOREAN_FORMAL_HIGH, KOREAN_FORMAL_POLITE, KOREAN_INFORMAL,
};
use crate::types::{EmotionalIndicators, EnglishFormality, KoreanFormality, Tone, ToneAnalysis};

static KO_FORMAL_HIGH: LazyLock<Regex> = LazyLock::new(|| Regex::new(KOREAN_FORMAL_HIGH).unwrap());
static KO_FORMAL_POLITE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(KOREAN_FORMAL_POLITE).unwrap());
static KO_INFORMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(KOREAN_INFORMAL).unwrap());

static EN_FORMAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(ENGLISH_FORMAL).unwrap());
static EN_POLITE: LazyLock<Regex> = LazyLock::new(|| Regex::new(ENGLISH_POLITE).unwrap());
static EN_CASUAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(ENGLISH_CASUAL).unwrap());

static ENTHUSIASTIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(ENTHUSIASTIC_MARKERS).unwrap());
static CAUTIOUS: LazyLock<Regex> = LazyLock::new(|| Regex::new(CAUTIOUS_MARKERS).unwrap());
static DIRECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(DIRECT_MARKERS).unwrap());

/// Formality marker counts and the register they imply.
pub fn analyze_tone(texts: &[String]) -> ToneAnalysis {
    let combined = texts.join(" ");
    let lowered = combined.to_lowercase();

    let korean_formality = KoreanFormality {
        formal_high: KO_FORMAL_HIGH.find_iter(&combined).count(),
        formal_polite: KO_FORMAL_POLITE.find_iter(&combined).count(),
        informal: KO_INFORMAL.find_iter(&combined).count(),
    };

    let english_formality = EnglishFormality {
        formal: EN_FORMAL.find_iter(&lowered).count(),
        polite: EN_POLITE.find_iter(&lowered).count(),
        casual: EN_CASUAL.find_iter(&lowered).count(),
    };

    let emotional_indicators = EmotionalIndicators {
        enthusiastic: ENTHUSIASTIC.find_iter(&lowered).count(),
        cautious: CAUTIOUS.find_iter(&lowered).count(),
        direct: DIRECT.find_iter(&lowered).count(),
    };

    ToneAnalysis {
        primary_korean_tone: Some(korean_tone(&korean_formality)),
        primary_english_tone: Some(english_tone(&english_formality)),
        korean_formality,
        english_formality,
        emotional_indicators,
    }
}

/// Formal only when high-formality endings strictly outnumber informal ones.
pub fn korean_tone(counts: &KoreanFormality) -> Tone {
    if counts.formal_high > counts.informal {
        Tone::Formal
    } else {
        Tone::Casual
    }
}

/// Formal only when formal markers strictly outnumber casual ones.
pub fn english_tone(counts: &EnglishFormality) -> Tone {
    if counts.formal > counts.casual {
        Tone::Formal
    } else {
        Tone::Casual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_korean_formal_tone() {
        let texts = vec!["회의 내용을 공유드립니다. 일정이 변경되었습니다.".to_string()];
        let tone = analyze_tone(&texts);
        assert_eq!(tone.korean_formality.formal_high, 2);
        assert_eq!(tone.primary_korean_tone, Some(Tone::Formal));
    }

    #[test]
    fn test_korean_informal_tone() {
        let texts = vec!["오늘 그거 했잖아 내일 또 해".to_string()];
        let tone = analyze_tone(&texts);
        assert!(tone.korean_formality.informal >= 2);
        assert_eq!(tone.primary_korean_tone, Some(Tone::Casual));
    }

    #[test]
    fn test_english_tone_markers() {
        let texts = vec!["Please review this. Kindly confirm. Thanks!".to_string()];
        let tone = analyze_tone(&texts);
        assert_eq!(tone.english_formality.formal, 2);
        assert_eq!(tone.english_formality.casual, 1);
        assert_eq!(tone.primary_english_tone, Some(Tone::Formal));
        assert_eq!(tone.emotional_indicators.enthusiastic, 1);
    }

    #[test]
    fn test_ties_resolve_to_casual() {
        let korean = KoreanFormality {
            formal_high: 3,
            formal_polite: 0,
            informal: 3,
        };
        let english = EnglishFormality {
            formal: 1,
            polite: 5,
            casual: 1,
        };
        assert_eq!(korean_tone(&korean), Tone::Casual);
        assert_eq!(english_tone(&english), Tone::Casual);
    }

    #[test]
    fn test_empty_corpus_is_casual() {
        let tone = analyze_tone(&[]);
        assert_eq!(tone.primary_korean_tone, Some(Tone::Casual));
        assert_eq!(tone.primary_english_tone, Some(Tone::Casual));
        assert!(tone.is_empty());
    }

    #[test]
    fn test_emotional_indicators() {
        let texts = vec!["Maybe we should wait. This is amazing! 정말 좋아요".to_string()];
        let tone = analyze_tone(&texts);
        assert_eq!(tone.emotional_indicators.cautious, 1);
        assert_eq!(tone.emotional_indicators.direct, 1);
        assert_eq!(tone.emotional_indicators.enthusiastic, 3);
    }
}
