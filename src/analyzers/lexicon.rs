//! Fixed word lists and phrase catalogues shared by the analyzers.
//! All entries are process-wide constants.

use std::collections::HashSet;
use std::sync::LazyLock;

/// English function words excluded from vocabulary statistics.
pub static ENGLISH_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
        "by", "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had",
        "do", "does", "did", "will", "would", "could", "should", "may", "might", "must",
        "that", "this", "these", "those", "it", "its", "you", "your", "we", "our", "they",
        "their", "he", "she", "his", "her", "i", "my", "me", "not", "no", "yes", "can",
        "if", "when", "where", "what", "which", "who", "how", "why", "all", "each", "more",
        "some", "any", "there", "here", "about", "into", "through", "during", "before",
        "after", "above", "below", "between", "under", "again", "further", "then", "once",
    ]
    .into_iter()
    .collect()
});

/// Standalone Korean particles excluded from vocabulary statistics.
pub static KOREAN_PARTICLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "은", "는", "이", "가", "을", "를", "의", "에", "에서", "로", "으로", "와", "과",
        "도", "만", "부터", "까지", "보다", "처럼", "같이", "하고", "이나", "거나",
    ]
    .into_iter()
    .collect()
});

/// Leading words that disqualify a signature bigram.
pub const BIGRAM_LEADING_EXCLUSIONS: &[&str] = &["the", "a", "an", "is", "are", "was", "were"];

/// Transition phrase table: (category, phrases).
pub type TransitionTable = &'static [(&'static str, &'static [&'static str])];

pub const KOREAN_TRANSITIONS: TransitionTable = &[
    ("additive", &["또한", "그리고", "더불어", "아울러", "게다가", "뿐만 아니라", "마찬가지로"]),
    ("contrast", &["하지만", "그러나", "반면", "반대로", "그렇지만", "다만", "오히려"]),
    ("causal", &["따라서", "그러므로", "때문에", "그래서", "결과적으로", "이로 인해"]),
    ("sequential", &["먼저", "다음으로", "그 다음", "마지막으로", "첫째", "둘째", "셋째"]),
    ("exemplifying", &["예를 들어", "예컨대", "구체적으로", "특히", "가령"]),
    ("concluding", &["결론적으로", "요약하면", "정리하면", "결국", "마무리하자면"]),
];

pub const ENGLISH_TRANSITIONS: TransitionTable = &[
    ("additive", &["also", "additionally", "furthermore", "moreover", "in addition", "as well"]),
    ("contrast", &["however", "but", "nevertheless", "on the other hand", "in contrast", "yet"]),
    ("causal", &["therefore", "thus", "consequently", "as a result", "hence", "so"]),
    ("sequential", &["first", "second", "third", "next", "then", "finally", "lastly"]),
    ("exemplifying", &["for example", "for instance", "specifically", "such as", "including"]),
    ("concluding", &["in conclusion", "to summarize", "in summary", "ultimately", "overall"]),
];

/// A greeting or sign-off catalogue entry, matched against lower-cased excerpts.
#[derive(Debug, Clone, Copy)]
pub struct PhrasePattern {
    /// Key reported in the profile.
    pub label: &'static str,
    /// Lower-case needles; any one present counts the excerpt once.
    pub needles: &'static [&'static str],
    /// Needle must open the excerpt as a whole word.
    pub anchored: bool,
    /// Not counted when this label already matched the same excerpt.
    pub unless: Option<&'static str>,
    /// Only excerpts shorter than this many characters qualify.
    pub max_chars: Option<usize>,
}

impl PhrasePattern {
    const fn contains(label: &'static str, needles: &'static [&'static str]) -> Self {
        Self {
            label,
            needles,
            anchored: false,
            unless: None,
            max_chars: None,
        }
    }
}

pub const GREETINGS: &[PhrasePattern] = &[
    PhrasePattern::contains("안녕하세요", &["안녕하세요"]),
    PhrasePattern {
        unless: Some("안녕하세요"),
        ..PhrasePattern::contains("안녕", &["안녕"])
    },
    PhrasePattern::contains("Hello", &["hello"]),
    PhrasePattern {
        anchored: true,
        ..PhrasePattern::contains("Hi", &["hi"])
    },
    PhrasePattern::contains("Dear", &["dear"]),
    PhrasePattern::contains("Good morning/afternoon", &["good morning", "good afternoon"]),
    PhrasePattern::contains("Thank you", &["thank you"]),
    PhrasePattern::contains("감사합니다", &["감사합니다"]),
];

pub const SIGNOFFS: &[PhrasePattern] = &[
    PhrasePattern::contains("Best regards", &["best regards"]),
    PhrasePattern {
        unless: Some("Best regards"),
        max_chars: Some(50),
        ..PhrasePattern::contains("Best", &["best"])
    },
    PhrasePattern::contains("Thanks", &["thanks"]),
    PhrasePattern::contains("Thank you", &["thank you"]),
    PhrasePattern::contains("Sincerely", &["sincerely"]),
    PhrasePattern::contains("감사합니다", &["감사합니다"]),
    PhrasePattern::contains("부탁드립니다", &["부탁드립니다"]),
    PhrasePattern::contains("말씀해 주세요", &["말씀해 주세요", "말씀해주세요"]),
];

// --- Tone markers (regex sources) ---

pub const KOREAN_FORMAL_HIGH: &str = r"습니다|입니다|하십시오|드립니다|되겠습니다";
pub const KOREAN_FORMAL_POLITE: &str = r"해요|에요|죠|세요|군요";
pub const KOREAN_INFORMAL: &str = r"해\b|야\b|어\b|지\b|거야|잖아";

pub const ENGLISH_FORMAL: &str = r"\bplease\b|\bkindly\b|\bregards\b|\bsincerely\b|\brespectfully\b";
pub const ENGLISH_POLITE: &str = r"\bthank you\b|\bappreciate\b|\bwould you\b|\bcould you\b";
pub const ENGLISH_CASUAL: &str = r"\bhey\b|\bthanks\b|\byeah\b|\bnope\b|\bawesome\b|\bcool\b";

pub const ENTHUSIASTIC_MARKERS: &str = r"!|정말|너무|아주|great|amazing|excellent|excited";
pub const CAUTIOUS_MARKERS: &str = r"아마|perhaps|maybe|might|possibly|조심|주의";
pub const DIRECT_MARKERS: &str = r"must|should|need to|해야|필요합니다|중요합니다";
