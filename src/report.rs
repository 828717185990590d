use crate::segmenter::{char_len, take_chars};
use crate::types::{CountMap, Ranked, StyleProfile, Tone};

const RULE_WIDTH: usize = 60;
const TITLE: &str = "         WRITING STYLE ANALYSIS REPORT";

/// Shown instead of a report when the profile carries no data at all.
pub const EMPTY_PROFILE_MESSAGE: &str = "No style profile available. Learn from some documents first.";

/// Target language for writing guidelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Korean,
    English,
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "korean" | "ko" => Ok(Language::Korean),
            "english" | "en" => Ok(Language::English),
            _ => Err(format!("invalid language '{}': expected korean or english", s)),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Korean => write!(f, "korean"),
            Language::English => write!(f, "english"),
        }
    }
}

/// Render a profile as a human-readable, sectioned text report.
pub fn generate_report(profile: &StyleProfile) -> String {
    if profile.is_empty() {
        return EMPTY_PROFILE_MESSAGE.to_string();
    }

    let rule = "=".repeat(RULE_WIDTH);
    let mut out: Vec<String> = vec![rule.clone(), TITLE.to_string(), rule.clone()];

    let meta = &profile.metadata;
    out.push("\n## Overview".into());
    out.push(format!("- Documents analyzed: {}", meta.total_documents));
    out.push(format!("- Total characters: {}", thousands(meta.total_characters)));

    let ss = &profile.sentence_stats;
    let dist = &ss.length_distribution;
    out.push("\n## Sentence Characteristics".into());
    out.push(format!("- Average length: {:.1} chars", ss.avg_length_chars));
    out.push(format!("- Standard deviation: {:.1}", ss.std_dev_length));
    out.push(format!("- Total sentences: {}", thousands(ss.total_sentences)));
    out.push("- Length distribution:".into());
    out.push(format!("  - Short (<50 chars): {:.1}%", dist.short_pct));
    out.push(format!("  - Medium (50-150): {:.1}%", dist.medium_pct));
    out.push(format!("  - Long (>150): {:.1}%", dist.long_pct));

    let tone = &profile.tone_analysis;
    out.push("\n## Tone & Formality".into());
    out.push(format!("- Korean tone: {}", tone_label(tone.primary_korean_tone)));
    out.push(format!("- English tone: {}", tone_label(tone.primary_english_tone)));
    if !tone.is_empty() || tone.primary_korean_tone.is_some() {
        let kr = &tone.korean_formality;
        out.push("- Korean formality breakdown:".into());
        out.push(format!("  - Formal (습니다/입니다): {}", kr.formal_high));
        out.push(format!("  - Polite (해요/세요): {}", kr.formal_polite));
        out.push(format!("  - Informal: {}", kr.informal));
    }

    let opening = &profile.opening_patterns;
    out.push("\n## Opening Patterns".into());
    if !opening.greeting_patterns.is_empty() {
        out.push("- Greeting usage:".into());
        for (greeting, count) in &opening.greeting_patterns {
            out.push(format!("  - {}: {}", greeting, count));
        }
    }
    if !opening.common_first_words.is_empty() {
        out.push(format!("- Common first words: {}", counted(&opening.common_first_words, 5)));
    }

    let closing = &profile.closing_patterns;
    out.push("\n## Closing Patterns".into());
    if !closing.signoff_patterns.is_empty() {
        out.push("- Sign-off usage:".into());
        for (signoff, count) in &closing.signoff_patterns {
            out.push(format!("  - {}: {}", signoff, count));
        }
    }

    let trans = &profile.transition_analysis;
    out.push("\n## Transition Words".into());
    if !trans.top_korean_transitions.is_empty() {
        out.push(format!("- Top Korean: {}", counted(&trans.top_korean_transitions, 5)));
    }
    if !trans.top_english_transitions.is_empty() {
        out.push(format!("- Top English: {}", counted(&trans.top_english_transitions, 5)));
    }

    let flags = &profile.structural_patterns.patterns;
    let counts = &profile.structural_patterns.counts;
    out.push("\n## Structural Patterns".into());
    out.push(format!("- Uses bullet points: {} ({})", yes_no(flags.uses_bullet_points), counts.bullet_count));
    out.push(format!("- Uses numbering: {} ({})", yes_no(flags.uses_numbering), counts.number_count));
    out.push(format!("- Uses headers: {} ({})", yes_no(flags.uses_headers), counts.header_count));
    out.push(format!("- Uses bold: {}", yes_no(flags.uses_bold)));
    out.push(format!("- Questions asked: {}", counts.question_count));

    let bigrams = &profile.signature_phrases.signature_bigrams;
    out.push("\n## Signature Phrases".into());
    if !bigrams.is_empty() {
        let phrases: Vec<String> = bigrams
            .iter()
            .take(5)
            .map(|(phrase, count)| format!("\"{}\"({})", phrase, count))
            .collect();
        out.push(format!("- Common phrases: {}", phrases.join(", ")));
    }

    let vocab = &profile.vocabulary;
    out.push("\n## Vocabulary".into());
    out.push(format!("- Unique words: {}", thousands(vocab.unique_words)));
    out.push(format!("- Vocabulary richness: {:.2}%", vocab.vocabulary_richness * 100.0));
    if !vocab.top_korean_words.is_empty() {
        out.push(format!("- Top Korean words: {}", counted(&vocab.top_korean_words, 10)));
    }
    if !vocab.top_english_words.is_empty() {
        out.push(format!("- Top English words: {}", counted(&vocab.top_english_words, 10)));
    }

    out.push(format!("\n{}", rule));
    out.join("\n")
}

/// Short directives for producing text in the profiled style.
///
/// `doc_type` adds one extra directive for known document kinds
/// (email, report, proposal, in English or Korean).
pub fn writing_guidelines(
    profile: &StyleProfile,
    language: Language,
    doc_type: Option<&str>,
) -> Vec<String> {
    let mut guidelines = Vec::new();

    // profiles without sentence data are treated as moderate
    let avg_len = if profile.sentence_stats.is_empty() {
        100.0
    } else {
        profile.sentence_stats.avg_length_chars
    };
    guidelines.push(
        if avg_len < 80.0 {
            "Use short, concise sentences (under 80 characters)"
        } else if avg_len < 150.0 {
            "Use moderate sentence length (80-150 characters)"
        } else {
            "Use longer, more detailed sentences when appropriate"
        }
        .to_string(),
    );

    let tone = &profile.tone_analysis;
    let directive = match language {
        Language::Korean => match tone.primary_korean_tone.unwrap_or(Tone::Formal) {
            Tone::Formal => "Use formal Korean endings (-습니다, -입니다)",
            Tone::Casual => "Use casual Korean endings (-해요, -어요)",
        },
        Language::English => match tone.primary_english_tone.unwrap_or(Tone::Formal) {
            Tone::Formal => "Maintain professional, formal tone",
            Tone::Casual => "Use casual, conversational tone",
        },
    };
    guidelines.push(directive.to_string());

    let openings = &profile.opening_patterns.common_first_phrases;
    if !openings.is_empty() {
        guidelines.push(format!("Common opening patterns: {}", quoted(openings, 3)));
    }

    if let Some(signoff) = top_signoff(profile) {
        guidelines.push(format!("Preferred sign-off: {}", signoff));
    }

    let flags = &profile.structural_patterns.patterns;
    if flags.uses_bullet_points {
        guidelines.push("Use bullet points for lists".to_string());
    }
    if flags.uses_headers {
        guidelines.push("Use headers to organize content".to_string());
    }
    if flags.uses_bold {
        guidelines.push("Use **bold** for emphasis".to_string());
    }

    let bigrams = &profile.signature_phrases.signature_bigrams;
    if !bigrams.is_empty() {
        guidelines.push(format!("Signature phrases: {}", quoted(bigrams, 5)));
    }

    if let Some(directive) = doc_type.and_then(doc_type_directive) {
        guidelines.push(directive.to_string());
    }

    guidelines
}

/// Most frequent sign-off; the first one recorded wins a tie.
fn top_signoff(profile: &StyleProfile) -> Option<&str> {
    top_entry(&profile.closing_patterns.signoff_patterns).map(|(signoff, _)| signoff)
}

fn top_entry(counts: &CountMap) -> Option<(&str, usize)> {
    let mut best: Option<(&str, usize)> = None;
    for (key, &count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((key, count));
        }
    }
    best
}

/// Samples quoted in a style guide, and how much of each is kept.
const GUIDE_SAMPLE_LIMIT: usize = 10;
const GUIDE_SAMPLE_CHARS: usize = 500;

/// Standalone Markdown style guide for a profile, meant to be handed to a
/// writing assistant as reference material.
///
/// Patterns are listed only once they recur often enough to be habits:
/// openings over 50 uses, greetings over 10, sign-offs over 5 and
/// signature bigrams over 100. Profiles whose name contains "korean" get
/// Korean tone and transition sections, all others English ones.
/// Up to 10 `samples` are quoted, each cut to 500 characters.
pub fn style_guide(profile: &StyleProfile, name: &str, samples: &[String]) -> String {
    let korean = name.to_lowercase().contains("korean");
    let mut out: Vec<String> = vec![
        format!("# {} 글쓰기 스타일 가이드", name.to_uppercase()),
        String::new(),
        "> 이 문서는 사용자의 글쓰기 스타일을 분석한 결과입니다.".into(),
        "> 글을 작성할 때 이 가이드를 참고하여 사용자의 스타일을 따라주세요.".into(),
        String::new(),
    ];

    let meta = &profile.metadata;
    out.push("## 분석 기반 데이터".into());
    out.push(format!("- 분석 문서 수: {}개", thousands(meta.total_documents)));
    out.push(format!("- 총 문자 수: {}자", thousands(meta.total_characters)));
    out.push(String::new());

    out.push("## 핵심 스타일 가이드라인".into());
    out.push(String::new());

    let avg_len = if profile.sentence_stats.is_empty() {
        100.0
    } else {
        profile.sentence_stats.avg_length_chars
    };
    if avg_len < 80.0 {
        out.push("### 문장 길이: 짧고 간결하게".into());
        out.push("- 평균 문장 길이: 약 80자 이하".into());
        out.push("- 짧고 명확한 문장을 선호합니다".into());
    } else if avg_len < 150.0 {
        out.push("### 문장 길이: 적당한 길이".into());
        out.push(format!("- 평균 문장 길이: 약 {:.0}자", avg_len));
        out.push("- 너무 짧지도, 너무 길지도 않은 적당한 문장을 선호합니다".into());
    } else {
        out.push("### 문장 길이: 상세한 설명".into());
        out.push(format!("- 평균 문장 길이: 약 {:.0}자", avg_len));
        out.push("- 충분한 설명이 담긴 긴 문장도 자주 사용합니다".into());
    }
    out.push(String::new());

    let tone = &profile.tone_analysis;
    out.push("### 톤 & 격식".into());
    if korean {
        let kr = &tone.korean_formality;
        match tone.primary_korean_tone.unwrap_or(Tone::Formal) {
            Tone::Formal => {
                out.push("- **격식체 사용**: -습니다/-입니다 형태의 존댓말".into());
                out.push(format!("  - 격식체 사용: {}회", thousands(kr.formal_high)));
            }
            Tone::Casual => {
                out.push("- **비격식체/해요체 사용**: 친근하면서도 공손한 톤".into());
                out.push(format!("  - 해요체 사용: {}회", thousands(kr.formal_polite)));
            }
        }
    } else {
        match tone.primary_english_tone.unwrap_or(Tone::Formal) {
            Tone::Formal => {
                out.push("- **Formal/Professional tone**".into());
                out.push("- Use polite, professional language".into());
            }
            Tone::Casual => {
                out.push("- **Casual/Friendly tone**".into());
                out.push("- Conversational but respectful".into());
            }
        }
    }
    let emotional = &tone.emotional_indicators;
    if emotional.enthusiastic > emotional.cautious {
        out.push("- 열정적이고 긍정적인 톤 선호".into());
    }
    if emotional.direct > 500 {
        out.push("- 직접적이고 명확한 표현 사용".into());
    }
    out.push(String::new());

    let opening = &profile.opening_patterns;
    out.push("### 시작 패턴".into());
    let openings = frequent(&opening.common_first_phrases, 5, 50);
    if !openings.is_empty() {
        out.push("자주 사용하는 시작 표현:".into());
        out.extend(openings.iter().map(|p| format!("- \"{}\"", p)));
    }
    if let Some((greeting, count)) = top_entry(&opening.greeting_patterns) {
        if count > 10 {
            out.push(format!("- 주요 인사말: \"{}\"", greeting));
        }
    }
    out.push(String::new());

    out.push("### 마무리 패턴".into());
    let mut signoffs: Ranked = profile
        .closing_patterns
        .signoff_patterns
        .iter()
        .map(|(s, &c)| (s.clone(), c))
        .collect();
    signoffs.sort_by(|a, b| b.1.cmp(&a.1));
    let signoffs = frequent(&signoffs, 3, 5);
    if !signoffs.is_empty() {
        out.push("자주 사용하는 마무리 표현:".into());
        out.extend(signoffs.iter().map(|s| format!("- \"{}\"", s)));
    }
    out.push(String::new());

    let flags = &profile.structural_patterns.patterns;
    let counts = &profile.structural_patterns.counts;
    out.push("### 구조적 특징".into());
    if flags.uses_bullet_points {
        out.push(format!("- **불릿 포인트 사용**: 자주 사용 ({}회)", thousands(counts.bullet_count)));
    }
    if flags.uses_numbering {
        out.push(format!("- **번호 목록 사용**: 사용 ({}회)", thousands(counts.number_count)));
    }
    if flags.uses_headers {
        out.push(format!("- **헤더/제목 사용**: 사용 ({}회)", thousands(counts.header_count)));
    }
    if flags.uses_bold {
        out.push("- **굵은 글씨 강조**: 중요 내용에 **bold** 사용".into());
    }
    if flags.uses_tables {
        out.push("- **표 사용**: 데이터 정리에 표 활용".into());
    }
    out.push(String::new());

    let trans = &profile.transition_analysis;
    out.push("### 연결어/전환어".into());
    if korean {
        let words = frequent(&trans.top_korean_transitions, 7, 10);
        if !words.is_empty() {
            out.push(format!("자주 사용하는 연결어: {}", quote_all(&words)));
        }
    } else {
        let words = frequent(&trans.top_english_transitions, 7, 50);
        if !words.is_empty() {
            out.push(format!("Frequently used transitions: {}", quote_all(&words)));
        }
    }
    out.push(String::new());

    let sig = &profile.signature_phrases;
    if !sig.signature_bigrams.is_empty() || !sig.signature_trigrams.is_empty() {
        out.push("### 시그니처 표현".into());
        out.push("이 사용자가 자주 쓰는 특징적인 표현:".into());
        out.extend(
            frequent(&sig.signature_bigrams, 7, 100)
                .iter()
                .filter(|p| !p.starts_with("entity"))
                .map(|p| format!("- \"{}\"", p)),
        );
        out.push(String::new());
    }

    if !samples.is_empty() {
        out.push("## 스타일 참고 예시".into());
        out.push("실제 작성된 글의 예시입니다. 이러한 톤과 스타일을 참고하세요:".into());
        out.push(String::new());
        for (i, sample) in samples.iter().take(GUIDE_SAMPLE_LIMIT).enumerate() {
            let sample = sample.trim();
            let mut excerpt = take_chars(sample, GUIDE_SAMPLE_CHARS);
            if char_len(sample) > GUIDE_SAMPLE_CHARS {
                excerpt.push_str("...");
            }
            out.push(format!("### 예시 {}", i + 1));
            out.push("```".into());
            out.push(excerpt);
            out.push("```".into());
            out.push(String::new());
        }
    }

    out.push("---".into());
    out.push(String::new());
    out.push("## 작성 지시사항".into());
    out.push(String::new());
    out.push("글을 작성할 때 위의 스타일 가이드를 따라주세요:".into());
    out.push("1. 문장 길이와 구조를 맞춰주세요".into());
    out.push("2. 톤과 격식 수준을 일관되게 유지해주세요".into());
    out.push("3. 시작/마무리 패턴을 참고해주세요".into());
    out.push("4. 시그니처 표현을 자연스럽게 활용해주세요".into());
    out.push("5. 구조적 특징(불릿, 헤더 등)을 비슷하게 사용해주세요".into());
    out.push(String::new());

    out.join("\n")
}

/// Items among the first `limit` whose count exceeds `min_count`.
fn frequent(items: &Ranked, limit: usize, min_count: usize) -> Vec<&str> {
    items
        .iter()
        .take(limit)
        .filter(|(_, count)| *count > min_count)
        .map(|(item, _)| item.as_str())
        .collect()
}

fn quote_all(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", item))
        .collect::<Vec<_>>()
        .join(", ")
}

fn doc_type_directive(doc_type: &str) -> Option<&'static str> {
    match doc_type.to_lowercase().as_str() {
        "email" | "이메일" => Some("Include appropriate greeting and sign-off"),
        "report" | "보고서" => Some("Use clear headers and organized structure"),
        "proposal" | "제안서" => Some("Be persuasive while maintaining professional tone"),
        _ => None,
    }
}

fn tone_label(tone: Option<Tone>) -> String {
    tone.map_or_else(|| "N/A".to_string(), |t| t.to_string())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// `word(3), other(2)`, zero counts skipped.
fn counted(items: &Ranked, limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .filter(|(_, count)| *count > 0)
        .map(|(item, count)| format!("{}({})", item, count))
        .collect::<Vec<_>>()
        .join(", ")
}

fn quoted(items: &Ranked, limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(|(item, _)| format!("\"{}\"", item))
        .collect::<Vec<_>>()
        .join(", ")
}

/// 1234567 -> "1,234,567"
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
