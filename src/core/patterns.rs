//! Precompiled pattern tables used by the content filter.
//!
//! All tables are built once on first use and shared read-only for the
//! lifetime of the process.

use crate::models::Violation;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// A compiled detector tagged with the category it reports
#[derive(Debug)]
pub struct Detector {
    pub violation: Violation,
    pub regex: Regex,
}

fn compile(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("hardcoded content filter pattern is invalid")
}

fn detector(violation: Violation, pattern: &str) -> Detector {
    Detector {
        violation,
        regex: compile(pattern),
    }
}

/// Verbal renderings of each digit, indexed by digit value.
///
/// Renderings that are also everyday words ("to", "for", "won", "ate",
/// "tree", "nil", "sept", "un", "tu", "fo", "dos", "tri") are left out so
/// ordinary sentences do not trip the detector.
pub const DIGIT_WORDS: [&[&str]; 10] = [
    &["zero", "ziro", "zeero", "nought"],
    &["one", "wan", "uno"],
    &["two", "deux"],
    &["three", "trois", "tres"],
    &["four", "quatre", "cuatro"],
    &["five", "fiv", "faiv", "cinq", "fife"],
    &["six", "siks", "seis"],
    &["seven", "seben", "siete"],
    &["eight", "eit", "huit", "ocho"],
    &["nine", "nain", "neuf", "nueve"],
];

/// Minimum number of distinct digit-word patterns before the text is
/// treated as a phone number dictated in words.
pub const DIGIT_WORD_THRESHOLD: usize = 4;

/// Layer 1: direct contact detectors. Matches are redacted.
pub static CONTACT_DETECTORS: LazyLock<Vec<Detector>> = LazyLock::new(|| {
    vec![
        // @handle
        detector(Violation::SocialHandle, r"@[a-z0-9_.]{2,}"),
        // ig: handle, insta @handle, fb - handle, ...
        detector(
            Violation::SocialHandle,
            r"\b(?:instagram|insta|ig|twitter|tw|facebook|fb|tiktok|tt|snapchat|snap|sc|linkedin|youtube|yt|telegram|tg)\b\s*[:\-@]?\s*@?[a-z0-9_.]{3,}",
        ),
        detector(
            Violation::WhatsApp,
            r"\b(?:whats\s*app|whatsap|watsapp|watsap|wassap|wa\.me)\b",
        ),
        // +234 801 234 5678, +1 (555) 123-4567
        detector(
            Violation::PhoneNumber,
            r"\+\d{1,3}[\s.\-]?\(?\d{1,4}\)?(?:[\s.\-]?\d{2,4}){2,4}",
        ),
        // 0801 234 5678, 0903-123-4567
        detector(
            Violation::PhoneNumber,
            r"\b0[789][01]\d[\s.\-]?\d{3}[\s.\-]?\d{4}\b",
        ),
        detector(Violation::PhoneNumber, r"\b\d{10,14}\b"),
        detector(
            Violation::Email,
            r"\b[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}\b",
        ),
        detector(
            Violation::Email,
            r"\b(?:gmail|yahoo|ymail|hotmail|outlook|icloud|protonmail|aol)(?:\.com)?\b",
        ),
        detector(
            Violation::SocialLink,
            r"\b(?:https?://)?(?:www\.)?(?:instagram|facebook|fb|twitter|x|tiktok|snapchat|linkedin|youtube|youtu|t)\.(?:com|me|be)\b(?:/\S*)?",
        ),
    ]
});

/// Layer 2: one word-boundary pattern per digit rendering, in table order.
pub static DIGIT_WORD_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DIGIT_WORDS
        .iter()
        .flat_map(|renderings| renderings.iter())
        .map(|word| compile(&format!(r"\b{}\b", regex::escape(word))))
        .collect()
});

/// Layer 3: solicitation phrasing and spelled-out digit runs. Matches are
/// flagged but never redacted.
pub static PHRASING_DETECTORS: LazyLock<Vec<Detector>> = LazyLock::new(|| {
    let digit_word = DIGIT_WORDS
        .iter()
        .flat_map(|renderings| renderings.iter())
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");

    vec![
        detector(
            Violation::SuspiciousContact,
            r"\b(?:call|text|message|msg|dm|pm|ping|buzz)\s+me\b",
        ),
        detector(
            Violation::SuspiciousContact,
            r"\bmy\s+(?:phone\s+)?(?:number|digits|line|contact|cell)\s*(?:is\b|:)",
        ),
        detector(
            Violation::SuspiciousContact,
            r"\b(?:add|follow|find|reach)\s+me\s+(?:on|at|via)\b",
        ),
        detector(
            Violation::SpelledOutDigits,
            &format!(r"\b(?:{digit_word})(?:[\s,.\-]+(?:{digit_word}))+\b"),
        ),
    ]
});
