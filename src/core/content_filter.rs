use crate::core::patterns::{
    Detector, CONTACT_DETECTORS, DIGIT_WORD_PATTERNS, DIGIT_WORD_THRESHOLD, PHRASING_DETECTORS,
};
use crate::models::{ContentFilterResult, ContentReport, Violation};

/// Replacement written over every redacted span
pub const REDACTION_MARKER: &str = "[REDACTED]";

/// Raw match count at which confidence saturates
pub const CONFIDENCE_SATURATION: f64 = 3.0;

pub const SAFE_MESSAGE: &str = "Content is safe";
pub const UNSAFE_MESSAGE: &str =
    "Content contains contact information or attempts to move the conversation off the platform";

/// Running state shared by the detection layers
#[derive(Debug, Default)]
struct Detection {
    violations: Vec<Violation>,
    matches: usize,
}

impl Detection {
    /// Record `count` raw matches of a category. Categories are listed once,
    /// in the order they were first seen.
    fn record(&mut self, violation: Violation, count: usize) {
        if count == 0 {
            return;
        }
        self.matches += count;
        if !self.violations.contains(&violation) {
            self.violations.push(violation);
        }
    }
}

/// Classify free text for off-platform contact sharing attempts
///
/// Three layers run independently over the original text:
/// 1. Contact patterns (handles, phone numbers, e-mails, links). Matches are
///    redacted in `sanitized_content`.
/// 2. Phone numbers dictated in words, triggered by at least
///    `DIGIT_WORD_THRESHOLD` distinct digit-word patterns.
/// 3. Solicitation phrasing and runs of spelled-out digits.
///
/// Layers 2 and 3 flag without redacting, so a result can be unclean while
/// its sanitized text equals the input.
pub fn filter_content(content: &str) -> ContentFilterResult {
    let mut detection = Detection::default();
    let mut spans: Vec<(usize, usize)> = Vec::new();

    // Layer 1
    for Detector { violation, regex } in CONTACT_DETECTORS.iter() {
        let before = spans.len();
        spans.extend(regex.find_iter(content).map(|m| (m.start(), m.end())));
        let count = spans.len() - before;
        if count == 0 {
            continue;
        }
        tracing::debug!("Contact pattern {:?} matched {} time(s)", violation, count);
        detection.record(*violation, count);
    }
    let sanitized = redact(content, spans);

    // Layer 2: distinct patterns, not occurrences. "five five five five"
    // counts as one.
    let distinct_digit_words = DIGIT_WORD_PATTERNS
        .iter()
        .filter(|regex| regex.is_match(content))
        .count();
    if distinct_digit_words >= DIGIT_WORD_THRESHOLD {
        tracing::debug!("Found {} distinct digit words", distinct_digit_words);
        detection.record(Violation::PhoneNumberInWords, distinct_digit_words);
    }

    // Layer 3
    for Detector { violation, regex } in PHRASING_DETECTORS.iter() {
        let count = regex.find_iter(content).count();
        detection.record(*violation, count);
    }

    let confidence = confidence_for(detection.matches);

    ContentFilterResult {
        is_clean: detection.violations.is_empty(),
        violations: detection.violations,
        sanitized_content: sanitized,
        confidence,
    }
}

/// Replace every span with the marker. Overlapping or touching spans are
/// merged first so one redaction covers the whole union.
fn redact(content: &str, mut spans: Vec<(usize, usize)>) -> String {
    if spans.is_empty() {
        return content.to_string();
    }
    spans.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    let mut sanitized = String::with_capacity(content.len());
    let mut cursor = 0;
    for (start, end) in merged {
        sanitized.push_str(&content[cursor..start]);
        sanitized.push_str(REDACTION_MARKER);
        cursor = end;
    }
    sanitized.push_str(&content[cursor..]);
    sanitized
}

/// Map a raw match count onto the saturating [0, 1] confidence scale
#[inline]
pub fn confidence_for(matches: usize) -> f64 {
    (matches as f64 / CONFIDENCE_SATURATION).min(1.0)
}

/// Whether the text can be accepted as-is
pub fn is_content_safe(content: &str) -> bool {
    filter_content(content).is_clean
}

/// Summarize a filter run for display to the sender
pub fn get_content_report(content: &str) -> ContentReport {
    report_from(filter_content(content))
}

/// Build a report from an existing filter result
pub fn report_from(result: ContentFilterResult) -> ContentReport {
    let message = if result.is_clean { SAFE_MESSAGE } else { UNSAFE_MESSAGE };

    ContentReport {
        safe: result.is_clean,
        message: message.to_string(),
        details: result.violations,
    }
}
