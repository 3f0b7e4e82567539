// Unit tests for Market Match

use market_match::core::{
    content_filter::{confidence_for, filter_content, get_content_report, is_content_safe, REDACTION_MARKER},
    distance::haversine_distance,
    scoring::{calculate_match_score, calculate_trust_score},
    signals::detect_low_quality_signals,
};
use market_match::models::{BusinessType, Listing, PreferredType, ScoringWeights, Violation};
use uuid::Uuid;

fn create_listing() -> Listing {
    Listing {
        id: Uuid::new_v4(),
        name: "Mama Put".to_string(),
        latitude: Some(6.4550),
        longitude: Some(3.3841),
        reputation_score: Some(3.5),
        verified: false,
        business_type: Some(BusinessType::Goods),
        total_reviews: Some(8),
        total_completed_orders: Some(15),
        created_at: None,
    }
}

#[test]
fn test_email_always_flags_social_handle() {
    let samples = [
        "contact ada@example.com",
        "ADA.OBI@Mail.NG is my address",
        "write to shop_owner+orders@domain.co.uk",
    ];

    for text in samples {
        let result = filter_content(text);
        assert!(!result.is_clean, "{} should be flagged", text);
        assert!(
            result.violations.contains(&Violation::SocialHandle),
            "{} should carry the handle label",
            text
        );
        assert!(result.violations.contains(&Violation::Email));
    }
}

#[test]
fn test_plain_letters_are_clean() {
    let samples = [
        "Hello there",
        "Please deliver the order on Monday morning",
        "Is the red chair still available",
        "Thank you very much",
    ];

    for text in samples {
        let result = filter_content(text);
        assert!(result.is_clean, "{} should be clean, got {:?}", text, result.violations);
        assert_eq!(result.sanitized_content, text);
        assert_eq!(result.confidence, 0.0);
    }
}

#[test]
fn test_everyday_words_next_to_digit_words_are_clean() {
    let samples = [
        "I need one tree planted",
        "We won one nil on Sunday",
        "See you in sept for the fair",
        "tri-colour fabric, two yards",
        "two dos and one don't",
    ];

    for text in samples {
        let result = filter_content(text);
        assert!(result.is_clean, "{} should be clean, got {:?}", text, result.violations);
        assert_eq!(result.sanitized_content, text);
    }
}

#[test]
fn test_bare_webmail_mention_is_email() {
    let result = filter_content("send the receipt to my gmail");

    assert_eq!(result.violations, vec![Violation::Email]);
    assert_eq!(result.sanitized_content, "send the receipt to my [REDACTED]");

    let result = filter_content("I use Hotmail.com mostly");
    assert_eq!(result.violations, vec![Violation::Email]);
    assert_eq!(result.sanitized_content, "I use [REDACTED] mostly");
}

#[test]
fn test_platform_abbreviations_are_handles() {
    let cases = [
        ("fb: adas_kitchen", "[REDACTED]"),
        ("tt @adas_kitchen", "[REDACTED]"),
        ("check yt adaskitchen tonight", "check [REDACTED] tonight"),
    ];

    for (text, sanitized) in cases {
        let result = filter_content(text);
        assert_eq!(result.violations, vec![Violation::SocialHandle], "{}", text);
        assert_eq!(result.sanitized_content, sanitized);
    }
}

#[test]
fn test_email_address_is_redacted_whole() {
    let result = filter_content("john.doe@example.com");
    assert_eq!(result.sanitized_content, REDACTION_MARKER);
}

#[test]
fn test_sanitized_text_drops_matched_spans() {
    let cases = [
        ("my ig: ada_styles", "ada_styles"),
        ("ring +234 803 123 4567 today", "+234 803 123 4567"),
        ("0703-555-1234 anytime", "0703-555-1234"),
        ("number 2348031234567", "2348031234567"),
        ("https://twitter.com/adashop", "twitter.com/adashop"),
        ("wa.me/2348031234567", "wa.me"),
    ];

    for (text, secret) in cases {
        let result = filter_content(text);
        assert!(!result.is_clean, "{} should be flagged", text);
        assert!(
            !result.sanitized_content.contains(secret),
            "{:?} still contains {}",
            result.sanitized_content,
            secret
        );
        assert!(result.sanitized_content.contains(REDACTION_MARKER));
    }
}

#[test]
fn test_confidence_is_monotonic_and_bounded() {
    let mut previous = 0.0;
    for matches in 0..20 {
        let confidence = confidence_for(matches);
        assert!((0.0..=1.0).contains(&confidence));
        assert!(confidence >= previous);
        previous = confidence;
    }

    let one = filter_content("@ada");
    let two = filter_content("@ada @obi");
    assert!(two.confidence >= one.confidence);
}

#[test]
fn test_call_me_on_number() {
    let result = filter_content("Call me on 08012345678");

    assert!(!result.is_clean);
    assert!(result.violations.contains(&Violation::SuspiciousContact));
    assert!(result.violations.contains(&Violation::PhoneNumber));
    assert!(!result.sanitized_content.contains("08012345678"));
}

#[test]
fn test_phrasing_flags_without_redaction() {
    let text = "my number is one two three four";
    let result = filter_content(text);

    assert!(!result.is_clean);
    assert_eq!(
        result.violations,
        vec![
            Violation::PhoneNumberInWords,
            Violation::SuspiciousContact,
            Violation::SpelledOutDigits,
        ]
    );
    assert_eq!(result.sanitized_content, text);
}

#[test]
fn test_mixed_language_digit_words() {
    let result = filter_content("cinq, huit, nueve et deux");
    assert!(result.violations.contains(&Violation::PhoneNumberInWords));
}

#[test]
fn test_content_report_mirrors_violations() {
    let report = get_content_report("follow me on tiktok");
    let result = filter_content("follow me on tiktok");

    assert!(!report.safe);
    assert_eq!(report.details, result.violations);
    assert!(!is_content_safe("follow me on tiktok"));
}

#[test]
fn test_haversine_distance_lagos_island_to_ikeja() {
    let distance = haversine_distance(6.4550, 3.3841, 6.6018, 3.3515);
    assert!(distance > 10.0 && distance < 25.0);
}

#[test]
fn test_scores_stay_in_range() {
    let weights = ScoringWeights::default();
    let reputations = [None, Some(0.0), Some(2.5), Some(5.0)];
    let counts = [None, Some(0), Some(7), Some(10_000)];
    let distances = [None, Some(0.0), Some(12.5), Some(49.9), Some(3_000.0)];

    for reputation in reputations {
        for reviews in counts {
            for orders in counts {
                for verified in [false, true] {
                    let mut listing = create_listing();
                    listing.reputation_score = reputation;
                    listing.total_reviews = reviews;
                    listing.total_completed_orders = orders;
                    listing.verified = verified;

                    let trust = calculate_trust_score(&listing);
                    assert!(trust <= 100);
                    assert!(trust >= 50);

                    for distance in distances {
                        let score = calculate_match_score(
                            &listing,
                            trust,
                            distance,
                            PreferredType::Services,
                            &weights,
                        );
                        assert!(score <= 100);
                    }
                }
            }
        }
    }
}

#[test]
fn test_low_quality_signals_for_new_unverified_business() {
    let mut listing = create_listing();
    listing.reputation_score = None;
    listing.total_reviews = None;
    listing.total_completed_orders = None;

    assert_eq!(
        detect_low_quality_signals(&listing),
        vec!["Not verified", "New business"]
    );
}
