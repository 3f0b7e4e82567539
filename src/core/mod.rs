// Core algorithm exports
pub mod content_filter;
pub mod distance;
pub mod matcher;
pub mod patterns;
pub mod scoring;
pub mod signals;

pub use content_filter::{filter_content, get_content_report, is_content_safe, REDACTION_MARKER};
pub use distance::{distance_between, haversine_distance};
pub use matcher::{rank_listings, Matcher};
pub use scoring::{calculate_match_score, calculate_trust_score};
pub use signals::detect_low_quality_signals;
