//! Market Match - contact-sharing content filter and listing ranking for the marketplace
//!
//! This library provides two independent, pure components:
//! - a content filter that flags attempts to move conversations off the platform
//! - a scorer that ranks business listings by trust, distance and type fit

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{
    detect_low_quality_signals, filter_content, get_content_report, is_content_safe,
    rank_listings, Matcher,
};
pub use models::{
    ContentFilterResult, ContentReport, Listing, MatchingOptions, ScoredListing, ScoringWeights,
    Violation,
};
