// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BusinessType, ContentFilterResult, ContentReport, GeoPoint, Listing, MatchingOptions,
    PreferredType, ScoredListing, ScoringWeights, Violation,
};
pub use requests::{FilterContentRequest, ListingSignalsRequest, RankListingsRequest};
pub use responses::{
    ContentSafetyResponse, ErrorResponse, HealthResponse, ListingSignalsResponse,
    RankListingsResponse,
};
