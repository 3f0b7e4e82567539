use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::models::domain::ScoredListing;
use crate::services::CacheStats;

/// Response for the rank listings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankListingsResponse {
    pub listings: Vec<ScoredListing>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    /// Listings dropped because they failed validation
    pub skipped: usize,
}

/// Response for the safety check endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSafetyResponse {
    pub safe: bool,
}

/// Response for the listing signals endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSignalsResponse {
    #[serde(rename = "listingId")]
    pub listing_id: Uuid,
    pub warnings: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "filterCache")]
    pub filter_cache: CacheStats,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}
