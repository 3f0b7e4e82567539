use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Listing, MatchingOptions};

/// Request carrying free text to run through the content filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterContentRequest {
    pub content: String,
}

/// Request to rank a batch of listings for a viewer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankListingsRequest {
    pub listings: Vec<Listing>,
    #[serde(default)]
    #[validate(nested)]
    pub options: MatchingOptions,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

/// Request to compute low-quality warnings for one listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingSignalsRequest {
    pub listing: Listing,
}
