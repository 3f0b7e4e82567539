use crate::models::{Listing, MatchingOptions, ScoredListing, ScoringWeights};
use crate::core::{
    distance::distance_between,
    scoring::{calculate_match_score, calculate_trust_score},
};

/// Listing ranking orchestrator
///
/// # Pipeline Stages
/// 1. Distance from the viewer (unknown when either side lacks coordinates)
/// 2. Trust and match scoring
/// 3. Max-distance filter (known distances only)
/// 4. Stable sort by match score
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single listing for the viewer described by `options`
    pub fn score_listing(&self, listing: Listing, options: &MatchingOptions) -> ScoredListing {
        let distance = distance_between(options.viewer_location(), listing.location());
        let trust_score = calculate_trust_score(&listing);
        let match_score = calculate_match_score(
            &listing,
            trust_score,
            distance,
            options.preferred_type,
            &self.weights,
        );

        ScoredListing {
            listing,
            match_score,
            distance,
            trust_score,
        }
    }

    /// Rank listings for a viewer
    ///
    /// # Arguments
    /// * `listings` - Raw listings fetched from storage
    /// * `options` - Viewer location and preferences
    ///
    /// # Returns
    /// Scored listings, highest match score first. Listings with equal
    /// scores keep their input order.
    pub fn rank_listings(
        &self,
        listings: Vec<Listing>,
        options: &MatchingOptions,
    ) -> Vec<ScoredListing> {
        // The distance cap only applies when the viewer location is known
        let max_distance = options
            .max_distance
            .filter(|_| options.viewer_location().is_some());

        let mut scored: Vec<ScoredListing> = listings
            .into_iter()
            .map(|listing| self.score_listing(listing, options))
            .filter(|scored| match (scored.distance, max_distance) {
                (Some(distance), Some(max)) => distance <= max,
                _ => true,
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        scored
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank listings with the default scoring weights
pub fn rank_listings(listings: Vec<Listing>, options: &MatchingOptions) -> Vec<ScoredListing> {
    Matcher::with_default_weights().rank_listings(listings, options)
}
