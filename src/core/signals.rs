use crate::models::Listing;

pub const LOW_RATING: &str = "Low rating";
pub const NOT_VERIFIED: &str = "Not verified";
pub const NEW_BUSINESS: &str = "New business";
pub const MIXED_REVIEWS: &str = "Mixed reviews";

/// Reputation below which a listing is flagged as poorly rated
pub const LOW_RATING_THRESHOLD: f64 = 2.5;
/// Reputation below which a reviewed listing is flagged as mixed
pub const MIXED_REVIEWS_THRESHOLD: f64 = 3.0;

/// Warnings to surface next to a listing, in fixed order:
/// low rating, not verified, new business, mixed reviews.
///
/// "Mixed reviews" is independent of "Low rating", so a reviewed listing
/// rated below 2.5 carries both.
pub fn detect_low_quality_signals(listing: &Listing) -> Vec<&'static str> {
    let mut warnings = Vec::new();

    if listing.reputation_score.is_some_and(|r| r < LOW_RATING_THRESHOLD) {
        warnings.push(LOW_RATING);
    }

    if !listing.verified {
        warnings.push(NOT_VERIFIED);
    }

    if !listing.has_activity() {
        warnings.push(NEW_BUSINESS);
    }

    if listing.reviews() > 0
        && listing.reputation_score.is_some_and(|r| r < MIXED_REVIEWS_THRESHOLD)
    {
        warnings.push(MIXED_REVIEWS);
    }

    warnings
}
