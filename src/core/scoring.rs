use crate::models::{Listing, PreferredType, ScoringWeights};

// Trust score terms
pub const TRUST_BASE: f64 = 50.0;
pub const VERIFIED_BONUS: f64 = 15.0;
pub const REPUTATION_SCALE_MAX: f64 = 5.0;
pub const REPUTATION_MAX_BONUS: f64 = 20.0;
pub const REVIEWS_PER_POINT: f64 = 10.0;
pub const REVIEWS_MAX_BONUS: f64 = 10.0;
pub const ORDERS_PER_POINT: f64 = 20.0;
pub const ORDERS_MAX_BONUS: f64 = 5.0;

// Match score blend
pub const TRUST_WEIGHT: f64 = 0.4;
pub const DISTANCE_WEIGHT: f64 = 0.3;
pub const TYPE_MATCH_WEIGHT: f64 = 0.2;
pub const ACTIVITY_WEIGHT: f64 = 0.1;

// Component scores (0-100)
pub const DISTANCE_DECAY_PER_KM: f64 = 2.0;
pub const UNKNOWN_DISTANCE_SCORE: f64 = 50.0;
pub const TYPE_MATCH_SCORE: f64 = 100.0;
pub const TYPE_MISMATCH_SCORE: f64 = 30.0;
pub const ACTIVE_SCORE: f64 = 100.0;
pub const INACTIVE_SCORE: f64 = 50.0;

pub const MAX_SCORE: f64 = 100.0;

/// Calculate the viewer-independent trust score (0-100) for a listing
///
/// Scoring formula:
/// trust = 50
///     + 15 if verified
///     + min(reputation / 5 * 20, 20)
///     + min(reviews / 10, 10)
///     + min(completed_orders / 20, 5)
pub fn calculate_trust_score(listing: &Listing) -> u8 {
    let mut score = TRUST_BASE;

    if listing.verified {
        score += VERIFIED_BONUS;
    }

    if let Some(reputation) = listing.reputation_score {
        score += (reputation / REPUTATION_SCALE_MAX * REPUTATION_MAX_BONUS).min(REPUTATION_MAX_BONUS);
    }

    if let Some(reviews) = listing.total_reviews {
        score += (f64::from(reviews) / REVIEWS_PER_POINT).min(REVIEWS_MAX_BONUS);
    }

    if let Some(orders) = listing.total_completed_orders {
        score += (f64::from(orders) / ORDERS_PER_POINT).min(ORDERS_MAX_BONUS);
    }

    to_score(score)
}

/// Calculate the match score (0-100) of a listing for a viewer
///
/// Scoring formula:
/// score = (
///     trust_score * 0.4 +          # Reputation and verification
///     distance_score * 0.3 +       # 100 - 2/km, neutral 50 if unknown
///     type_score * 0.2 +           # 100 on preference fit, else 30
///     activity_score * 0.1         # 100 with any reviews or orders, else 50
/// )
pub fn calculate_match_score(
    listing: &Listing,
    trust_score: u8,
    distance_km: Option<f64>,
    preferred_type: PreferredType,
    weights: &ScoringWeights,
) -> u8 {
    let total = f64::from(trust_score) * weights.trust
        + calculate_distance_score(distance_km) * weights.distance
        + calculate_type_score(listing, preferred_type) * weights.type_match
        + calculate_activity_score(listing) * weights.activity;

    to_score(total)
}

/// Distance score (0-100), decaying linearly to zero at 50 km
#[inline]
fn calculate_distance_score(distance_km: Option<f64>) -> f64 {
    match distance_km {
        Some(distance) => (MAX_SCORE - distance * DISTANCE_DECAY_PER_KM).max(0.0),
        None => UNKNOWN_DISTANCE_SCORE,
    }
}

#[inline]
fn calculate_type_score(listing: &Listing, preferred_type: PreferredType) -> f64 {
    if preferred_type.accepts(listing.business_type) {
        TYPE_MATCH_SCORE
    } else {
        TYPE_MISMATCH_SCORE
    }
}

#[inline]
fn calculate_activity_score(listing: &Listing) -> f64 {
    if listing.has_activity() {
        ACTIVE_SCORE
    } else {
        INACTIVE_SCORE
    }
}

/// Round and clamp to the 0-100 score range
#[inline]
fn to_score(value: f64) -> u8 {
    value.round().clamp(0.0, MAX_SCORE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BusinessType;
    use uuid::Uuid;

    fn create_test_listing(verified: bool) -> Listing {
        Listing {
            id: Uuid::new_v4(),
            name: "Test Store".to_string(),
            latitude: Some(6.5244),
            longitude: Some(3.3792),
            reputation_score: None,
            verified,
            business_type: Some(BusinessType::Goods),
            total_reviews: None,
            total_completed_orders: None,
            created_at: None,
        }
    }

    #[test]
    fn test_trust_score_base() {
        let listing = create_test_listing(false);
        assert_eq!(calculate_trust_score(&listing), 50);
    }

    #[test]
    fn test_trust_score_maximum() {
        let mut listing = create_test_listing(true);
        listing.reputation_score = Some(5.0);
        listing.total_reviews = Some(500);
        listing.total_completed_orders = Some(1000);

        assert_eq!(calculate_trust_score(&listing), 100);
    }

    #[test]
    fn test_trust_score_partial_terms() {
        let mut listing = create_test_listing(true);
        listing.reputation_score = Some(4.0); // +16
        listing.total_reviews = Some(25); // +2.5
        listing.total_completed_orders = Some(40); // +2

        // 50 + 15 + 16 + 2.5 + 2 = 85.5
        assert_eq!(calculate_trust_score(&listing), 86);
    }

    #[test]
    fn test_distance_score() {
        assert_eq!(calculate_distance_score(Some(0.0)), 100.0);
        assert_eq!(calculate_distance_score(Some(25.0)), 50.0);
        assert_eq!(calculate_distance_score(Some(50.0)), 0.0);
        assert_eq!(calculate_distance_score(Some(400.0)), 0.0);
        assert_eq!(calculate_distance_score(None), UNKNOWN_DISTANCE_SCORE);
    }

    #[test]
    fn test_type_score() {
        let mut listing = create_test_listing(false);
        assert_eq!(calculate_type_score(&listing, PreferredType::Goods), TYPE_MATCH_SCORE);
        assert_eq!(calculate_type_score(&listing, PreferredType::Services), TYPE_MISMATCH_SCORE);

        listing.business_type = Some(BusinessType::Both);
        assert_eq!(calculate_type_score(&listing, PreferredType::Services), TYPE_MATCH_SCORE);

        listing.business_type = None;
        assert_eq!(calculate_type_score(&listing, PreferredType::All), TYPE_MATCH_SCORE);
        assert_eq!(calculate_type_score(&listing, PreferredType::Goods), TYPE_MISMATCH_SCORE);
    }

    #[test]
    fn test_match_score_blend() {
        let listing = create_test_listing(false);
        let weights = ScoringWeights::default();

        // 50*0.4 + 100*0.3 + 100*0.2 + 50*0.1 = 75
        let score = calculate_match_score(&listing, 50, Some(0.0), PreferredType::All, &weights);
        assert_eq!(score, 75);

        // unknown distance: 20 + 15 + 20 + 5 = 60
        let score = calculate_match_score(&listing, 50, None, PreferredType::All, &weights);
        assert_eq!(score, 60);
    }

    #[test]
    fn test_match_score_clamped_with_oversized_weights() {
        let mut listing = create_test_listing(true);
        listing.total_reviews = Some(3);
        let weights = ScoringWeights {
            trust: 1.0,
            distance: 1.0,
            type_match: 1.0,
            activity: 1.0,
        };

        let score = calculate_match_score(&listing, 100, Some(0.0), PreferredType::All, &weights);
        assert_eq!(score, 100);
    }

    #[test]
    fn test_verified_bonus() {
        let verified = create_test_listing(true);
        let unverified = create_test_listing(false);
        let weights = ScoringWeights::default();

        let verified_score = calculate_match_score(
            &verified,
            calculate_trust_score(&verified),
            Some(1.0),
            PreferredType::All,
            &weights,
        );
        let unverified_score = calculate_match_score(
            &unverified,
            calculate_trust_score(&unverified),
            Some(1.0),
            PreferredType::All,
            &weights,
        );

        assert!(verified_score > unverified_score);
    }
}
