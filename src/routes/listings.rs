use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::detect_low_quality_signals;
use crate::error::ApiError;
use crate::models::{
    Listing, ListingSignalsRequest, ListingSignalsResponse, RankListingsRequest,
    RankListingsResponse,
};
use crate::routes::AppState;

const DEFAULT_LIMIT: u16 = 20;
const MAX_LIMIT: u16 = 100;
const MAX_LISTINGS: usize = 1_000;

/// Configure all listing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/listings/rank", web::post().to(rank))
        .route("/listings/signals", web::post().to(signals));
}

/// Rank listings endpoint
///
/// POST /api/v1/listings/rank
///
/// Request body:
/// ```json
/// {
///   "listings": [{ "id": "uuid", "name": "string", ... }],
///   "options": {
///     "userLatitude": 6.52,
///     "userLongitude": 3.37,
///     "preferredType": "goods|services|all",
///     "maxDistance": 10
///   },
///   "limit": 20
/// }
/// ```
async fn rank(
    state: web::Data<AppState>,
    req: web::Json<RankListingsRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let matching = &state.settings.matching;
    let max_listings = matching.max_listings.unwrap_or(MAX_LISTINGS);
    if req.listings.len() > max_listings {
        return Err(ApiError::TooManyListings {
            count: req.listings.len(),
            limit: max_listings,
        });
    }

    let max_limit = matching.max_limit.unwrap_or(MAX_LIMIT);
    let limit = req
        .limit
        .unwrap_or_else(|| matching.default_limit.unwrap_or(DEFAULT_LIMIT))
        .min(max_limit) as usize;

    let RankListingsRequest { listings, options, .. } = req.into_inner();
    let total_candidates = listings.len();

    // Malformed listings are never scored
    let valid: Vec<Listing> = listings
        .into_iter()
        .filter(|listing| match listing.validate() {
            Ok(()) => true,
            Err(errors) => {
                tracing::warn!("Skipping malformed listing {}: {}", listing.id, errors);
                false
            }
        })
        .collect();
    let skipped = total_candidates - valid.len();

    let mut ranked = state.matcher.rank_listings(valid, &options);
    ranked.truncate(limit);

    tracing::info!(
        "Returning {} listings (from {} candidates, {} skipped)",
        ranked.len(),
        total_candidates,
        skipped
    );

    Ok(HttpResponse::Ok().json(RankListingsResponse {
        listings: ranked,
        total_candidates,
        skipped,
    }))
}

/// POST /api/v1/listings/signals
async fn signals(req: web::Json<ListingSignalsRequest>) -> Result<HttpResponse, ApiError> {
    let listing = &req.listing;
    listing.validate()?;

    let warnings = detect_low_quality_signals(listing)
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(HttpResponse::Ok().json(ListingSignalsResponse {
        listing_id: listing.id,
        warnings,
    }))
}
