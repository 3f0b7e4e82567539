use actix_web::{web, HttpResponse};
use crate::core::content_filter::report_from;
use crate::error::ApiError;
use crate::models::{ContentFilterResult, ContentSafetyResponse, FilterContentRequest};
use crate::routes::AppState;

/// Configure all content filter routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/content/filter", web::post().to(filter))
        .route("/content/check", web::post().to(check))
        .route("/content/report", web::post().to(report));
}

/// Run a message through the (memoized) filter, rejecting oversized input
async fn run_filter(
    state: &AppState,
    req: &FilterContentRequest,
) -> Result<ContentFilterResult, ApiError> {
    let limit = state.settings.filter.max_content_length;
    if req.content.len() > limit {
        tracing::warn!("Rejecting {} byte message (limit {})", req.content.len(), limit);
        return Err(ApiError::ContentTooLong {
            length: req.content.len(),
            limit,
        });
    }

    let result = state.filter_cache.filter(&req.content).await;

    if !result.is_clean {
        tracing::info!(
            "Flagged message: violations={:?}, confidence={:.2}",
            result.violations,
            result.confidence
        );
    }

    Ok(result)
}

/// Filter content endpoint
///
/// POST /api/v1/content/filter
///
/// Request body:
/// ```json
/// { "content": "string" }
/// ```
async fn filter(
    state: web::Data<AppState>,
    req: web::Json<FilterContentRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = run_filter(&state, &req).await?;
    Ok(HttpResponse::Ok().json(result))
}

/// POST /api/v1/content/check
async fn check(
    state: web::Data<AppState>,
    req: web::Json<FilterContentRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = run_filter(&state, &req).await?;
    Ok(HttpResponse::Ok().json(ContentSafetyResponse {
        safe: result.is_clean,
    }))
}

/// POST /api/v1/content/report
async fn report(
    state: web::Data<AppState>,
    req: web::Json<FilterContentRequest>,
) -> Result<HttpResponse, ApiError> {
    let result = run_filter(&state, &req).await?;
    Ok(HttpResponse::Ok().json(report_from(result)))
}
