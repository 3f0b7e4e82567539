// Route exports
pub mod content;
pub mod listings;

use actix_web::{web, HttpResponse, Responder};
use crate::config::Settings;
use crate::core::Matcher;
use crate::models::HealthResponse;
use crate::services::FilterCache;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub filter_cache: FilterCache,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let matcher = Matcher::new((&settings.scoring.weights).into());
        let filter_cache = FilterCache::new(
            settings.cache.l1_cache_size.unwrap_or(10_000),
            settings.cache.ttl_secs.unwrap_or(300),
        );

        Self {
            matcher,
            filter_cache,
            settings: Arc::new(settings),
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .route("/health", web::get().to(health_check))
            .configure(content::configure)
            .configure(listings::configure),
    );
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        filter_cache: state.filter_cache.stats(),
    })
}
