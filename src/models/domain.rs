use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use validator::Validate;

/// A category of off-platform contact sharing detected in free text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Violation {
    #[serde(rename = "Social media handle detected")]
    SocialHandle,
    #[serde(rename = "WhatsApp reference detected")]
    WhatsApp,
    #[serde(rename = "Phone number detected")]
    PhoneNumber,
    #[serde(rename = "Email address detected")]
    Email,
    #[serde(rename = "Social media link detected")]
    SocialLink,
    #[serde(rename = "Phone number written in words detected")]
    PhoneNumberInWords,
    #[serde(rename = "Suspicious contact sharing attempt")]
    SuspiciousContact,
    #[serde(rename = "Spelled-out number sequence detected")]
    SpelledOutDigits,
}

impl Violation {
    /// Fixed human-readable label for this category
    pub fn label(&self) -> &'static str {
        match self {
            Violation::SocialHandle => "Social media handle detected",
            Violation::WhatsApp => "WhatsApp reference detected",
            Violation::PhoneNumber => "Phone number detected",
            Violation::Email => "Email address detected",
            Violation::SocialLink => "Social media link detected",
            Violation::PhoneNumberInWords => "Phone number written in words detected",
            Violation::SuspiciousContact => "Suspicious contact sharing attempt",
            Violation::SpelledOutDigits => "Spelled-out number sequence detected",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of running the content filter over a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentFilterResult {
    #[serde(rename = "isClean")]
    pub is_clean: bool,
    pub violations: Vec<Violation>,
    #[serde(rename = "sanitizedContent")]
    pub sanitized_content: String,
    /// Heuristic detection strength in [0, 1]. Not a probability.
    pub confidence: f64,
}

/// Summary of a filter run suitable for showing to the sender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentReport {
    pub safe: bool,
    pub message: String,
    pub details: Vec<Violation>,
}

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Builds a point only when both coordinates are known
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self { latitude, longitude }),
            _ => None,
        }
    }
}

/// What a business sells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    Goods,
    Services,
    Both,
}

/// What the viewer is looking for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredType {
    Goods,
    Services,
    #[default]
    All,
}

impl PreferredType {
    /// Whether a listing of the given type satisfies this preference
    pub fn accepts(&self, business_type: Option<BusinessType>) -> bool {
        match (self, business_type) {
            (PreferredType::All, _) => true,
            (_, Some(BusinessType::Both)) => true,
            (PreferredType::Goods, Some(BusinessType::Goods)) => true,
            (PreferredType::Services, Some(BusinessType::Services)) => true,
            _ => false,
        }
    }
}

/// Viewer context used when ranking listings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct MatchingOptions {
    #[serde(rename = "userLatitude", default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub user_latitude: Option<f64>,
    #[serde(rename = "userLongitude", default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub user_longitude: Option<f64>,
    #[serde(rename = "preferredType", default)]
    pub preferred_type: PreferredType,
    /// Maximum distance in kilometers
    #[serde(rename = "maxDistance", default)]
    #[validate(range(min = 0.0))]
    pub max_distance: Option<f64>,
}

impl MatchingOptions {
    /// Viewer location, if both coordinates were supplied
    pub fn viewer_location(&self) -> Option<GeoPoint> {
        GeoPoint::from_parts(self.user_latitude, self.user_longitude)
    }
}

/// Business listing as fetched from the storage collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Listing {
    pub id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    #[serde(rename = "reputationScore", default)]
    #[validate(range(min = 0.0, max = 5.0))]
    pub reputation_score: Option<f64>,
    #[serde(default)]
    pub verified: bool,
    #[serde(rename = "businessType", default)]
    pub business_type: Option<BusinessType>,
    #[serde(rename = "totalReviews", default)]
    pub total_reviews: Option<u32>,
    #[serde(rename = "totalCompletedOrders", default)]
    pub total_completed_orders: Option<u32>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Listing {
    pub fn location(&self) -> Option<GeoPoint> {
        GeoPoint::from_parts(self.latitude, self.longitude)
    }

    /// Review count, treating absent as zero
    pub fn reviews(&self) -> u32 {
        self.total_reviews.unwrap_or(0)
    }

    /// Completed order count, treating absent as zero
    pub fn completed_orders(&self) -> u32 {
        self.total_completed_orders.unwrap_or(0)
    }

    /// Whether the listing has any recorded marketplace activity
    pub fn has_activity(&self) -> bool {
        self.reviews() > 0 || self.completed_orders() > 0
    }
}

/// Listing decorated with per-request ranking fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: Listing,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    /// Kilometers from the viewer, unknown when either side has no coordinates
    pub distance: Option<f64>,
    #[serde(rename = "trustScore")]
    pub trust_score: u8,
}

/// Scoring weights for the match score blend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub trust: f64,
    pub distance: f64,
    pub type_match: f64,
    pub activity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        use crate::core::scoring::{
            ACTIVITY_WEIGHT, DISTANCE_WEIGHT, TRUST_WEIGHT, TYPE_MATCH_WEIGHT,
        };

        Self {
            trust: TRUST_WEIGHT,
            distance: DISTANCE_WEIGHT,
            type_match: TYPE_MATCH_WEIGHT,
            activity: ACTIVITY_WEIGHT,
        }
    }
}
