//! Listing feed wire records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A car listing as exchanged with HTTP clients.
///
/// `listing_id` is empty until the feed service assigns it on create.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CarListing {
    pub listing_id: String,
    pub seller_id: String,
    pub description: String,
    pub posted_at: Option<DateTime<Utc>>,
    pub status: String,
    pub deal_type: String,
    pub price: f64,
    pub tags: Vec<String>,
    pub car_id: String,
    pub mileage: i32,
    pub owners_count: i32,
    pub accidents_count: i32,
    pub condition: String,
    pub color: String,
    pub config_id: String,
    pub engine_type: String,
    pub engine_volume: String,
    pub engine_power: i32,
    pub cylinders: i32,
    pub transmission: String,
    pub drivetrain: String,
    pub model_id: String,
    pub model_name: String,
    pub make: String,
    pub year: i32,
    pub body_type: String,
    pub generation: String,
    pub weight_kg: f64,
    pub seller_name: String,
    pub seller_rating: f64,
    pub seller_sales_count: i32,
    pub seller_is_business: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageResponseMetadata {
    pub total_items: i32,
    pub total_pages: i32,
    pub current_page: i32,
}

/// Response body of list and search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListingPage {
    pub listings: Vec<CarListing>,
    pub page_metadata: PageResponseMetadata,
}

/// Envelope used by get, create and update, in both directions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingEnvelope {
    pub listing: CarListing,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddToFavoritesRequest {
    pub listing_id: String,
}

/// Response body of delete and add-to-favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}
