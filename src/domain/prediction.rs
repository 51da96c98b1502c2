//! Price prediction wire records.

use serde::{Deserialize, Serialize};

/// Vehicle descriptor submitted for a price estimate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionRequest {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub hp: i32,
    pub body: String,
    #[serde(rename = "yearSell")]
    pub year_sell: i32,
    pub odometer: i32,
    pub color: String,
}

/// Price estimate with reference listings and a rendered chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub price: i32,
    pub sell_count: i32,
    pub urls: Vec<String>,
    /// PNG chart, base64 with the standard alphabet and padding.
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImagesResponse {
    pub urls: Vec<String>,
}
