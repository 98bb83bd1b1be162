//! Product records and the recommendation response that carries the analysis.
//!
//! These mirror the upstream recommendation service's payload. Only the
//! `ai_analysis` field feeds the block pipeline; the product records are
//! carried through untouched for presentation layers.

use serde::{Deserialize, Serialize};

use super::Analysis;

/// A product record as returned by the recommendation service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    /// Product identifier
    pub asin: String,

    /// Product title
    pub title: String,

    /// Display price (e.g. "₹29,999"), "N/A" when unknown
    pub price: Option<String>,

    /// Price before discount
    pub original_price: Option<String>,

    /// Average star rating (0.0 - 5.0)
    pub rating: Option<RatingValue>,

    /// Number of ratings
    pub reviews_count: Option<u64>,

    /// Image URL
    pub image: Option<String>,

    /// Product page URL
    pub url: Option<String>,

    /// Prime eligible
    pub is_prime: Option<bool>,

    /// Best seller badge
    pub is_best_seller: Option<bool>,

    /// Delivery note
    pub delivery: Option<String>,
}

/// Star rating, which upstream sends either as a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingValue {
    /// Numeric rating
    Number(f64),
    /// Rating as text (e.g. "4.3")
    Text(String),
}

impl RatingValue {
    /// Get the rating as a number, if it parses.
    pub fn value(&self) -> Option<f64> {
        match self {
            RatingValue::Number(n) => Some(*n),
            RatingValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl Product {
    /// Price for display, "Price unavailable" when missing or "N/A".
    pub fn display_price(&self) -> &str {
        match self.price.as_deref() {
            None | Some("") | Some("N/A") => "Price unavailable",
            Some(price) => price,
        }
    }

    /// Original price, only when it differs from the current price.
    pub fn discounted_from(&self) -> Option<&str> {
        match (self.original_price.as_deref(), self.price.as_deref()) {
            (Some(original), Some(price)) if original != price => Some(original),
            (Some(original), None) => Some(original),
            _ => None,
        }
    }

    /// Rating rounded to whole stars (0-5), `None` if there is no rating.
    pub fn star_count(&self) -> Option<u8> {
        let rating = self.rating.as_ref()?.value()?;
        if !rating.is_finite() {
            return None;
        }
        Some(rating.round().clamp(0.0, 5.0) as u8)
    }

    /// Check if the product carries the best seller badge.
    pub fn is_best_seller(&self) -> bool {
        self.is_best_seller.unwrap_or(false)
    }

    /// Check if the product is Prime eligible.
    pub fn is_prime(&self) -> bool {
        self.is_prime.unwrap_or(false)
    }
}

/// Response of the recommendation service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    /// All products found for the query
    #[serde(default)]
    pub products: Vec<Product>,

    /// Free-text analysis generated by the language model
    pub ai_analysis: String,

    /// Subset of products the model recommended
    #[serde(default)]
    pub recommended_products: Vec<Product>,
}

impl RecommendationResponse {
    /// Check if a product identifier is among the recommended products.
    pub fn is_recommended(&self, asin: &str) -> bool {
        self.recommended_products.iter().any(|p| p.asin == asin)
    }

    /// Run the block pipeline over the analysis text.
    pub fn analysis(&self) -> Analysis {
        crate::parse(&self.ai_analysis)
    }
}
