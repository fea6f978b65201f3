use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A buyer's review of a completed contract. At most one [`ReviewResponse`]
/// is owned by the review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub contract_id: String,
    pub reviewer_id: String,
    #[serde(default)]
    pub reviewer_name: Option<String>,
    pub reviewed_user_id: String,
    pub rating: u8,
    #[serde(default)]
    pub quality_rating: Option<u8>,
    #[serde(default)]
    pub delivery_rating: Option<u8>,
    #[serde(default)]
    pub communication_rating: Option<u8>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub is_verified_purchase: bool,
    #[serde(default)]
    pub response: Option<ReviewResponse>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Seller's reply attached to a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: String,
    pub responder_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Fixed 1–5 star histogram. The backend keys entries by the literal star
/// value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingDistribution {
    #[serde(rename = "1", default)]
    pub one: u32,
    #[serde(rename = "2", default)]
    pub two: u32,
    #[serde(rename = "3", default)]
    pub three: u32,
    #[serde(rename = "4", default)]
    pub four: u32,
    #[serde(rename = "5", default)]
    pub five: u32,
}

impl RatingDistribution {
    pub const fn count_for(&self, stars: u8) -> u32 {
        match stars {
            1 => self.one,
            2 => self.two,
            3 => self.three,
            4 => self.four,
            5 => self.five,
            _ => 0,
        }
    }

    pub const fn total(&self) -> u32 {
        self.one + self.two + self.three + self.four + self.five
    }
}

/// Aggregate computed remotely and consumed read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub average_rating: f64,
    pub total_reviews: u32,
    #[serde(default)]
    pub rating_distribution: RatingDistribution,
    #[serde(default)]
    pub average_quality: Option<f64>,
    #[serde(default)]
    pub average_delivery: Option<f64>,
    #[serde(default)]
    pub average_communication: Option<f64>,
}
