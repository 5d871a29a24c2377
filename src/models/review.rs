use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_this_or_that::as_f64;

use super::timestamp;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub user_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "as_f64")]
    pub total: f64,
    #[serde(default, deserialize_with = "timestamp::utc_opt")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub order_id: i64,
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default, deserialize_with = "timestamp::utc_opt")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "timestamp::utc_opt")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub order_id: i64,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    pub fn new(order_id: i64, rating: u8, comment: impl Into<String>) -> Self {
        NewReview {
            order_id,
            rating,
            comment: comment.into(),
        }
    }
}
