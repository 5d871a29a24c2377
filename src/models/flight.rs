use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: u32,
    pub airline: String,
    pub origin: String,
    pub destination: String,
    #[serde(deserialize_with = "timestamp::naive_utc")]
    pub departure: NaiveDateTime,
    #[serde(deserialize_with = "timestamp::naive_utc")]
    pub arrival: NaiveDateTime,
    pub price: f64,
    pub seats_left: u32,
    pub stops: u8,
}

impl Flight {
    pub fn is_direct(&self) -> bool {
        self.stops == 0
    }
}
