use serde::{Deserialize, Serialize};
use serde_this_or_that::{as_f64, as_u64};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, deserialize_with = "as_u64")]
    pub stars: u64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    #[serde(default)]
    pub id: i64,
    pub hotel_id: i64,
    pub room_type: String,
    #[serde(deserialize_with = "as_u64")]
    pub capacity: u64,
    #[serde(deserialize_with = "as_f64")]
    pub price_per_night: f64,
    #[serde(default, deserialize_with = "as_u64")]
    pub available_rooms: u64,
}

impl Room {
    pub fn is_available(&self) -> bool {
        self.available_rooms > 0
    }
}
