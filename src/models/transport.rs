use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_this_or_that::{as_f64, as_u64};

use super::timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportType {
    Bus,
    Train,
    Flight,
    Ferry,
    Car,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transport {
    #[serde(default)]
    pub id: i64,
    pub transport_type: TransportType,
    pub name: String,
    #[serde(default, deserialize_with = "as_u64")]
    pub capacity: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportTrip {
    #[serde(default)]
    pub id: i64,
    pub transport_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport_type: Option<TransportType>,
    pub departure: String,
    pub destination: String,
    #[serde(deserialize_with = "timestamp::naive_utc")]
    pub departure_time: NaiveDateTime,
    #[serde(deserialize_with = "timestamp::naive_utc")]
    pub arrival_time: NaiveDateTime,
    #[serde(deserialize_with = "as_f64")]
    pub price: f64,
    #[serde(deserialize_with = "as_u64")]
    pub available_seats: u64,
}

impl TransportTrip {
    pub fn duration_minutes(&self) -> i64 {
        (self.arrival_time - self.departure_time).num_minutes()
    }
}
