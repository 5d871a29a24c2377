use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_this_or_that::{as_f64, as_u64};

use super::timestamp;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(deserialize_with = "timestamp::date")]
    pub start_date: NaiveDate,
    #[serde(deserialize_with = "timestamp::date")]
    pub end_date: NaiveDate,
    #[serde(deserialize_with = "as_f64")]
    pub price: f64,
    #[serde(default, deserialize_with = "as_u64")]
    pub available_tickets: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Show {
    pub fn is_sold_out(&self) -> bool {
        self.available_tickets == 0
    }
}
