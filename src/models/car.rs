use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: u32,
    pub model: String,
    pub company: String,
    pub city: String,
    pub price_per_day: f64,
    pub seats: u32,
    pub rating: f64,
    pub trips: u32,
}
