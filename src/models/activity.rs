use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    pub duration_hours: f32,
    pub bookings: u32,
}
