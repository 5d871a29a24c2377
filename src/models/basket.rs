use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Hotel,
    Room,
    Tour,
    Transport,
    Flight,
    Car,
    Show,
    Activity,
    #[serde(other)]
    Other,
}

impl Default for ItemKind {
    fn default() -> Self {
        ItemKind::Other
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketItem {
    pub product_id: String,
    pub quantity: u32,
    pub unit_price: f64,
    #[serde(default)]
    pub kind: ItemKind,
    #[serde(default = "empty_meta")]
    pub meta: Value,
}

fn empty_meta() -> Value {
    Value::Object(Map::new())
}

impl BasketItem {
    pub fn new(product_id: impl Into<String>, quantity: u32, unit_price: f64, kind: ItemKind) -> Self {
        BasketItem {
            product_id: product_id.into(),
            quantity,
            unit_price,
            kind,
            meta: empty_meta(),
        }
    }

    pub fn with_meta(mut self, meta: Value) -> Self {
        self.meta = meta;
        self
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basket {
    pub user_id: String,
    pub items: Vec<BasketItem>,
}

impl Basket {
    pub fn empty(user_id: impl Into<String>) -> Self {
        Basket {
            user_id: user_id.into(),
            items: Vec::new(),
        }
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(BasketItem::line_total).sum()
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|item| item.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
