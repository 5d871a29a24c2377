//! Response shape normalization.
//!
//! The backend is inconsistent about envelopes: some endpoints answer with
//! `{ "data": ... }`, others with the raw body, and basket endpoints use
//! several spellings for the item list.

use serde_json::{Map, Value};

use crate::models::basket::{Basket, BasketItem, ItemKind};

const ITEM_LIST_KEYS: [&str; 4] = ["data", "items", "basketItems", "Items"];

/// Empty bodies read as `null`; bodies that are not JSON are kept as a string
/// so the caller can still show them.
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// `{ "data": x }` becomes `x`. A null `data` is not an envelope: the rest of
/// the object is kept.
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.get("data").map_or(false, |data| !data.is_null()) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Best-effort message for a failed call, preferring what the server said.
pub fn error_message(text: &str, fallback: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) {
        for key in ["message", "title", "error", "detail"] {
            if let Some(Value::String(message)) = map.get(key) {
                return message.clone();
            }
        }
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

fn item_list(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => ITEM_LIST_KEYS
            .iter()
            .filter_map(|key| map.get(*key))
            .find_map(item_list),
        _ => None,
    }
}

fn string_field(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match map.get(*key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn number_field(map: &Map<String, Value>, key: &str) -> Option<f64> {
    match map.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

fn kind_field(map: &Map<String, Value>) -> ItemKind {
    map.get("kind")
        .or_else(|| map.get("type"))
        .and_then(Value::as_str)
        .and_then(|kind| serde_json::from_value(Value::String(kind.to_lowercase())).ok())
        .unwrap_or_default()
}

/// Reads one basket line. `unitPrice` falls back to `price`, then to 0.
pub fn normalize_item(value: &Value) -> Option<BasketItem> {
    let map = value.as_object()?;
    let product_id = string_field(map, &["productId", "id"])?;

    let quantity = number_field(map, "quantity")
        .map(|quantity| quantity.max(0.0).round() as u32)
        .unwrap_or(1);
    let unit_price = number_field(map, "unitPrice")
        .or_else(|| number_field(map, "price"))
        .unwrap_or(0.0);
    let meta = match map.get("meta") {
        Some(meta) if !meta.is_null() => meta.clone(),
        _ => Value::Object(Map::new()),
    };

    Some(BasketItem {
        product_id,
        quantity,
        unit_price,
        kind: kind_field(map),
        meta,
    })
}

pub fn normalize_items(value: &Value) -> Vec<BasketItem> {
    item_list(value)
        .map(|items| items.iter().filter_map(normalize_item).collect())
        .unwrap_or_default()
}

/// `None` when the body carries no item list at all, which happens on
/// mutation endpoints that answer with a bare status.
pub fn normalize_basket(user_id: &str, value: &Value) -> Option<Basket> {
    item_list(value)?;

    let owner = value
        .as_object()
        .and_then(|map| string_field(map, &["userId"]))
        .unwrap_or_else(|| user_id.to_string());

    Some(Basket {
        user_id: owner,
        items: normalize_items(value),
    })
}
