use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use serde_json::Value;

const ROLE_CLAIM_URI: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";
const NAME_ID_CLAIM_URI: &str =
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";
const EMAIL_CLAIM_URI: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress";

/// The parts of a token payload the client cares about. The signature is
/// never checked here; the backend does that on every call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims {
    pub subject: Option<String>,
    pub user_id: Option<String>,
    pub email: Option<String>,
    pub roles: Vec<String>,
    pub expires_at: Option<i64>,
}

impl Claims {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at
            .map(|exp| exp <= now.timestamp())
            .unwrap_or(false)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r.eq_ignore_ascii_case(role))
    }
}

/// Decodes the middle segment of `header.payload.signature`.
pub fn decode_payload(token: &str) -> Option<Value> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let payload_bytes = URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .ok()?;
    let payload: Value = serde_json::from_slice(&payload_bytes).ok()?;
    payload.is_object().then_some(payload)
}

fn string_claim(payload: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match payload.get(*key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn role_claims(payload: &Value) -> Vec<String> {
    let mut roles: Vec<String> = Vec::new();
    for key in ["roles", "role", ROLE_CLAIM_URI] {
        match payload.get(key) {
            Some(Value::String(role)) => roles.push(role.clone()),
            Some(Value::Array(values)) => roles.extend(
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string),
            ),
            _ => {}
        }
    }
    roles.sort();
    roles.dedup();
    roles
}

pub fn decode_claims(token: &str) -> Option<Claims> {
    let payload = decode_payload(token)?;

    let expires_at = payload.get("exp").and_then(|exp| {
        exp.as_i64()
            .or_else(|| exp.as_f64().map(|value| value as i64))
    });

    Some(Claims {
        subject: string_claim(&payload, &["sub"]),
        user_id: string_claim(&payload, &["userId", "nameid", NAME_ID_CLAIM_URI, "sub"]),
        email: string_claim(&payload, &["email", EMAIL_CLAIM_URI]),
        roles: role_claims(&payload),
        expires_at,
    })
}
