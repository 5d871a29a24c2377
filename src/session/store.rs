use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::{info, warn};
use rand::{distributions::Alphanumeric, Rng};
use serde::{de::DeserializeOwned, Serialize};

use super::jwt::{decode_claims, Claims};
use crate::models::{
    auth::{AdminProfile, AuthResponse},
    basket::Basket,
};

pub const ACCESS_TOKEN: &str = "accessToken";
pub const AUTH_TOKEN: &str = "authToken";
pub const ROLES: &str = "roles";
pub const USER_ID: &str = "userId";
pub const GUEST_ID: &str = "guestId";
pub const CART_CACHE: &str = "cart";
pub const PROFILE_CACHE: &str = "profile";

const GUEST_ID_LENGTH: usize = 12;

/// String key/value storage that survives restarts, with the same keys the
/// web client keeps in browser storage. Every write goes straight to disk and
/// there is no locking, so two processes sharing a file can lose updates.
#[derive(Debug, Default)]
pub struct SessionStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl SessionStore {
    pub fn in_memory() -> SessionStore {
        SessionStore::default()
    }

    pub fn open(path: impl AsRef<Path>) -> Result<SessionStore> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let bytes = fs::read(&path)
                .with_context(|| format!("Failed to read session file {}", path.display()))?;
            match serde_json::from_slice(&bytes) {
                Ok(values) => values,
                Err(e) => {
                    warn!(
                        "Session file {} is corrupt, starting empty: {}",
                        path.display(),
                        e
                    );
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(SessionStore {
            path: Some(path),
            values,
        })
    }

    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let bytes = serde_json::to_vec_pretty(&self.values)?;
        fs::write(path, bytes)
            .with_context(|| format!("Failed to write session file {}", path.display()))?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        self.values.insert(key.to_string(), value.into());
        self.persist()
    }

    pub fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.values.clear();
        self.persist()
    }

    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key).and_then(|raw| serde_json::from_str(raw).ok())
    }

    fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, raw)
    }

    pub fn token(&self) -> Option<String> {
        [ACCESS_TOKEN, AUTH_TOKEN]
            .iter()
            .filter_map(|key| self.get(key))
            .map(str::trim)
            .find(|token| !token.is_empty())
            .map(str::to_string)
    }

    pub fn claims(&self) -> Option<Claims> {
        self.token().and_then(|token| decode_claims(&token))
    }

    /// Stored roles win; older sessions only have them inside the token.
    pub fn roles(&self) -> Vec<String> {
        match self.get(ROLES) {
            Some(raw) => serde_json::from_str::<Vec<String>>(raw).unwrap_or_else(|_| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|role| !role.is_empty())
                    .map(str::to_string)
                    .collect()
            }),
            None => self.claims().map(|claims| claims.roles).unwrap_or_default(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles().iter().any(|r| r.eq_ignore_ascii_case(role))
    }

    pub fn user_id(&self) -> Option<String> {
        self.get(USER_ID)
            .map(str::to_string)
            .or_else(|| self.claims().and_then(|claims| claims.user_id))
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn guest_id(&mut self) -> Result<String> {
        if let Some(existing) = self.get(GUEST_ID) {
            return Ok(existing.to_string());
        }

        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(GUEST_ID_LENGTH)
            .map(char::from)
            .collect();
        let guest_id = format!("guest-{}", suffix);
        self.set(GUEST_ID, guest_id.clone())?;
        Ok(guest_id)
    }

    /// The id the remote basket is keyed by.
    pub fn basket_owner(&mut self) -> Result<String> {
        match self.user_id() {
            Some(user_id) => Ok(user_id),
            None => self.guest_id(),
        }
    }

    pub fn cache_basket(&mut self, basket: &Basket) -> Result<()> {
        self.set_json(CART_CACHE, basket)
    }

    pub fn cached_basket(&self) -> Option<Basket> {
        self.get_json(CART_CACHE)
    }

    pub fn cache_profile(&mut self, profile: &AdminProfile) -> Result<()> {
        self.set_json(PROFILE_CACHE, profile)
    }

    pub fn cached_profile(&self) -> Option<AdminProfile> {
        self.get_json(PROFILE_CACHE)
    }

    pub fn apply_login(&mut self, auth: &AuthResponse) -> Result<()> {
        let claims = decode_claims(&auth.access_token).unwrap_or_default();

        let roles = if auth.roles.is_empty() {
            claims.roles.clone()
        } else {
            auth.roles.clone()
        };
        let user_id = auth.user_id.clone().or(claims.user_id);

        self.values
            .insert(ACCESS_TOKEN.to_string(), auth.access_token.clone());
        self.values.remove(AUTH_TOKEN);
        self.values
            .insert(ROLES.to_string(), serde_json::to_string(&roles)?);
        match user_id {
            Some(id) => {
                self.values.insert(USER_ID.to_string(), id);
            }
            None => {
                self.values.remove(USER_ID);
            }
        }
        self.persist()?;

        info!("Stored session with roles {:?}", roles);
        Ok(())
    }

    /// Drops credentials and per-user caches; the guest id survives so an
    /// anonymous basket keeps its key.
    pub fn logout(&mut self) -> Result<()> {
        for key in [ACCESS_TOKEN, AUTH_TOKEN, ROLES, USER_ID, CART_CACHE, PROFILE_CACHE] {
            self.values.remove(key);
        }
        self.persist()
    }
}
