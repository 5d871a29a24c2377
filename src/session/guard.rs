use chrono::{DateTime, Utc};
use thiserror::Error;

use super::store::SessionStore;

pub const ADMIN_ROLE: &str = "Admin";
pub const STAFF_ROLE: &str = "Staff";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    AnyRole(&'static [&'static str]),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    #[error("Please log in to continue")]
    NotLoggedIn,
    #[error("Your session has expired, please log in again")]
    Expired,
    #[error("You need one of the roles {0} to open this page")]
    MissingRole(String),
}

const ADMIN_ONLY: &[&str] = &[ADMIN_ROLE];
const STAFF_OR_ADMIN: &[&str] = &[STAFF_ROLE, ADMIN_ROLE];

const PROTECTED_ROUTES: [(&str, Access); 6] = [
    ("/admin", Access::AnyRole(ADMIN_ONLY)),
    ("/staff", Access::AnyRole(STAFF_OR_ADMIN)),
    ("/cart", Access::Authenticated),
    ("/checkout", Access::Authenticated),
    ("/profile", Access::Authenticated),
    ("/orders", Access::Authenticated),
];

fn matches_prefix(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
}

pub fn required_access(path: &str) -> Access {
    let path = path
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_lowercase();

    PROTECTED_ROUTES
        .iter()
        .find(|(prefix, _)| matches_prefix(&path, prefix))
        .map(|(_, access)| *access)
        .unwrap_or(Access::Public)
}

pub fn check(session: &SessionStore, access: Access, now: DateTime<Utc>) -> Result<(), AccessDenied> {
    if access == Access::Public {
        return Ok(());
    }

    if !session.is_logged_in() {
        return Err(AccessDenied::NotLoggedIn);
    }
    if session
        .claims()
        .map(|claims| claims.is_expired(now))
        .unwrap_or(false)
    {
        return Err(AccessDenied::Expired);
    }

    match access {
        Access::AnyRole(roles) if !roles.iter().any(|role| session.has_role(role)) => {
            Err(AccessDenied::MissingRole(roles.join(", ")))
        }
        _ => Ok(()),
    }
}

pub fn can_access(session: &SessionStore, path: &str, now: DateTime<Utc>) -> Result<(), AccessDenied> {
    check(session, required_access(path), now)
}
