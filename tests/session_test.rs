#[cfg(test)]
mod jwt_claims {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use wayfarer::session::jwt::{decode_claims, decode_payload};

    fn token_for(payload: Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{}.{}.sig", header, body)
    }

    #[test]
    fn reads_short_claim_names() {
        let token = token_for(json!({
            "sub": "user-1",
            "email": "ana@example.com",
            "roles": ["Staff", "Admin", "Staff"],
            "exp": 1_900_000_000,
        }));

        let claims = decode_claims(&token).unwrap();

        assert_eq!(claims.subject.as_deref(), Some("user-1"));
        assert_eq!(claims.user_id.as_deref(), Some("user-1"));
        assert_eq!(claims.email.as_deref(), Some("ana@example.com"));
        assert_eq!(claims.roles, vec!["Admin".to_string(), "Staff".to_string()]);
        assert_eq!(claims.expires_at, Some(1_900_000_000));
    }

    #[test]
    fn reads_uri_claim_names() {
        let token = token_for(json!({
            "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": "Admin",
            "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier": 31,
            "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress": "root@example.com",
        }));

        let claims = decode_claims(&token).unwrap();

        assert_eq!(claims.user_id.as_deref(), Some("31"));
        assert_eq!(claims.email.as_deref(), Some("root@example.com"));
        assert!(claims.has_role("admin"));
        assert!(!claims.has_role("staff"));
    }

    #[test]
    fn expiry_is_inclusive() {
        let token = token_for(json!({ "sub": "u", "exp": 1_700_000_000.0 }));
        let claims = decode_claims(&token).unwrap();

        let before = Utc.timestamp_opt(1_699_999_999, 0).unwrap();
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        assert!(!claims.is_expired(before));
        assert!(claims.is_expired(at));
    }

    #[test]
    fn no_exp_never_expires() {
        let claims = decode_claims(&token_for(json!({ "sub": "u" }))).unwrap();
        assert!(!claims.is_expired(Utc::now()));
    }

    #[test]
    fn garbage_tokens_decode_to_nothing() {
        assert!(decode_payload("not-a-token").is_none());
        assert!(decode_payload("a.b").is_none());
        assert!(decode_payload("a.!!!.c").is_none());
        let array_payload = format!("h.{}.s", URL_SAFE_NO_PAD.encode("[1,2]"));
        assert!(decode_payload(&array_payload).is_none());
    }
}

#[cfg(test)]
mod store {
    use std::{env, fs, path::PathBuf};

    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use rand::{distributions::Alphanumeric, Rng};
    use serde_json::{json, Value};
    use wayfarer::{
        models::{
            auth::AuthResponse,
            basket::{Basket, BasketItem, ItemKind},
        },
        session::{
            store::{ACCESS_TOKEN, AUTH_TOKEN, GUEST_ID, ROLES, USER_ID},
            SessionStore,
        },
    };

    fn token_for(payload: Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{}.{}.sig", header, body)
    }

    fn scratch_file() -> PathBuf {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(10)
            .map(char::from)
            .collect();
        env::temp_dir()
            .join(format!("wayfarer-{}", suffix))
            .join("session.json")
    }

    #[test]
    fn values_survive_reopening() {
        let path = scratch_file();
        {
            let mut session = SessionStore::open(&path).unwrap();
            session.set(USER_ID, "u-1").unwrap();
            session.set(ROLES, "Staff").unwrap();
        }

        let reopened = SessionStore::open(&path).unwrap();
        assert_eq!(reopened.get(USER_ID), Some("u-1"));
        assert_eq!(reopened.roles(), vec!["Staff".to_string()]);

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let path = scratch_file();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        let session = SessionStore::open(&path).unwrap();
        assert!(session.get(USER_ID).is_none());

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn access_token_preferred_over_auth_token() {
        let mut session = SessionStore::in_memory();
        session.set(AUTH_TOKEN, "legacy").unwrap();
        assert_eq!(session.token().as_deref(), Some("legacy"));

        session.set(ACCESS_TOKEN, "fresh").unwrap();
        assert_eq!(session.token().as_deref(), Some("fresh"));

        session.set(ACCESS_TOKEN, "   ").unwrap();
        assert_eq!(session.token().as_deref(), Some("legacy"));
    }

    #[test]
    fn roles_accept_json_and_comma_lists() {
        let mut session = SessionStore::in_memory();

        session.set(ROLES, r#"["Admin","Staff"]"#).unwrap();
        assert_eq!(session.roles(), vec!["Admin".to_string(), "Staff".to_string()]);

        session.set(ROLES, "Admin, Staff ,").unwrap();
        assert_eq!(session.roles(), vec!["Admin".to_string(), "Staff".to_string()]);
        assert!(session.has_role("staff"));
    }

    #[test]
    fn roles_fall_back_to_token_claims() {
        let mut session = SessionStore::in_memory();
        session
            .set(ACCESS_TOKEN, token_for(json!({ "sub": "u-9", "role": "Staff" })))
            .unwrap();

        assert_eq!(session.roles(), vec!["Staff".to_string()]);
        assert_eq!(session.user_id().as_deref(), Some("u-9"));
    }

    #[test]
    fn guest_id_is_stable_and_persisted() {
        let path = scratch_file();
        let first = {
            let mut session = SessionStore::open(&path).unwrap();
            session.guest_id().unwrap()
        };

        assert!(first.starts_with("guest-"));
        assert_eq!(first.len(), "guest-".len() + 12);

        let mut reopened = SessionStore::open(&path).unwrap();
        assert_eq!(reopened.get(GUEST_ID), Some(first.as_str()));
        assert_eq!(reopened.guest_id().unwrap(), first);

        fs::remove_dir_all(path.parent().unwrap()).ok();
    }

    #[test]
    fn basket_owner_prefers_user_id() {
        let mut session = SessionStore::in_memory();
        let guest = session.basket_owner().unwrap();
        assert!(guest.starts_with("guest-"));

        session.set(USER_ID, "u-5").unwrap();
        assert_eq!(session.basket_owner().unwrap(), "u-5");
    }

    #[test]
    fn apply_login_replaces_legacy_token() {
        let mut session = SessionStore::in_memory();
        session.set(AUTH_TOKEN, "legacy").unwrap();

        session
            .apply_login(&AuthResponse {
                access_token: token_for(json!({ "sub": "u-2", "roles": ["Staff"] })),
                roles: vec!["Admin".to_string()],
                user_id: None,
            })
            .unwrap();

        assert!(session.get(AUTH_TOKEN).is_none());
        assert_eq!(session.roles(), vec!["Admin".to_string()]);
        assert_eq!(session.user_id().as_deref(), Some("u-2"));
    }

    #[test]
    fn logout_keeps_guest_id_only() {
        let mut session = SessionStore::in_memory();
        let guest = session.guest_id().unwrap();
        session
            .apply_login(&AuthResponse {
                access_token: token_for(json!({ "sub": "u-2" })),
                roles: vec!["Staff".to_string()],
                user_id: Some("u-2".to_string()),
            })
            .unwrap();
        let mut basket = Basket::empty("u-2");
        basket.items.push(BasketItem::new("tour-1", 1, 65.0, ItemKind::Tour));
        session.cache_basket(&basket).unwrap();
        assert_eq!(session.cached_basket(), Some(basket));

        session.logout().unwrap();

        assert!(!session.is_logged_in());
        assert!(session.roles().is_empty());
        assert!(session.user_id().is_none());
        assert!(session.cached_basket().is_none());
        assert_eq!(session.guest_id().unwrap(), guest);
    }
}

#[cfg(test)]
mod route_guard {
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};
    use wayfarer::session::{
        guard::{can_access, required_access, Access, AccessDenied},
        store::{ACCESS_TOKEN, ROLES},
        SessionStore,
    };

    fn token_for(payload: Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{}.{}.sig", header, body)
    }

    fn session_with(roles: &str, exp: i64) -> SessionStore {
        let mut session = SessionStore::in_memory();
        session
            .set(ACCESS_TOKEN, token_for(json!({ "sub": "u-1", "exp": exp })))
            .unwrap();
        session.set(ROLES, roles).unwrap();
        session
    }

    #[test]
    fn route_table() {
        assert_eq!(required_access("/"), Access::Public);
        assert_eq!(required_access("/tours/3"), Access::Public);
        assert_eq!(required_access("/administrator"), Access::Public);
        assert_eq!(required_access("/cart"), Access::Authenticated);
        assert_eq!(required_access("/Orders/12?tab=review"), Access::Authenticated);
        assert!(matches!(required_access("/admin/"), Access::AnyRole(_)));
        assert!(matches!(required_access("/staff/hotels#new"), Access::AnyRole(_)));
    }

    #[test]
    fn anonymous_user_is_sent_to_login() {
        let session = SessionStore::in_memory();
        let now = Utc::now();

        assert_eq!(can_access(&session, "/tours", now), Ok(()));
        assert_eq!(can_access(&session, "/cart", now), Err(AccessDenied::NotLoggedIn));
        assert_eq!(can_access(&session, "/admin", now), Err(AccessDenied::NotLoggedIn));
    }

    #[test]
    fn roles_gate_admin_and_staff_areas() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let exp = 1_800_000_000;

        let staff = session_with("Staff", exp);
        assert_eq!(can_access(&staff, "/staff/rooms", now), Ok(()));
        assert_eq!(
            can_access(&staff, "/admin", now),
            Err(AccessDenied::MissingRole("Admin".to_string()))
        );

        let admin = session_with("admin", exp);
        assert_eq!(can_access(&admin, "/admin/users", now), Ok(()));
        assert_eq!(can_access(&admin, "/staff", now), Ok(()));

        let customer = session_with("", exp);
        assert_eq!(can_access(&customer, "/checkout", now), Ok(()));
        assert_eq!(
            can_access(&customer, "/staff", now),
            Err(AccessDenied::MissingRole("Staff, Admin".to_string()))
        );
    }

    #[test]
    fn expired_token_is_rejected_before_roles() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let admin = session_with("Admin", 1_600_000_000);

        assert_eq!(can_access(&admin, "/admin", now), Err(AccessDenied::Expired));
        assert_eq!(can_access(&admin, "/tours", now), Ok(()));
    }
}
