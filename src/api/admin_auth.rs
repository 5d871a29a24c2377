use log::info;

use super::{client::ApiClient, error::ApiResult};
use crate::models::auth::{AdminProfile, AuthResponse, LoginRequest, RegisterRequest};

const AUTH_PATH: &str = "/api/admin/auth";

#[derive(Debug, Clone)]
pub struct AdminAuthClient {
    api: ApiClient,
}

impl AdminAuthClient {
    pub fn new(api: ApiClient) -> AdminAuthClient {
        AdminAuthClient { api }
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: AuthResponse = self
            .api
            .post(&format!("{}/login", AUTH_PATH), &request)
            .await?;
        info!("Admin login succeeded for {}", email);
        Ok(response)
    }

    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.api
            .post(&format!("{}/register", AUTH_PATH), request)
            .await
    }

    pub async fn me(&self) -> ApiResult<AdminProfile> {
        self.api.get(&format!("{}/me", AUTH_PATH)).await
    }
}
