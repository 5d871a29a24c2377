use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Method,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::{
    envelope::{error_message, parse_body, unwrap_envelope},
    error::{ApiError, ApiResult},
};
use crate::session::store::SessionStore;

/// Thin wrapper over `reqwest::Client` bound to the booking backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiClient {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> ApiClient {
        self.token = Some(token.into());
        self
    }

    /// Picks up whatever token the session currently holds.
    pub fn from_session(base_url: &str, session: &SessionStore) -> ApiClient {
        let mut client = ApiClient::new(base_url);
        client.token = session.token();
        client
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn headers(&self) -> HeaderMap {
        let mut headers: HeaderMap = HeaderMap::new();
        if let Some(token) = &self.token {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(e) => warn!("Ignoring malformed access token: {}", e),
            };
        }
        headers
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Value> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, url).headers(self.headers());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let fallback = status.canonical_reason().unwrap_or("Unknown error");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: error_message(&text, fallback),
            });
        }

        Ok(unwrap_envelope(parse_body(&text)))
    }

    pub async fn get_value(&self, path: &str) -> ApiResult<Value> {
        self.send::<()>(Method::GET, path, None).await
    }

    pub async fn post_value<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        self.send(Method::POST, path, Some(body)).await
    }

    pub async fn put_value<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> ApiResult<Value> {
        self.send(Method::PUT, path, Some(body)).await
    }

    pub async fn delete_value(&self, path: &str) -> ApiResult<Value> {
        self.send::<()>(Method::DELETE, path, None).await
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        decode(self.get_value(path).await?)
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        decode(self.post_value(path, body).await?)
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        decode(self.put_value(path, body).await?)
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.delete_value(path).await.map(|_| ())
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(ApiError::from)
}
