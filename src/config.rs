use dotenvy::dotenv;
use log::error;
use serde::Deserialize;
use std::env;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_CHAT_CHANNEL_CAPACITY: usize = 32;

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub http_bind_address: Option<String>,
    pub session_path: Option<String>,
    pub chat_api_url: String,
    pub chat_api_key: Option<String>,
    pub chat_model: String,
    pub chat_system_prompt: Option<String>,
    pub chat_channel_capacity: Option<usize>,
}

impl Config {
    pub fn bind_address(&self) -> String {
        self.http_bind_address
            .clone()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
    }

    pub fn chat_capacity(&self) -> usize {
        self.chat_channel_capacity
            .filter(|capacity| *capacity > 0)
            .unwrap_or(DEFAULT_CHAT_CHANNEL_CAPACITY)
    }
}

pub fn create_test_config() -> Config {
    Config {
        api_base_url: "http://127.0.0.1:5000".to_string(),
        http_bind_address: Some("127.0.0.1:0".to_string()),
        session_path: None,
        chat_api_url: "http://127.0.0.1:5001/v1beta".to_string(),
        chat_api_key: Some("xxx".to_string()),
        chat_model: "gemini-1.5-flash".to_string(),
        chat_system_prompt: None,
        chat_channel_capacity: Some(8),
    }
}

pub fn read_config() -> Config {
    dotenv().ok();
    env::var(CONFIG_PATH_ENV)
        .map_err(|_| format!("{CONFIG_PATH_ENV} .env not set"))
        .and_then(|config_path| std::fs::read(config_path).map_err(|e| e.to_string()))
        .and_then(|bytes| toml::from_slice(&bytes).map_err(|e| e.to_string()))
        .unwrap_or_else(|err| {
            error!("failed to read config: {err}");
            std::process::exit(1);
        })
}
