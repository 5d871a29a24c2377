//! Relay between the browser chat widget and the generative-AI provider.
//!
//! The user's message (and an optional image) is sent together with a fixed
//! system prompt; the provider's streamed answer is decoded and pushed chunk
//! by chunk into a bounded channel that backs the HTTP response body.

pub mod sse;

use anyhow::anyhow;
use async_channel::{Receiver, Sender};
use base64::{engine::general_purpose::STANDARD, Engine};
use futures::StreamExt;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::Config;
use sse::SseDecoder;

pub const SYSTEM_PROMPT: &str = "You are the travel assistant of an online booking site. \
Help travellers find hotels, rooms, tours, flights, ground transport and shows, \
explain prices and booking steps, and suggest itineraries. Keep answers short and \
friendly, use the traveller's language, and never invent availability or prices: \
tell the user to check the listing pages for live data. If a photo is attached, \
describe the place and suggest what to do there.";

const API_KEY_HEADER: &str = "x-goog-api-key";

pub type ChatChunk = anyhow::Result<String>;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message must not be empty")]
    EmptyMessage,

    #[error("Attached image is not valid base64 data")]
    InvalidImage,

    #[error("Chat provider answered {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Chat provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ChatError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, ChatError::EmptyMessage | ChatError::InvalidImage)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatImage {
    pub mime_type: String,
    pub data: String,
}

impl ChatImage {
    /// Accepts the `data:image/png;base64,....` form a file input produces.
    pub fn from_data_url(url: &str) -> Option<ChatImage> {
        let rest = url.trim().strip_prefix("data:")?;
        let (header, data) = rest.split_once(',')?;
        let mime_type = header.strip_suffix(";base64")?;
        Some(ChatImage {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }

    fn normalized(&self) -> Result<ChatImage, ChatError> {
        let image = ChatImage::from_data_url(&self.data).unwrap_or_else(|| self.clone());
        if STANDARD.decode(image.data.trim()).is_err() {
            return Err(ChatError::InvalidImage);
        }
        Ok(image)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub image: Option<ChatImage>,
}

impl ChatRequest {
    pub fn text(message: impl Into<String>) -> ChatRequest {
        ChatRequest {
            message: message.into(),
            image: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatProxy {
    http: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
    system_prompt: String,
    capacity: usize,
}

impl ChatProxy {
    pub fn from_config(config: &Config) -> ChatProxy {
        ChatProxy {
            http: reqwest::Client::new(),
            api_url: config.chat_api_url.trim_end_matches('/').to_string(),
            api_key: config.chat_api_key.clone(),
            model: config.chat_model.clone(),
            system_prompt: config
                .chat_system_prompt
                .clone()
                .unwrap_or_else(|| SYSTEM_PROMPT.to_string()),
            capacity: config.chat_capacity(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.api_url, self.model
        )
    }

    pub fn build_payload(&self, request: &ChatRequest) -> Result<Value, ChatError> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let mut parts: Vec<Value> = vec![json!({ "text": message })];
        if let Some(image) = &request.image {
            let image = image.normalized()?;
            parts.push(json!({
                "inline_data": {
                    "mime_type": image.mime_type,
                    "data": image.data.trim(),
                }
            }));
        }

        Ok(json!({
            "system_instruction": { "parts": [{ "text": self.system_prompt }] },
            "contents": [{ "role": "user", "parts": parts }],
        }))
    }

    /// Opens the upstream stream and returns the receiving end of the relay.
    /// Dropping the receiver stops the relay at its next send.
    pub async fn stream(&self, request: &ChatRequest) -> Result<Receiver<ChatChunk>, ChatError> {
        let payload = self.build_payload(request)?;

        let mut upstream = self.http.post(self.endpoint()).json(&payload);
        if let Some(key) = &self.api_key {
            upstream = upstream.header(API_KEY_HEADER, key);
        }

        let response = upstream.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Upstream {
                status: status.as_u16(),
                message: body.trim().to_string(),
            });
        }

        info!("Relaying chat answer from {}", self.model);
        let (tx, rx) = async_channel::bounded(self.capacity);
        tokio::spawn(relay(response, tx));
        Ok(rx)
    }

    /// Whole answer at once, for callers that do not stream.
    pub async fn ask(&self, request: &ChatRequest) -> anyhow::Result<String> {
        let chunks = self.stream(request).await?;
        collect_reply(chunks).await
    }
}

async fn relay(response: reqwest::Response, tx: Sender<ChatChunk>) {
    let mut decoder = SseDecoder::new();
    let mut bytes = response.bytes_stream();

    while let Some(chunk) = bytes.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                error!("Chat stream interrupted: {}", e);
                let _ = tx.send(Err(anyhow!("chat stream interrupted: {}", e))).await;
                return;
            }
        };

        for text in decoder.push(&chunk) {
            if tx.send(Ok(text)).await.is_err() {
                debug!("Chat client disconnected, stopping relay");
                return;
            }
        }
    }

    if let Some(text) = decoder.finish() {
        let _ = tx.send(Ok(text)).await;
    }
}

pub async fn collect_reply(chunks: Receiver<ChatChunk>) -> anyhow::Result<String> {
    let mut reply = String::new();
    while let Ok(chunk) = chunks.recv().await {
        reply.push_str(&chunk?);
    }
    Ok(reply)
}
