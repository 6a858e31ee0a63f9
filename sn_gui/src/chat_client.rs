//! Chat endpoint client.
//!
//! Posts the message together with the current plot context. The response
//! body is classified regardless of HTTP status, since the endpoint reports
//! failures as `{"error": ...}` bodies.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use sn_core::chat::{ChatReply, ChatRequest};
use sn_core::errors::{FatigueError, FatigueResult};

use crate::config::ChatConfig;

/// Current application version (from Cargo.toml)
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Send one chat request and classify the response
pub async fn send(config: ChatConfig, request: ChatRequest) -> FatigueResult<ChatReply> {
    let client = build_client(&config)?;

    log::debug!(
        "POST {} ({} curves in context)",
        config.endpoint,
        request.context.curves.len()
    );

    let response = client
        .post(&config.endpoint)
        .json(&request)
        .send()
        .await
        .map_err(|e| FatigueError::chat_request(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FatigueError::chat_request(e.to_string()))?;

    if !status.is_success() {
        log::warn!("Chat endpoint returned {}", status);
    }

    ChatReply::from_body(&body)
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &ChatConfig) -> FatigueResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(format!("Basquin/{}", CURRENT_VERSION))
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| FatigueError::chat_request(format!("Failed to create HTTP client: {}", e)))
}

// The browser owns timeouts and the user agent on WASM
#[cfg(target_arch = "wasm32")]
fn build_client(_config: &ChatConfig) -> FatigueResult<reqwest::Client> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| FatigueError::chat_request(format!("Failed to create HTTP client: {}", e)))
}
