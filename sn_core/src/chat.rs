//! # Chat Contract
//!
//! Types shared with the remote chat endpoint. The transport itself lives in
//! the GUI; this module owns the request/response shapes, how a response is
//! turned into a line of transcript text, and the context clamp applied
//! before the plot snapshot is embedded in a prompt.
//!
//! ## Wire format
//!
//! ```text
//! POST <endpoint>
//! request:  {"message": "...", "context": {"curves": [...], "settings": {...}, "scenario": ...}}
//! response: {"reply": "..."} | {"error": "..."}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{FatigueError, FatigueResult};
use crate::state::PlotContext;

/// Character budget for the serialized context
pub const DEFAULT_CONTEXT_CHARS: usize = 20_000;

/// Curves kept when the context has to be slimmed down
pub const SLIM_CURVE_LIMIT: usize = 8;

/// Chat request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: PlotContext,
}

impl ChatRequest {
    /// Build a request; blank messages are not sent.
    pub fn new(message: &str, context: PlotContext) -> Option<Self> {
        let message = message.trim();
        if message.is_empty() {
            return None;
        }
        Some(ChatRequest {
            message: message.to_string(),
            context,
        })
    }
}

/// Interpretation of a chat endpoint response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    /// `{"reply": "..."}`
    Reply(String),
    /// `{"error": "..."}`
    Error(String),
    /// Any other shape
    NoResponse,
}

impl ChatReply {
    /// Classify a parsed JSON response. `reply` wins over `error`; empty
    /// strings count as absent.
    pub fn from_json(value: &Value) -> Self {
        let non_empty = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        if let Some(reply) = non_empty("reply") {
            ChatReply::Reply(reply)
        } else if let Some(error) = non_empty("error") {
            ChatReply::Error(error)
        } else {
            ChatReply::NoResponse
        }
    }

    /// Classify a raw response body. A body that is not JSON is an error.
    pub fn from_body(body: &str) -> FatigueResult<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| FatigueError::chat_response(e.to_string()))?;
        Ok(ChatReply::from_json(&value))
    }

    /// Transcript line for this reply
    pub fn display_text(&self) -> String {
        match self {
            ChatReply::Reply(text) => text.clone(),
            ChatReply::Error(error) => format!("Error: {}", error),
            ChatReply::NoResponse => "(No response)".to_string(),
        }
    }
}

/// Transcript line for a request that never produced a usable response
pub fn failure_text(error: &FatigueError) -> String {
    match error {
        FatigueError::ChatRequest { reason } | FatigueError::ChatResponse { reason } => {
            format!("Network error: {}", reason)
        }
        other => format!("Network error: {}", other),
    }
}

/// Serialize the context compactly, slimming it when it is too large.
///
/// Over budget, only the first [`SLIM_CURVE_LIMIT`] curves and the settings
/// are kept. The slim form is returned even if it is still over budget.
pub fn clamp_context(context: &PlotContext, max_chars: usize) -> String {
    let payload = match serde_json::to_string(context) {
        Ok(json) => json,
        Err(_) => return "{}".to_string(),
    };
    if payload.chars().count() <= max_chars {
        return payload;
    }

    let slim = serde_json::json!({
        "curves": context.curves.iter().take(SLIM_CURVE_LIMIT).collect::<Vec<_>>(),
        "settings": context.settings,
    });
    serde_json::to_string(&slim).unwrap_or_else(|_| "{}".to_string())
}

/// Who wrote a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    Me,
    Bot,
}

/// One transcript entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// In-memory chat transcript, oldest first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatTranscript {
    pub messages: Vec<ChatMessage>,
}

impl ChatTranscript {
    pub fn push(&mut self, sender: Sender, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            sender,
            text: text.into(),
            sent_at: Utc::now(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }
}
