//! Chat completions request and response models

use serde::Serialize;
use serde_json::Value;

use crate::completion::tokens::RESERVED_OUTPUT_TOKENS;

/// Instruction sent ahead of every user query
pub const SYSTEM_PROMPT: &str = "You are an AI assistant that helps people find information.";

/// Reply used when the response has no first-choice content
pub const NO_CONTENT: &str = "No response content";

pub const TEMPERATURE: f64 = 0.7;
pub const TOP_P: f64 = 0.95;

/// Chat message role
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One typed part of a message's content
#[derive(Debug, Clone, Serialize)]
pub struct ContentPart {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl ContentPart {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: "text",
            text: text.into(),
        }
    }
}

/// Chat message
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: Vec<ContentPart>,
}

/// Chat completion request body
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Build the request for an already-trimmed user query
    pub fn for_query(query: &str) -> Self {
        Self {
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: vec![ContentPart::text(SYSTEM_PROMPT)],
                },
                ChatMessage {
                    role: Role::User,
                    content: vec![ContentPart::text(query)],
                },
            ],
            temperature: TEMPERATURE,
            top_p: TOP_P,
            max_tokens: RESERVED_OUTPUT_TOKENS as u32,
        }
    }
}

/// Extract `choices[0].message.content` from a completion response
///
/// Any other shape yields `None`; callers substitute [`NO_CONTENT`].
pub fn first_choice_content(body: &Value) -> Option<&str> {
    body.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
}
