//! # Response Envelopes
//!
//! The top-level JSON wrappers returned by the quote routes.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::quotes::Quote;

/// `{"quote": {...}}`
#[derive(Debug, Clone, Serialize)]
pub struct RandomQuoteResponse {
    pub quote: Quote,
}

/// `{"quotes": [...]}`
#[derive(Debug, Clone, Serialize)]
pub struct QuotesResponse {
    pub quotes: Vec<Quote>,
}

/// `{"quote": [...]}`
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub quote: Vec<Quote>,
}

/// `{"Success": "<message>"}`
#[derive(Debug, Clone, Serialize)]
pub struct SuccessMessage {
    #[serde(rename = "Success")]
    pub message: String,
}

impl SuccessMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create and update: `{"response": {"Success": ...}}`
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse {
    pub response: SuccessMessage,
}

impl MutationResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            response: SuccessMessage::new(message),
        }
    }
}

/// Delete: `{"success": {"Success": ...}}`
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub success: SuccessMessage,
}

impl DeleteResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: SuccessMessage::new(message),
        }
    }
}

/// `{"error": {"<Category>": "<message>"}}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEnvelope {
    pub error: BTreeMap<&'static str, String>,
}

impl ErrorEnvelope {
    pub fn new(category: &'static str, message: impl Into<String>) -> Self {
        let mut error = BTreeMap::new();
        error.insert(category, message.into());
        Self { error }
    }
}
