//! Assistant model client
//!
//! The `ModelClient` trait is the seam between the interpreter and the
//! hosted model: the interpreter only ever sees prompt-in, text-out, so
//! tests substitute a canned client and never touch the network.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::error::{PocketError, PocketResult};

/// Model used for both command parsing and financial advice
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Text-in, text-out boundary to the hosted model
pub trait ModelClient {
    /// Send one prompt and return the raw response text
    fn generate(&self, prompt: &str) -> PocketResult<String>;
}

/// Client for the Gemini generateContent endpoint
pub struct GeminiClient {
    api_key: String,
    model: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Create a client for the default model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    fn http_client(&self) -> PocketResult<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| PocketError::AssistantUnreachable(e.to_string()))
    }
}

impl ModelClient for GeminiClient {
    fn generate(&self, prompt: &str) -> PocketResult<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            API_BASE, self.model, self.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .http_client()?
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| PocketError::AssistantUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PocketError::Assistant(format!(
                "Service returned HTTP {}",
                status.as_u16()
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| PocketError::Assistant(format!("Malformed response body: {}", e)))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(PocketError::Assistant("Empty response from model".into()));
        }
        Ok(text)
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;

    /// Canned client returning a fixed response or error
    pub struct FakeClient {
        pub response: Result<String, &'static str>,
    }

    impl FakeClient {
        pub fn replies(text: &str) -> Self {
            Self {
                response: Ok(text.to_string()),
            }
        }

        pub fn unreachable() -> Self {
            Self {
                response: Err("connection refused"),
            }
        }
    }

    impl ModelClient for FakeClient {
        fn generate(&self, _prompt: &str) -> PocketResult<String> {
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(msg) => Err(PocketError::AssistantUnreachable(msg.to_string())),
            }
        }
    }
}
