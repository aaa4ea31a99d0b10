use crate::config::ModelConfig;
use crate::error::{ChangelogError, Result};
use crate::generator::{build_prompt, SummaryGenerator};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Client for the Gemini `generateContent` endpoint
///
/// Constructed once at startup from [ModelConfig] and the API key, then passed
/// to the composer by reference.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Build a client with the configured timeout
    pub fn new(config: &ModelConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("ai-changelog/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ChangelogError::config(format!("Cannot build HTTP client: {}", e)))?;

        Ok(GeminiClient {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.name.clone(),
            api_key: api_key.into(),
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

impl SummaryGenerator for GeminiClient {
    fn summarize(&self, diff: &str) -> Result<String> {
        let prompt = build_prompt(diff);
        let request = GenerateRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: &prompt }],
            }],
        };

        let url = self.url();
        info!(model = %self.model, prompt_bytes = prompt.len(), "requesting change summary");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .map_err(|e| ChangelogError::generation(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ChangelogError::generation(format!(
                "Model returned HTTP {}: {}",
                status,
                body.trim()
            )));
        }

        let body = response
            .text()
            .map_err(|e| ChangelogError::generation(format!("Cannot read response: {}", e)))?;
        debug!(bytes = body.len(), "received model response");

        extract_text(&body)
    }
}

/// Pull the summary text out of a `generateContent` response body.
///
/// Text parts of the first candidate are concatenated in order.
fn extract_text(body: &str) -> Result<String> {
    let response: GenerateResponse = serde_json::from_str(body)
        .map_err(|e| ChangelogError::generation(format!("Malformed response: {}", e)))?;

    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(ChangelogError::generation("Model returned an empty summary"));
    }
    Ok(text)
}
