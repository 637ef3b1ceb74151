// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Gemini client for composing sentences from recognized gesture words

use std::time::Duration;

use anyhow::{anyhow, Result};
use reqwest::Client;
use tracing::{debug, info, warn};

// --- generateContent serde structs ---

#[derive(serde::Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(serde::Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct Part {
    text: String,
}

#[derive(serde::Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Returned when the service produces no usable text.
pub const FALLBACK_SENTENCE: &str = "Error generating sentence.";

/// Default REST endpoint of the generative language API.
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model used for sentence composition.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One retry on transient failures; every attempt spends provider quota.
const MAX_ATTEMPTS: usize = 2;

fn compose_prompt(words: &str) -> String {
    format!(
        "Using only these words: {words}, generate a natural, concise, and \
         grammatically correct sentence. You may rearrange the words and add \
         minimal connecting words if necessary for clarity, but do not add \
         unrelated content. The sentence should clearly convey the intended \
         meaning as a human would express it. Use emojis only if they enhance \
         understanding, and keep the response brief and to the point."
    )
}

/// Client for the Gemini `generateContent` API.
///
/// The API key is sent as a request header and never appears in URLs or
/// log output.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a new client against `endpoint` (trailing slashes trimmed).
    pub fn new(endpoint: &str, model: &str, api_key: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!(
            "Gemini client configured: endpoint={}, model={}",
            endpoint, model
        );

        Ok(Self {
            client,
            endpoint,
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// The model this client talks to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Compose a sentence from gesture words.
    ///
    /// The words are joined with single spaces in their original order and
    /// embedded into the instruction prompt. An empty response from the
    /// service degrades to [`FALLBACK_SENTENCE`]; transport errors and 5xx
    /// responses are retried once before surfacing as errors.
    pub async fn compose(&self, words: &[String]) -> Result<String> {
        let joined = words.join(" ");
        let joined = joined.trim();
        debug!("composing sentence from: {joined:?}");

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: compose_prompt(joined),
                }],
            }],
        };
        let url = format!("{}/models/{}:generateContent", self.endpoint, self.model);

        let mut last_error = None;
        for attempt in 1..=MAX_ATTEMPTS {
            match self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&request)
                .send()
                .await
            {
                Ok(response) if response.status().is_server_error() => {
                    warn!(
                        "generative API returned {} (attempt {attempt})",
                        response.status()
                    );
                    last_error = Some(anyhow!(
                        "generative API returned {}",
                        response.status()
                    ));
                }
                Ok(response) => {
                    let response = response.error_for_status()?;
                    let body: GenerateContentResponse = response.json().await?;
                    let sentence =
                        response_text(&body).unwrap_or_else(|| FALLBACK_SENTENCE.to_string());
                    info!("sentence composed ({} chars)", sentence.len());
                    return Ok(sentence);
                }
                Err(e) => {
                    warn!("generative API request failed (attempt {attempt}): {e}");
                    last_error = Some(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("sentence generation failed")))
    }
}

/// First candidate's text, trimmed; `None` when the service produced nothing.
fn response_text(response: &GenerateContentResponse) -> Option<String> {
    let content = response.candidates.first()?.content.as_ref()?;
    let text = content
        .parts
        .iter()
        .map(|part| part.text.as_str())
        .collect::<Vec<_>>()
        .join("");
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
