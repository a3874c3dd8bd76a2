use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::BackendError;

/// Hosted inference endpoint; the model id is appended per request.
const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Environment variable holding an optional API token for the hosted
/// endpoint. Anonymous calls work but are rate-limited harder.
const API_TOKEN_ENV: &str = "HF_TOKEN";

/// Anything that can translate one piece of text with a named model.
///
/// The orchestrator calls this at most once per chunk and never retries;
/// rate limiting, caching, and model loading are the implementation's
/// business. One call is in flight at a time.
#[allow(async_fn_in_trait)]
pub trait TranslationBackend {
    async fn translate(
        &self,
        text: &str,
        model_id: &str,
        max_length: usize,
    ) -> Result<String, BackendError>;
}

// Borrowed request structs: serialized once, never stored.
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_length: usize,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct InferenceOutput {
    translation_text: String,
}

/// Client for the hosted Hugging Face inference API.
///
/// Requests carry `wait_for_model` so a cold model blocks server-side
/// instead of failing, and no client timeout is set for the same reason.
pub struct HfInferenceClient {
    client: Client,
    base_url: String,
    api_token: Option<String>,
}

impl HfInferenceClient {
    #[must_use]
    pub fn new(api_token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token,
        }
    }

    /// Builds a client with the token from `HF_TOKEN`, when set.
    #[must_use]
    pub fn from_env() -> Self {
        let api_token = std::env::var(API_TOKEN_ENV)
            .ok()
            .filter(|token| !token.is_empty());
        Self::new(api_token)
    }
}

impl TranslationBackend for HfInferenceClient {
    async fn translate(
        &self,
        text: &str,
        model_id: &str,
        max_length: usize,
    ) -> Result<String, BackendError> {
        let url = format!("{}/{model_id}", self.base_url.trim_end_matches('/'));

        let body = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters { max_length },
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        debug!(model = %model_id, chars = text.chars().count(), "calling translation backend");

        let mut http_request = self.client.post(&url).json(&body);

        // Add Authorization header if a token is present
        if let Some(token) = &self.api_token {
            http_request = http_request.header("Authorization", format!("Bearer {token}"));
        }

        let response = http_request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status,
                body: snippet(&body),
            });
        }

        let body = response.text().await?;
        parse_translation_response(&body)
    }
}

/// Extracts the translated text from a backend response body.
///
/// The accepted shape is a JSON array whose first element has a non-empty
/// `translation_text` string. Everything else, including the backend's own
/// `{"error": ...}` bodies, is an invalid response; the caller treats it as
/// a failed call, never as translated text.
fn parse_translation_response(body: &str) -> Result<String, BackendError> {
    let outputs: Vec<InferenceOutput> = serde_json::from_str(body).map_err(|_| {
        BackendError::InvalidResponse(format!("expected a translation array, got: {}", snippet(body)))
    })?;

    let first = outputs
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::InvalidResponse("empty result list".to_string()))?;

    if first.translation_text.is_empty() {
        return Err(BackendError::InvalidResponse(
            "empty translation_text".to_string(),
        ));
    }

    Ok(first.translation_text)
}

/// First 200 characters of a response body, for error messages.
fn snippet(body: &str) -> String {
    const LIMIT: usize = 200;
    if body.chars().count() <= LIMIT {
        body.to_string()
    } else {
        let cut: String = body.chars().take(LIMIT).collect();
        format!("{cut}...")
    }
}
