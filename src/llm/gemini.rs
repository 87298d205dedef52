use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{RecipeError, Result};
use crate::llm::GenerateContext;

/// LLM engine backed by the Google Generative Language REST API.
///
/// Calls `models/{model}:generateContent` in JSON mode with the recipe
/// schema attached as `responseSchema`, and unwraps the candidate text from
/// the response envelope.
///
/// Configuration priority (highest → lowest):
///   1. Environment variables (`GEMINI_API_KEY`/`API_KEY`, `GEMINI_MODEL`, `GEMINI_BASE_URL`)
///   2. `[llm]` section of `config.toml`
///   3. Built-in defaults
///
/// A missing API key does not fail construction; each `generate` call
/// reports it instead, so the server still starts and serves the form.
pub struct GeminiEngine {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    temperature: Option<f32>,
}

// -- generateContent request/response types ---

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl GeminiEngine {
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.api_key();

        let base_url = std::env::var("GEMINI_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| config.llm.base_url.clone())
            .trim_end_matches('/')
            .to_string();

        let model = std::env::var("GEMINI_MODEL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| config.llm.model.clone());

        let timeout_secs = config.llm.timeout_secs;
        let mut builder = Client::builder();
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| RecipeError::Config(format!("failed to create HTTP client: {e}")))?;

        if api_key.is_none() {
            warn!("no Gemini API key configured; generation requests will fail until GEMINI_API_KEY is set");
        }

        info!(
            model = %model,
            base_url = %base_url,
            timeout_secs,
            has_api_key = api_key.is_some(),
            "Gemini engine initialized"
        );

        Ok(Self {
            client,
            api_key,
            base_url,
            model,
            temperature: config.llm.temperature,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send the prompt in JSON mode and return the raw response text.
    pub async fn generate(&self, ctx: &GenerateContext<'_>) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            RecipeError::MissingCredential(
                "Gemini API key required: set GEMINI_API_KEY (or API_KEY)".into(),
            )
        })?;

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: ctx.prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: ctx.schema,
                temperature: self.temperature,
            },
        };

        debug!(
            model = %self.model,
            prompt_len = ctx.prompt.len(),
            "invoking Gemini generateContent"
        );

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| RecipeError::Transport(format!("Gemini request failed: {e}")))?;

        let status = resp.status();

        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            let error_msg = if let Ok(err_resp) = serde_json::from_str::<ErrorResponse>(&error_text) {
                err_resp
                    .error
                    .map(|e| e.message)
                    .unwrap_or_else(|| error_text.clone())
            } else {
                error_text
            };

            warn!(status = %status, error = %error_msg, "Gemini API error");

            return Err(RecipeError::Transport(format!(
                "Gemini API returned {status}: {error_msg}"
            )));
        }

        let parsed: GenerateContentResponse = resp.json().await.map_err(|e| {
            RecipeError::Transport(format!("failed to decode Gemini response envelope: {e}"))
        })?;

        if let Some(ref usage) = parsed.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                completion_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "Gemini usage"
            );
        }

        let text = extract_text(parsed)?;

        info!(response_len = text.len(), model = %self.model, "Gemini response received");

        Ok(text)
    }
}

/// Unwrap the first candidate's text parts into one string.
fn extract_text(resp: GenerateContentResponse) -> Result<String> {
    if let Some(reason) = resp.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(RecipeError::Refused(format!("prompt blocked: {reason}")));
    }

    let candidate = resp
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| RecipeError::Refused("no candidates returned".into()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    let text = text.trim().to_string();
    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".into());
        return Err(RecipeError::Refused(format!(
            "empty response (finish reason: {reason})"
        )));
    }

    Ok(text)
}
