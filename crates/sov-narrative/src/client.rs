//! Ollama HTTP client for text generation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::NarrativeError;

/// Local models can take minutes on CPU.
const GENERATE_TIMEOUT_SECS: u64 = 300;
const PROBE_TIMEOUT_SECS: u64 = 5;

/// Ollama HTTP client bound to one model.
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    temperature: f32,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    /// Create a client for `model` served at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`NarrativeError::Http`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, model: &str, temperature: f32) -> Result<Self, NarrativeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(GENERATE_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            temperature,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether an Ollama server answers on `/api/tags`.
    ///
    /// Any failure, including a timeout, counts as unavailable.
    pub async fn is_available(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        match self
            .client
            .get(&url)
            .timeout(Duration::from_secs(PROBE_TIMEOUT_SECS))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Ollama probe failed");
                false
            }
        }
    }

    /// Generate a single non-streamed completion.
    ///
    /// # Errors
    ///
    /// Returns [`NarrativeError::Http`] on network failure and
    /// [`NarrativeError::Ollama`] on a non-2xx status or unparseable body.
    pub async fn generate(
        &self,
        system: Option<&str>,
        prompt: &str,
    ) -> Result<String, NarrativeError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            system,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
            },
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NarrativeError::Ollama(format!(
                "Ollama returned status {status}: {}",
                body.chars().take(200).collect::<String>()
            )));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| NarrativeError::Ollama(format!("Ollama response parse error: {e}")))?;

        Ok(parsed.response)
    }
}
