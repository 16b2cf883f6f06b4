//! HTTP client for the `YouTube` Data API v3.
//!
//! Wraps `reqwest` with API key handling, transient-error retries, and
//! translation of the API's JSON error envelope into [`FetchError`].

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::FetchError;
use crate::retry::retry_with_backoff;
use crate::types::ErrorEnvelope;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Error reasons that mean the request budget is used up.
const QUOTA_REASONS: &[&str] = &["quotaExceeded", "dailyLimitExceeded", "rateLimitExceeded"];

/// Client for the `YouTube` Data API v3.
///
/// Use [`YoutubeClient::new`] for production or
/// [`YoutubeClient::with_base_url`] to point at a mock server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, FetchError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// Retries are disabled until [`YoutubeClient::with_retries`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`FetchError::InvalidBaseUrl`] if `base_url`
    /// does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("sov-tracker/0.1 (share-of-voice)")
            .build()?;

        // Exactly one trailing slash so `Url::join` appends the endpoint
        // instead of replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| FetchError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            max_retries: 0,
            backoff_base_ms: 0,
        })
    }

    /// Enable retries on transient failures.
    #[must_use]
    pub fn with_retries(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Builds the request URL for `endpoint` with the API key and `params`
    /// percent-encoded into the query string.
    pub(crate) fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self
            .base_url
            .join(endpoint)
            .unwrap_or_else(|_| self.base_url.clone());
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// GETs `url` (with retries) and deserializes the body as `T`.
    ///
    /// `context` names the call in error messages; it must not contain the key.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, FetchError> {
        let body = retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            self.request_text(url)
        })
        .await?;

        serde_json::from_str(&body).map_err(|e| FetchError::Deserialize {
            context: context.to_string(),
            source: e,
        })
    }

    /// Sends one GET and returns the body of a 2xx response.
    ///
    /// Transport errors drop their URL, since the query string holds the key.
    async fn request_text(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Http(e.without_url()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Http(e.without_url()))?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(api_error(status.as_u16(), &body))
        }
    }
}

/// Translate a non-2xx response into a [`FetchError`].
///
/// Bodies that are not an API error envelope keep the raw text as message.
pub(crate) fn api_error(status: u16, body: &str) -> FetchError {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return FetchError::Api {
            status,
            reason: "unknown".to_string(),
            message: body.chars().take(200).collect(),
        };
    };

    let reason = envelope
        .error
        .errors
        .first()
        .map(|e| e.reason.clone())
        .unwrap_or_default();

    if QUOTA_REASONS.contains(&reason.as_str()) {
        return FetchError::QuotaExceeded(envelope.error.message);
    }

    FetchError::Api {
        status,
        reason,
        message: envelope.error.message,
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
