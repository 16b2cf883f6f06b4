use std::path::PathBuf;

use crate::brands::BrandSet;
use crate::ConfigError;

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// `None` when unset or still the placeholder written by `env init`.
    pub youtube_api_key: Option<String>,
    pub search_query: String,
    pub top_n_results: u32,
    pub brands: BrandSet,
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub ollama_temperature: f32,
    pub request_timeout_secs: u64,
    pub max_comments_per_video: u32,
    pub fetch_concurrency: usize,
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    pub output_dir: PathBuf,
}

impl AppConfig {
    /// Returns the `YouTube` API key, or an error naming the variable to set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when no usable key is configured.
    pub fn require_youtube_api_key(&self) -> Result<&str, ConfigError> {
        self.youtube_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("YOUTUBE_API_KEY".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("search_query", &self.search_query)
            .field("top_n_results", &self.top_n_results)
            .field("brands", &self.brands)
            .field("ollama_base_url", &self.ollama_base_url)
            .field("ollama_model", &self.ollama_model)
            .field("ollama_temperature", &self.ollama_temperature)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("max_comments_per_video", &self.max_comments_per_video)
            .field("fetch_concurrency", &self.fetch_concurrency)
            .field("max_retries", &self.max_retries)
            .field("retry_backoff_base_ms", &self.retry_backoff_base_ms)
            .field("output_dir", &self.output_dir)
            .finish()
    }
}
