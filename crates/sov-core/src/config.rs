use std::env::VarError;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::app_config::AppConfig;
use crate::brands::{load_brand_set, BrandSet};
use crate::ConfigError;

/// Value written to `.env` by `env init`; treated the same as an unset key.
pub const API_KEY_PLACEHOLDER: &str = "YOUR_YOUTUBE_API_KEY_HERE";

/// The search endpoint returns at most 50 results per page.
const MAX_SEARCH_RESULTS: u32 = 50;
/// The `commentThreads` endpoint returns at most 100 threads per page.
const MAX_COMMENTS_PER_PAGE: u32 = 100;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid or the brand roster is unusable.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid or the brand roster is unusable.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let log_level = or_default("SOV_LOG_LEVEL", "info");

    let youtube_api_key = lookup("YOUTUBE_API_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != API_KEY_PLACEHOLDER);

    let search_query = or_default("SEARCH_QUERY", "smart fan");
    if search_query.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "SEARCH_QUERY".to_string(),
            reason: "must be non-empty".to_string(),
        });
    }

    let top_n_results: u32 = parse_var(&or_default, "TOP_N_RESULTS", "50")?;
    check_range("TOP_N_RESULTS", top_n_results, 1, MAX_SEARCH_RESULTS)?;

    let brands = match lookup("SOV_BRANDS_PATH") {
        Ok(path) => load_brand_set(Path::new(&path))?,
        Err(_) => BrandSet::from_csv(
            &or_default("TARGET_BRAND", "atomberg"),
            &or_default("COMPETITOR_BRANDS", "crompton,havells,orient,usha,bajaj"),
        )
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "TARGET_BRAND".to_string(),
            reason: e.to_string(),
        })?,
    };

    let ollama_base_url = or_default("OLLAMA_BASE_URL", "http://localhost:11434");
    let ollama_model = or_default("OLLAMA_MODEL", "gemma3:1b");
    let ollama_temperature: f32 = parse_var(&or_default, "OLLAMA_TEMPERATURE", "0.7")?;
    if !(0.0..=2.0).contains(&ollama_temperature) {
        return Err(ConfigError::InvalidEnvVar {
            var: "OLLAMA_TEMPERATURE".to_string(),
            reason: format!("{ollama_temperature} is outside 0.0..=2.0"),
        });
    }

    let request_timeout_secs: u64 = parse_var(&or_default, "SOV_REQUEST_TIMEOUT_SECS", "30")?;
    let max_comments_per_video: u32 =
        parse_var(&or_default, "SOV_MAX_COMMENTS_PER_VIDEO", "100")?;
    check_range(
        "SOV_MAX_COMMENTS_PER_VIDEO",
        max_comments_per_video,
        1,
        MAX_COMMENTS_PER_PAGE,
    )?;
    let fetch_concurrency: usize = parse_var(&or_default, "SOV_FETCH_CONCURRENCY", "4")?;
    if fetch_concurrency == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "SOV_FETCH_CONCURRENCY".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    let max_retries: u32 = parse_var(&or_default, "SOV_MAX_RETRIES", "2")?;
    let retry_backoff_base_ms: u64 = parse_var(&or_default, "SOV_RETRY_BACKOFF_BASE_MS", "500")?;
    let output_dir = PathBuf::from(or_default("SOV_OUTPUT_DIR", "."));

    Ok(AppConfig {
        log_level,
        youtube_api_key,
        search_query,
        top_n_results,
        brands,
        ollama_base_url,
        ollama_model,
        ollama_temperature,
        request_timeout_secs,
        max_comments_per_video,
        fetch_concurrency,
        max_retries,
        retry_backoff_base_ms,
        output_dir,
    })
}

fn parse_var<T, D>(or_default: &D, var: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    D: Fn(&str, &str) -> String,
{
    let raw = or_default(var, default);
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

fn check_range<T>(var: &str, value: T, min: T, max: T) -> Result<(), ConfigError>
where
    T: PartialOrd + std::fmt::Display,
{
    if value < min || value > max {
        return Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("{value} is outside {min}..={max}"),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
