//! `env` command: create and check the `.env` file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;
use sov_core::API_KEY_PLACEHOLDER;

/// Sub-commands available under `env`.
#[derive(Debug, Subcommand)]
pub enum EnvCommands {
    /// Write a default `.env` if none exists
    Init {
        /// Where to write the file
        #[arg(long, default_value = ".env")]
        path: PathBuf,
    },
    /// Report whether a `YouTube` API key is configured
    Check,
}

pub(crate) const DEFAULT_ENV: &str = "\
# YouTube Data API v3 key
YOUTUBE_API_KEY=YOUR_YOUTUBE_API_KEY_HERE

# Search settings
SEARCH_QUERY=smart fan
TOP_N_RESULTS=50

# Brands (lowercase; competitors comma separated)
TARGET_BRAND=atomberg
COMPETITOR_BRANDS=crompton,havells,orient,usha,bajaj

# Local LLM for narrative reports
OLLAMA_BASE_URL=http://localhost:11434
OLLAMA_MODEL=gemma3:1b
OLLAMA_TEMPERATURE=0.7

SOV_LOG_LEVEL=info
SOV_OUTPUT_DIR=.
";

const KEY_INSTRUCTIONS: &str = "\
To get a YouTube Data API key:
  1. Open https://console.cloud.google.com/
  2. Create a project (or select an existing one)
  3. Enable \"YouTube Data API v3\" under APIs & Services > Library
  4. Create an API key under APIs & Services > Credentials
  5. Set YOUTUBE_API_KEY in your .env file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ApiKeyStatus {
    Missing,
    Placeholder,
    Set,
}

pub(crate) fn api_key_status(value: Option<&str>) -> ApiKeyStatus {
    match value.map(str::trim) {
        None | Some("") => ApiKeyStatus::Missing,
        Some(API_KEY_PLACEHOLDER) => ApiKeyStatus::Placeholder,
        Some(_) => ApiKeyStatus::Set,
    }
}

/// Write [`DEFAULT_ENV`] to `path` unless a file is already there.
///
/// Returns `false` when the file existed and was left untouched.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub(crate) fn write_default_env(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    std::fs::write(path, DEFAULT_ENV)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}

/// # Errors
///
/// Returns an error if `init` cannot write the file.
pub(crate) fn run_env(command: &EnvCommands) -> anyhow::Result<()> {
    match command {
        EnvCommands::Init { path } => {
            if write_default_env(path)? {
                println!("Created {}", path.display());
                println!("Edit it and set YOUTUBE_API_KEY before running an analysis.");
            } else {
                println!("{} already exists; leaving it unchanged", path.display());
            }
        }
        EnvCommands::Check => {
            let key = std::env::var("YOUTUBE_API_KEY").ok();
            match api_key_status(key.as_deref()) {
                ApiKeyStatus::Set => println!("YOUTUBE_API_KEY is set"),
                ApiKeyStatus::Placeholder => {
                    println!("YOUTUBE_API_KEY still has the placeholder value\n");
                    println!("{KEY_INSTRUCTIONS}");
                }
                ApiKeyStatus::Missing => {
                    println!("YOUTUBE_API_KEY is not set\n");
                    println!("{KEY_INSTRUCTIONS}");
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sov-cli-{}-{name}", std::process::id()))
    }

    #[test]
    fn key_status_distinguishes_placeholder() {
        assert_eq!(api_key_status(None), ApiKeyStatus::Missing);
        assert_eq!(api_key_status(Some("  ")), ApiKeyStatus::Missing);
        assert_eq!(
            api_key_status(Some(API_KEY_PLACEHOLDER)),
            ApiKeyStatus::Placeholder
        );
        assert_eq!(api_key_status(Some("AIzaSyExample")), ApiKeyStatus::Set);
    }

    #[test]
    fn default_env_uses_placeholder_key() {
        assert!(DEFAULT_ENV.contains(&format!("YOUTUBE_API_KEY={API_KEY_PLACEHOLDER}")));
    }

    #[test]
    fn write_default_env_creates_file_once() {
        let path = temp_path("init.env");
        let _ = std::fs::remove_file(&path);

        assert!(write_default_env(&path).unwrap());
        std::fs::write(&path, "YOUTUBE_API_KEY=mine\n").unwrap();
        assert!(!write_default_env(&path).unwrap());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "YOUTUBE_API_KEY=mine\n"
        );

        std::fs::remove_file(&path).unwrap();
    }
}
