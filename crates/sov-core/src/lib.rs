//! Shared configuration and brand roster types for the Share-of-Voice tracker.

mod app_config;
mod brands;
mod config;

pub use app_config::AppConfig;
pub use brands::{load_brand_set, BrandEntry, BrandSet, BrandsFile, Relationship};
pub use config::{load_app_config, load_app_config_from_env, API_KEY_PLACEHOLDER};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read brands file {path}: {source}")]
    BrandsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse brands file: {0}")]
    BrandsFileParse(#[from] serde_yaml::Error),

    #[error("brand roster validation failed: {0}")]
    Validation(String),
}
