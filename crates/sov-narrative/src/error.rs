use thiserror::Error;

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Ollama error: {0}")]
    Ollama(String),

    #[error("stage '{stage}' produced no text")]
    EmptyResponse { stage: String },
}
