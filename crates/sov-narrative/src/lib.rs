//! LLM-written Share of Voice narrative backed by a local Ollama server.
//!
//! Three stages run in sequence over the numbers computed by
//! [`sov_sentiment::compute`]; the result is rendered as a markdown report.

pub mod client;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod stages;

pub use client::OllamaClient;
pub use error::NarrativeError;
pub use pipeline::{run_narrative, StageOutput};
pub use report::{render_report, title_case, REPORT_FILE_NAME};
pub use stages::{data_brief, AnalysisContext, Stage};
