//! Sequential stage runner.

use sov_sentiment::{SoVResult, VideoRecord};

use crate::client::OllamaClient;
use crate::error::NarrativeError;
use crate::stages::{data_brief, AnalysisContext, Stage};

/// Text produced by one stage.
#[derive(Debug, Clone)]
pub struct StageOutput {
    pub stage: Stage,
    pub text: String,
}

/// Run every stage in order, feeding each one the previous stage's text.
///
/// The numbers in the prompts come from `result`; the model only narrates.
///
/// # Errors
///
/// Returns the first [`NarrativeError`] raised by a stage, or
/// [`NarrativeError::EmptyResponse`] if a stage answers with blank text.
pub async fn run_narrative(
    client: &OllamaClient,
    ctx: &AnalysisContext,
    videos: &[VideoRecord],
    result: &SoVResult,
) -> Result<Vec<StageOutput>, NarrativeError> {
    let brief = data_brief(ctx, videos, result);
    let mut outputs: Vec<StageOutput> = Vec::with_capacity(Stage::ALL.len());

    for stage in Stage::ALL {
        let previous = outputs.last().map(|o| o.text.as_str());
        let system = stage.system_prompt(ctx);
        let prompt = stage.prompt(ctx, &brief, previous);

        tracing::info!(stage = %stage, model = client.model(), "running narrative stage");
        let text = client.generate(Some(&system), &prompt).await?;
        let text = text.trim().to_string();
        if text.is_empty() {
            return Err(NarrativeError::EmptyResponse {
                stage: stage.role().to_string(),
            });
        }
        tracing::debug!(stage = %stage, chars = text.len(), "stage complete");

        outputs.push(StageOutput { stage, text });
    }

    Ok(outputs)
}
