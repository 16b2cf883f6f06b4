//! `narrative` command: LLM stages over the computed numbers, saved as markdown.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use sov_core::AppConfig;
use sov_narrative::{render_report, run_narrative, OllamaClient, REPORT_FILE_NAME};

use crate::corpus::{collect_corpus, Corpus};
use crate::SearchArgs;

pub(crate) fn ollama_client(config: &AppConfig) -> anyhow::Result<OllamaClient> {
    Ok(OllamaClient::new(
        &config.ollama_base_url,
        &config.ollama_model,
        config.ollama_temperature,
    )?)
}

/// Run the narrative stages for `corpus` and write the report.
///
/// # Errors
///
/// Returns an error if a stage fails or the report cannot be written.
pub(crate) async fn write_narrative(
    config: &AppConfig,
    client: &OllamaClient,
    corpus: &Corpus,
) -> anyhow::Result<PathBuf> {
    println!(
        "Writing narrative report with {} ({} videos, {} comments)...",
        client.model(),
        corpus.result.videos_analyzed,
        corpus.result.total_comments_scanned
    );
    let stages = run_narrative(client, &corpus.ctx, &corpus.videos, &corpus.result).await?;
    let report = render_report(
        &corpus.ctx,
        client.model(),
        &corpus.result,
        &stages,
        Utc::now(),
    );

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;
    let path = config.output_dir.join(REPORT_FILE_NAME);
    std::fs::write(&path, report).with_context(|| format!("failed to write {}", path.display()))?;

    println!("Narrative report saved to {}", path.display());
    Ok(path)
}

/// Check Ollama, fetch, compute, then narrate.
///
/// # Errors
///
/// Returns an error if Ollama is unreachable, fetching fails, or a stage fails.
pub(crate) async fn run_narrative_command(
    config: &AppConfig,
    search: &SearchArgs,
) -> anyhow::Result<()> {
    let client = ollama_client(config)?;
    if !client.is_available().await {
        anyhow::bail!(
            "Ollama is not reachable at {}; start it with `ollama serve` and pull the model \
             with `ollama pull {}`, or use `sov-cli analyze`",
            config.ollama_base_url,
            config.ollama_model
        );
    }

    let Some(corpus) = collect_corpus(config, search).await? else {
        return Ok(());
    };
    write_narrative(config, &client, &corpus).await?;
    Ok(())
}
