//! Quick analysis: console table, insights and the JSON artifact.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sov_core::AppConfig;
use sov_narrative::title_case;
use sov_sentiment::{BrandSov, SoVResult};

use crate::corpus::{collect_corpus, Corpus};
use crate::SearchArgs;

/// Shape of `quick_analysis_<timestamp>.json`.
#[derive(Debug, Serialize)]
pub(crate) struct AnalysisArtifact<'a> {
    pub generated_at: DateTime<Utc>,
    pub search_query: &'a str,
    pub target_brand: &'a str,
    pub competitor_brands: &'a [String],
    pub videos_analyzed: u64,
    pub total_comments_scanned: u64,
    pub brands: &'a [BrandSov],
}

impl<'a> AnalysisArtifact<'a> {
    pub(crate) fn new(corpus: &'a Corpus, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            search_query: &corpus.ctx.search_query,
            target_brand: &corpus.ctx.target_brand,
            competitor_brands: &corpus.ctx.competitor_brands,
            videos_analyzed: corpus.result.videos_analyzed,
            total_comments_scanned: corpus.result.total_comments_scanned,
            brands: &corpus.result.brands,
        }
    }
}

pub(crate) fn artifact_file_name(at: DateTime<Utc>) -> String {
    format!("quick_analysis_{}.json", at.format("%Y%m%d_%H%M%S"))
}

/// Per-brand lines: `• Atomberg: 12.3% (4 mentions)` followed by the positive SoV.
pub(crate) fn brand_lines(result: &SoVResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(result.brands.len() * 2);
    for b in &result.brands {
        lines.push(format!(
            "• {}: {:.1}% ({} mentions)",
            title_case(&b.brand),
            b.sov_percentage,
            b.total_mentions
        ));
        lines.push(format!("  - Positive SoV: {:.1}%", b.positive_sov_percentage));
    }
    lines
}

pub(crate) fn summary_lines(result: &SoVResult) -> Vec<String> {
    vec![
        format!("• Videos analyzed: {}", result.videos_analyzed),
        format!("• Comments analyzed: {}", result.total_comments_scanned),
        format!("• Total brand mentions: {}", result.total_mentions()),
    ]
}

/// Target position plus the strongest competitor by Share of Voice.
pub(crate) fn insight_lines(result: &SoVResult) -> Vec<String> {
    if result.total_mentions() == 0 {
        return vec!["• No brand mentions found in the scanned comments".to_string()];
    }

    let mut lines = Vec::new();
    let Some(target) = result.target() else {
        return lines;
    };
    let target_name = title_case(&target.brand);
    lines.push(format!(
        "• {target_name} has {:.1}% Share of Voice with {} mentions",
        target.sov_percentage, target.total_mentions
    ));
    lines.push(format!(
        "• {target_name} holds {:.1}% of all positive mentions",
        target.positive_sov_percentage
    ));

    if let Some(top) = result.top_competitor() {
        let top_name = title_case(&top.brand);
        if top.sov_percentage > target.sov_percentage {
            lines.push(format!(
                "• Top competitor: {top_name} at {:.1}% ({:.1} points ahead)",
                top.sov_percentage,
                top.sov_percentage - target.sov_percentage
            ));
        } else {
            lines.push(format!(
                "• {target_name} leads; closest competitor is {top_name} at {:.1}%",
                top.sov_percentage
            ));
        }
    }
    lines
}

/// Write the artifact into `dir`, creating it if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub(crate) fn save_artifact(
    dir: &Path,
    artifact: &AnalysisArtifact<'_>,
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    let path = dir.join(artifact_file_name(artifact.generated_at));
    let json = serde_json::to_string_pretty(artifact)?;
    std::fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}

/// Print the quick analysis for an already collected corpus.
///
/// # Errors
///
/// Returns an error if `save` is set and the artifact cannot be written.
pub(crate) fn print_and_save(
    config: &AppConfig,
    corpus: &Corpus,
    save: bool,
) -> anyhow::Result<()> {
    let result = &corpus.result;

    println!("Share of Voice for \"{}\"", corpus.ctx.search_query);
    for line in brand_lines(result) {
        println!("{line}");
    }
    println!("\nSummary:");
    for line in summary_lines(result) {
        println!("{line}");
    }
    println!("\nInsights:");
    for line in insight_lines(result) {
        println!("{line}");
    }

    if save {
        let artifact = AnalysisArtifact::new(corpus, Utc::now());
        let path = save_artifact(&config.output_dir, &artifact)?;
        println!("\nResults saved to {}", path.display());
    }
    Ok(())
}

/// Fetch, compute and print; the JSON artifact is written unless `save` is false.
///
/// # Errors
///
/// Returns an error if fetching fails or the artifact cannot be written.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    search: &SearchArgs,
    save: bool,
) -> anyhow::Result<()> {
    let Some(corpus) = collect_corpus(config, search).await? else {
        return Ok(());
    };
    print_and_save(config, &corpus, save)
}

#[cfg(test)]
#[path = "analyze_test.rs"]
mod tests;
