//! Fetch-and-compute step shared by `analyze`, `narrative` and `run`.

use anyhow::Context;
use sov_core::AppConfig;
use sov_narrative::AnalysisContext;
use sov_sentiment::{compute_for, SoVResult, VideoRecord};
use sov_youtube::{FetchOptions, YoutubeClient};

use crate::SearchArgs;

/// Videos for one search plus the Share of Voice computed over them.
pub(crate) struct Corpus {
    pub ctx: AnalysisContext,
    pub videos: Vec<VideoRecord>,
    pub result: SoVResult,
}

/// Resolve the effective query and result limit from flags and config.
pub(crate) fn effective_search(config: &AppConfig, search: &SearchArgs) -> (String, u32) {
    let query = search
        .query
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map_or_else(|| config.search_query.clone(), str::to_string);
    let limit = search.limit.unwrap_or(config.top_n_results);
    (query, limit)
}

/// Fetch videos and comments, then compute Share of Voice.
///
/// Returns `Ok(None)` after printing a notice when the search finds nothing.
///
/// # Errors
///
/// Returns an error if the API key is missing or the search request fails.
pub(crate) async fn collect_corpus(
    config: &AppConfig,
    search: &SearchArgs,
) -> anyhow::Result<Option<Corpus>> {
    let api_key = config
        .require_youtube_api_key()
        .context("run `sov-cli env check` for setup instructions")?;
    let (query, limit) = effective_search(config, search);

    let client = YoutubeClient::new(api_key, config.request_timeout_secs)?
        .with_retries(config.max_retries, config.retry_backoff_base_ms);
    let options = FetchOptions {
        max_results: limit,
        max_comments: config.max_comments_per_video,
        concurrency: config.fetch_concurrency,
    };

    println!("Searching YouTube for \"{query}\" (top {limit} videos)...");
    let videos = client
        .fetch_videos(&query, options)
        .await
        .with_context(|| format!("failed to fetch videos for \"{query}\""))?;

    if videos.is_empty() {
        println!("No videos found for \"{query}\"; nothing to analyze.");
        return Ok(None);
    }

    let result = compute_for(&videos, &config.brands);
    tracing::info!(
        videos = result.videos_analyzed,
        comments = result.total_comments_scanned,
        mentions = result.total_mentions(),
        "share of voice computed"
    );

    let ctx = AnalysisContext {
        search_query: query,
        target_brand: config.brands.target().to_string(),
        competitor_brands: config.brands.competitors().to_vec(),
    };
    Ok(Some(Corpus {
        ctx,
        videos,
        result,
    }))
}
