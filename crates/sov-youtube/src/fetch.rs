//! Search-then-enrich collection of video records.

use futures::stream::{self, StreamExt, TryStreamExt};
use sov_sentiment::VideoRecord;

use crate::client::YoutubeClient;
use crate::error::FetchError;
use crate::normalize::apply_stats;

/// Limits for one collection run.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    /// Search results to request (1..=50).
    pub max_results: u32,
    /// Comments to request per video (1..=100).
    pub max_comments: u32,
    /// Videos enriched at the same time.
    pub concurrency: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_results: 50,
            max_comments: 100,
            concurrency: 4,
        }
    }
}

impl YoutubeClient {
    /// Search for `query`, then fetch statistics and comments for every hit.
    ///
    /// Results keep search order. A failed statistics or comments call for a
    /// single video is logged and leaves zero counts or an empty comment list
    /// on that record; the run continues. An exhausted quota stops the run,
    /// since every later call would fail the same way.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if the search call fails, or
    /// [`FetchError::QuotaExceeded`] if the quota runs out while enriching.
    pub async fn fetch_videos(
        &self,
        query: &str,
        options: FetchOptions,
    ) -> Result<Vec<VideoRecord>, FetchError> {
        let videos = self.search_videos(query, options.max_results).await?;
        tracing::info!(query, count = videos.len(), "search returned videos");

        let enriched: Vec<VideoRecord> = stream::iter(videos)
            .map(|video| self.enrich(video, options.max_comments))
            .buffered(options.concurrency.max(1))
            .try_collect()
            .await?;

        let comments: usize = enriched.iter().map(|v| v.comments.len()).sum();
        tracing::info!(
            videos = enriched.len(),
            comments,
            "collected video statistics and comments"
        );

        Ok(enriched)
    }

    async fn enrich(
        &self,
        mut video: VideoRecord,
        max_comments: u32,
    ) -> Result<VideoRecord, FetchError> {
        let (stats, comments) = futures::join!(
            self.video_statistics(&video.video_id),
            self.video_comments(&video.video_id, max_comments)
        );

        match stats {
            Ok(stats) => apply_stats(&mut video, stats),
            Err(e @ FetchError::QuotaExceeded(_)) => return Err(e),
            Err(e) => {
                tracing::warn!(
                    video_id = %video.video_id,
                    error = %e,
                    "statistics fetch failed; using zero counts"
                );
            }
        }

        match comments {
            Ok(comments) => {
                tracing::debug!(
                    video_id = %video.video_id,
                    count = comments.len(),
                    "fetched comments"
                );
                video.comments = comments;
            }
            Err(e @ FetchError::QuotaExceeded(_)) => return Err(e),
            Err(e) => {
                tracing::warn!(
                    video_id = %video.video_id,
                    error = %e,
                    "comment fetch failed; treating video as having no comments"
                );
            }
        }

        Ok(video)
    }
}
