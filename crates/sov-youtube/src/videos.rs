//! Search, statistics and comment endpoints.

use sov_sentiment::{Comment, VideoRecord};

use crate::client::YoutubeClient;
use crate::error::FetchError;
use crate::normalize::{normalize_comment, normalize_search_item, normalize_stats, VideoStats};
use crate::types::{CommentThreadListResponse, SearchListResponse, VideoListResponse};

impl YoutubeClient {
    /// Searches for videos matching `query`, most relevant first.
    ///
    /// Calls `search.list` once (no pagination), so at most `max_results`
    /// (API cap: 50) records come back. Records carry snippet metadata only;
    /// statistics and comments are filled in by [`YoutubeClient::fetch_videos`].
    ///
    /// # Errors
    ///
    /// - [`FetchError::QuotaExceeded`] if the API quota is used up.
    /// - [`FetchError::Api`] on other API-level failures.
    /// - [`FetchError::Http`] on network failure.
    /// - [`FetchError::Deserialize`] if the response shape is unexpected.
    pub async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<VideoRecord>, FetchError> {
        let max_results = max_results.to_string();
        let url = self.build_url(
            "search",
            &[
                ("part", "id,snippet"),
                ("type", "video"),
                ("order", "relevance"),
                ("maxResults", &max_results),
                ("q", query),
            ],
        );

        let response: SearchListResponse = self
            .get_json(&url, &format!("search(q={query})"))
            .await?;

        Ok(response
            .items
            .into_iter()
            .filter_map(normalize_search_item)
            .collect())
    }

    /// Fetches view, like and comment counts for one video.
    ///
    /// An unknown video id yields zero counts rather than an error.
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeClient::search_videos`].
    pub async fn video_statistics(&self, video_id: &str) -> Result<VideoStats, FetchError> {
        let url = self.build_url("videos", &[("part", "statistics"), ("id", video_id)]);

        let response: VideoListResponse = self
            .get_json(&url, &format!("videos(id={video_id})"))
            .await?;

        Ok(response
            .items
            .first()
            .map(|item| normalize_stats(&item.statistics))
            .unwrap_or_default())
    }

    /// Fetches up to `max_comments` (API cap: 100) top-level comments for a
    /// video, most relevant first.
    ///
    /// # Errors
    ///
    /// Same as [`YoutubeClient::search_videos`]. Videos with comments turned
    /// off return [`FetchError::Api`] with reason `commentsDisabled`.
    pub async fn video_comments(
        &self,
        video_id: &str,
        max_comments: u32,
    ) -> Result<Vec<Comment>, FetchError> {
        let max_comments = max_comments.to_string();
        let url = self.build_url(
            "commentThreads",
            &[
                ("part", "snippet"),
                ("videoId", video_id),
                ("maxResults", &max_comments),
                ("order", "relevance"),
            ],
        );

        let response: CommentThreadListResponse = self
            .get_json(&url, &format!("commentThreads(videoId={video_id})"))
            .await?;

        Ok(response.items.into_iter().map(normalize_comment).collect())
    }
}
