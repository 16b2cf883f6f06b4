//! Conversion of `YouTube` API types into the records the aggregator consumes.

use sov_sentiment::{Comment, VideoRecord};

use crate::types::{CommentThread, SearchItem, VideoStatisticsRaw};

/// View, like and comment counts for one video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoStats {
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
}

/// Parse a string count, treating missing or malformed values as 0.
#[must_use]
pub fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

#[must_use]
pub fn normalize_stats(raw: &VideoStatisticsRaw) -> VideoStats {
    VideoStats {
        view_count: parse_count(raw.view_count.as_deref()),
        like_count: parse_count(raw.like_count.as_deref()),
        comment_count: parse_count(raw.comment_count.as_deref()),
    }
}

/// Build a bare [`VideoRecord`] from a search hit.
///
/// Returns `None` for hits that are not videos.
#[must_use]
pub fn normalize_search_item(item: SearchItem) -> Option<VideoRecord> {
    let video_id = item.id.video_id.filter(|id| !id.is_empty())?;
    Some(VideoRecord {
        video_id,
        title: item.snippet.title,
        description: item.snippet.description,
        channel_title: item.snippet.channel_title,
        published_at: item.snippet.published_at,
        ..VideoRecord::default()
    })
}

#[must_use]
pub fn normalize_comment(thread: CommentThread) -> Comment {
    let snippet = thread.snippet.top_level_comment.snippet;
    Comment {
        text: snippet.text_display,
        author: snippet.author_display_name,
        like_count: snippet.like_count,
        published_at: snippet.published_at,
    }
}

/// Copy statistics onto a record.
pub fn apply_stats(video: &mut VideoRecord, stats: VideoStats) {
    video.view_count = stats.view_count;
    video.like_count = stats.like_count;
    video.comment_count = stats.comment_count;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SearchListResponse, VideoListResponse};

    #[test]
    fn parse_count_handles_missing_and_garbage() {
        assert_eq!(parse_count(Some("1234")), 1234);
        assert_eq!(parse_count(Some(" 7 ")), 7);
        assert_eq!(parse_count(Some("n/a")), 0);
        assert_eq!(parse_count(None), 0);
    }

    #[test]
    fn normalize_stats_defaults_hidden_likes() {
        let body = serde_json::json!({
            "items": [{ "statistics": { "viewCount": "1500", "commentCount": "12" } }]
        });
        let resp: VideoListResponse = serde_json::from_value(body).unwrap();
        let stats = normalize_stats(&resp.items[0].statistics);
        assert_eq!(
            stats,
            VideoStats {
                view_count: 1500,
                like_count: 0,
                comment_count: 12
            }
        );
    }

    #[test]
    fn normalize_search_item_skips_channels() {
        let body = serde_json::json!({
            "items": [
                { "id": { "kind": "youtube#channel", "channelId": "UC1" }, "snippet": { "title": "A channel" } },
                {
                    "id": { "kind": "youtube#video", "videoId": "v1" },
                    "snippet": {
                        "title": "Best smart fan?",
                        "description": "Comparing BLDC fans",
                        "channelTitle": "Tech Reviews",
                        "publishedAt": "2024-03-01T10:00:00Z"
                    }
                }
            ]
        });
        let resp: SearchListResponse = serde_json::from_value(body).unwrap();
        let records: Vec<VideoRecord> = resp
            .items
            .into_iter()
            .filter_map(normalize_search_item)
            .collect();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].video_id, "v1");
        assert_eq!(records[0].channel_title, "Tech Reviews");
        assert!(records[0].published_at.is_some());
        assert!(records[0].comments.is_empty());
    }

    #[test]
    fn apply_stats_copies_counts() {
        let mut video = VideoRecord::default();
        apply_stats(
            &mut video,
            VideoStats {
                view_count: 10,
                like_count: 2,
                comment_count: 1,
            },
        );
        assert_eq!(
            (video.view_count, video.like_count, video.comment_count),
            (10, 2, 1)
        );
    }
}
