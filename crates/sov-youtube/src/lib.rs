//! `YouTube` Data API v3 client for collecting videos and comments.
//!
//! Supplies the [`VideoRecord`](sov_sentiment::VideoRecord) list that the
//! Share-of-Voice aggregator consumes.

pub mod client;
pub mod error;
pub mod fetch;
pub mod normalize;
pub(crate) mod retry;
pub mod types;
mod videos;

pub use client::YoutubeClient;
pub use error::FetchError;
pub use fetch::FetchOptions;
pub use normalize::VideoStats;
