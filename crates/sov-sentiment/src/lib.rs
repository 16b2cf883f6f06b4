//! Share-of-Voice scoring for brand mentions in video comments.
//!
//! Labels comments with a fixed keyword lexicon and aggregates per-brand
//! mention counts into Share-of-Voice and Positive-SoV percentages. Pure and
//! synchronous: no I/O, no shared state.

pub mod error;
pub mod pipeline;
pub mod scorer;
pub mod types;

pub use error::SentimentError;
pub use pipeline::{compute, compute_for, MentionTallies};
pub use scorer::classify;
pub use types::{BrandSov, Comment, MentionTally, SentimentLabel, SoVResult, VideoRecord};
