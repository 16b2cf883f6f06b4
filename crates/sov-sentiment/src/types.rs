use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One top-level comment on a video.
///
/// Only `text` is used for mention counting; the other fields are carried
/// through from the fetcher for reporting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub text: String,
    pub author: Option<String>,
    pub like_count: Option<u64>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Comment {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// A search result with its statistics and comments.
///
/// Missing fields deserialize to empty/zero defaults, so a record without a
/// `comments` key simply contributes no comments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub channel_title: String,
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub comments: Vec<Comment>,
}

/// Lexicon verdict for a single comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

/// Mention counts for one brand. `positive + negative <= total` always holds;
/// neutral mentions only count toward `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MentionTally {
    pub total: u64,
    pub positive: u64,
    pub negative: u64,
}

impl MentionTally {
    pub fn record(&mut self, label: SentimentLabel) {
        self.total += 1;
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => {}
        }
    }
}

impl std::ops::AddAssign for MentionTally {
    fn add_assign(&mut self, rhs: Self) {
        self.total += rhs.total;
        self.positive += rhs.positive;
        self.negative += rhs.negative;
    }
}

/// Final numbers for one brand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandSov {
    pub brand: String,
    pub total_mentions: u64,
    pub positive_mentions: u64,
    pub negative_mentions: u64,
    /// Unrounded, in `[0, 100]` up to floating-point drift.
    pub sov_percentage: f64,
    pub positive_sov_percentage: f64,
}

/// Share-of-Voice for a whole run.
///
/// `brands` follows roster order (target first). A brand listed more than
/// once in the roster appears once here, carrying every occurrence's counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoVResult {
    pub brands: Vec<BrandSov>,
    pub total_comments_scanned: u64,
    pub videos_analyzed: u64,
}

impl SoVResult {
    #[must_use]
    pub fn get(&self, brand: &str) -> Option<&BrandSov> {
        let brand = brand.to_lowercase();
        self.brands.iter().find(|b| b.brand == brand)
    }

    /// The target brand's entry (first in roster order).
    #[must_use]
    pub fn target(&self) -> Option<&BrandSov> {
        self.brands.first()
    }

    /// Competitor with the highest SoV. Ties go to the earlier roster entry.
    #[must_use]
    pub fn top_competitor(&self) -> Option<&BrandSov> {
        self.brands.iter().skip(1).fold(None, |best, b| match best {
            Some(current) if current.sov_percentage >= b.sov_percentage => Some(current),
            _ => Some(b),
        })
    }

    #[must_use]
    pub fn total_mentions(&self) -> u64 {
        self.brands.iter().map(|b| b.total_mentions).sum()
    }

    #[must_use]
    pub fn total_positive_mentions(&self) -> u64 {
        self.brands.iter().map(|b| b.positive_mentions).sum()
    }
}
