//! Share-of-Voice aggregation over fetched videos.

use sov_core::BrandSet;

use crate::error::SentimentError;
use crate::scorer::classify_lowercase;
use crate::types::{BrandSov, MentionTally, SoVResult, VideoRecord};

/// Compute Share-of-Voice for `target_brand` and its competitors.
///
/// Every comment of every video is scanned once. Each roster brand that
/// occurs in the lowercased comment text as a substring gets one mention,
/// so a comment naming two brands counts for both. A matched comment is
/// classified once and the label is reused for every brand it mentions.
///
/// Brand names are lowercased here as well, so callers passing mixed-case
/// names still match case-insensitively. Empty names never match.
#[must_use]
pub fn compute<S: AsRef<str>>(
    videos: &[VideoRecord],
    target_brand: &str,
    competitor_brands: &[S],
) -> SoVResult {
    let roster: Vec<String> = std::iter::once(target_brand)
        .chain(competitor_brands.iter().map(AsRef::as_ref))
        .map(str::to_lowercase)
        .collect();
    let roster: Vec<&str> = roster.iter().map(String::as_str).collect();

    let tallies = MentionTallies::scan(videos, &roster);
    tallies.finish(videos.len())
}

/// [`compute`] over a configured [`BrandSet`].
#[must_use]
pub fn compute_for(videos: &[VideoRecord], brands: &BrandSet) -> SoVResult {
    MentionTallies::scan(videos, &brands.roster()).finish(videos.len())
}

/// Running counts for one slice of videos.
///
/// Two tallies over disjoint video slices merge into the tally of their
/// union, in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionTallies {
    brands: Vec<String>,
    tallies: Vec<MentionTally>,
    /// Maps each roster position to its slot in `brands`.
    slots: Vec<usize>,
    comments_scanned: u64,
}

impl MentionTallies {
    /// Zeroed tallies for `roster`. Repeated names share one slot.
    #[must_use]
    pub fn new(roster: &[&str]) -> Self {
        let mut brands: Vec<String> = Vec::new();
        let mut slots = Vec::with_capacity(roster.len());

        for name in roster {
            let name = name.to_lowercase();
            let slot = if let Some(idx) = brands.iter().position(|b| *b == name) {
                idx
            } else {
                brands.push(name);
                brands.len() - 1
            };
            slots.push(slot);
        }

        Self {
            tallies: vec![MentionTally::default(); brands.len()],
            brands,
            slots,
            comments_scanned: 0,
        }
    }

    /// Tally every comment in `videos` against `roster`.
    #[must_use]
    pub fn scan(videos: &[VideoRecord], roster: &[&str]) -> Self {
        let mut tallies = Self::new(roster);
        for video in videos {
            tallies.add_video(video);
        }
        tallies
    }

    pub fn add_video(&mut self, video: &VideoRecord) {
        for comment in &video.comments {
            self.add_text(&comment.text);
        }
    }

    fn add_text(&mut self, text: &str) {
        self.comments_scanned += 1;
        let text = text.to_lowercase();
        let mut label = None;

        for &slot in &self.slots {
            let brand = &self.brands[slot];
            if brand.is_empty() || !text.contains(brand.as_str()) {
                continue;
            }
            let verdict = *label.get_or_insert_with(|| classify_lowercase(&text));
            self.tallies[slot].record(verdict);
        }
    }

    /// Fold `other` into `self`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::RosterMismatch`] if the two tallies were
    /// built from different rosters; `self` is left unchanged.
    pub fn merge(&mut self, other: &Self) -> Result<(), SentimentError> {
        if self.slots != other.slots || self.brands != other.brands {
            return Err(SentimentError::RosterMismatch {
                left: self.brands.clone(),
                right: other.brands.clone(),
            });
        }
        for (mine, theirs) in self.tallies.iter_mut().zip(&other.tallies) {
            *mine += *theirs;
        }
        self.comments_scanned += other.comments_scanned;
        Ok(())
    }

    #[must_use]
    pub fn comments_scanned(&self) -> u64 {
        self.comments_scanned
    }

    /// Tally for `brand`, if it is on the roster.
    #[must_use]
    pub fn get(&self, brand: &str) -> Option<MentionTally> {
        let brand = brand.to_lowercase();
        self.brands
            .iter()
            .position(|b| *b == brand)
            .map(|idx| self.tallies[idx])
    }

    /// Normalize counts into percentages.
    #[must_use]
    pub fn finish(self, videos_analyzed: usize) -> SoVResult {
        let total_all: u64 = self.tallies.iter().map(|t| t.total).sum();
        let positive_all: u64 = self.tallies.iter().map(|t| t.positive).sum();

        let brands = self
            .brands
            .into_iter()
            .zip(self.tallies)
            .map(|(brand, tally)| BrandSov {
                brand,
                total_mentions: tally.total,
                positive_mentions: tally.positive,
                negative_mentions: tally.negative,
                sov_percentage: percentage(tally.total, total_all),
                positive_sov_percentage: percentage(tally.positive, positive_all),
            })
            .collect();

        tracing::debug!(
            comments = self.comments_scanned,
            mentions = total_all,
            positive = positive_all,
            "share of voice computed"
        );

        SoVResult {
            brands,
            total_comments_scanned: self.comments_scanned,
            videos_analyzed: videos_analyzed as u64,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
