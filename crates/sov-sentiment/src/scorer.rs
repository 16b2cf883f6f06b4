//! Keyword lexicon classifier for comment sentiment.

use crate::types::SentimentLabel;

/// Lowercase markers for positive sentiment.
pub(crate) const POSITIVE_MARKERS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "love",
    "best",
    "perfect",
    "awesome",
    "fantastic",
    "wonderful",
];

/// Lowercase markers for negative sentiment.
pub(crate) const NEGATIVE_MARKERS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "worst",
    "hate",
    "disappointing",
    "poor",
    "horrible",
    "useless",
    "broken",
];

/// Label a text by counting which lexicon markers it contains.
///
/// Matching is case-insensitive substring containment, so `"goodness"`
/// counts as `"good"`. Each marker counts at most once. More positive hits
/// than negative gives [`SentimentLabel::Positive`], the reverse gives
/// [`SentimentLabel::Negative`], and a tie (including no hits) is neutral.
#[must_use]
pub fn classify(text: &str) -> SentimentLabel {
    classify_lowercase(&text.to_lowercase())
}

/// [`classify`] for text that is already lowercase.
pub(crate) fn classify_lowercase(text: &str) -> SentimentLabel {
    let positive = count_hits(text, POSITIVE_MARKERS);
    let negative = count_hits(text, NEGATIVE_MARKERS);

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => SentimentLabel::Positive,
        std::cmp::Ordering::Less => SentimentLabel::Negative,
        std::cmp::Ordering::Equal => SentimentLabel::Neutral,
    }
}

fn count_hits(text: &str, markers: &[&str]) -> usize {
    markers.iter().filter(|m| text.contains(*m)).count()
}
