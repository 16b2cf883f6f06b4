use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SentimentError {
    #[error("cannot merge tallies built from different rosters: {left:?} vs {right:?}")]
    RosterMismatch {
        left: Vec<String>,
        right: Vec<String>,
    },
}
