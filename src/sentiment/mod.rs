//! Sentiment scoring and classification
//!
//! The lexicon scorer sits behind [`PolarityScorer`] so the classifier can be
//! built around any implementation; the app uses [`VaderScorer`].

mod classifier;
mod input;
mod scorer;
#[cfg(test)]
pub(crate) mod test_support;

pub use classifier::{Analysis, SentimentClassifier, SentimentLabel, SentimentScores};
pub use input::{AnalysisInput, InputError};
pub use scorer::{PolarityScorer, VaderScorer};
