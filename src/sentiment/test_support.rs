//! Scorer doubles shared by unit tests

use super::{PolarityScorer, SentimentScores};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Returns fixed scores and counts how often it was asked
pub(crate) struct FixedScorer {
    pub scores: SentimentScores,
    pub calls: Arc<AtomicUsize>,
}

impl FixedScorer {
    pub fn with_compound(compound: f64) -> Self {
        Self {
            scores: SentimentScores {
                negative: 0.2,
                neutral: 0.5,
                positive: 0.3,
                compound,
            },
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl PolarityScorer for FixedScorer {
    fn polarity_scores(&self, _text: &str) -> SentimentScores {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.scores
    }
}
