//! Sentiment classification on top of a polarity scorer

use super::{AnalysisInput, InputError, PolarityScorer};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Compound score above which text is labelled positive (strict).
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score below which text is labelled negative (strict).
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Scores for one piece of text.
///
/// `positive`, `neutral` and `negative` are proportions in [0, 1];
/// `compound` is the normalized aggregate in [-1, 1]. Serialized with the
/// analyzer's own key names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    #[serde(rename = "neg")]
    pub negative: f64,
    #[serde(rename = "neu")]
    pub neutral: f64,
    #[serde(rename = "pos")]
    pub positive: f64,
    pub compound: f64,
}

/// Three-way sentiment label derived from the compound score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// `> 0.05` is positive, `< -0.05` is negative, anything else
    /// (including NaN) is neutral.
    pub fn from_compound(compound: f64) -> Self {
        if compound > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if compound < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one classification request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Analysis {
    pub scores: SentimentScores,
    pub label: SentimentLabel,
}

/// Maps text to scores and a label using an injected scorer
pub struct SentimentClassifier<S = Box<dyn PolarityScorer>> {
    scorer: S,
}

impl<S: PolarityScorer> SentimentClassifier<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn classify(&self, input: &AnalysisInput) -> Analysis {
        let scores = self.scorer.polarity_scores(input.as_str());
        let label = SentimentLabel::from_compound(scores.compound);
        debug!(
            chars = input.char_count(),
            compound = scores.compound,
            label = %label,
            "Text classified"
        );
        Analysis { scores, label }
    }

    /// Validate raw text and classify it. The scorer is not consulted for
    /// empty or whitespace-only text.
    pub fn classify_text(&self, text: &str) -> Result<Analysis, InputError> {
        let input = AnalysisInput::new(text)?;
        Ok(self.classify(&input))
    }
}
