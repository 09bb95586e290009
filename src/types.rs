//! Common types and data structures

use crate::sentiment::{Analysis, SentimentScores};

/// What the results area shows after the last analyze action
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultState {
    /// Nothing analyzed yet
    #[default]
    Idle,
    /// Last action was rejected; message is shown to the user
    Warning(String),
    Ready(Analysis),
}

impl ResultState {
    pub fn analysis(&self) -> Option<&Analysis> {
        match self {
            ResultState::Ready(analysis) => Some(analysis),
            _ => None,
        }
    }

    pub fn warning(&self) -> Option<&str> {
        match self {
            ResultState::Warning(msg) => Some(msg),
            _ => None,
        }
    }
}

/// One category of the distribution chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: f64,
}

/// Positive, Neutral, Negative bars in display order
pub fn distribution_bars(scores: &SentimentScores) -> [ChartBar; 3] {
    [
        ChartBar { label: "Positive", value: scores.positive },
        ChartBar { label: "Neutral", value: scores.neutral },
        ChartBar { label: "Negative", value: scores.negative },
    ]
}
