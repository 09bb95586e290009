//! Application constants and UI copy

pub const APP_NAME: &str = "Sentiment Analyzer";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// Input
pub const INPUT_LABEL: &str = "Enter your review here:";
pub const ANALYZE_BUTTON: &str = "Analyze Sentiment";
pub const EMPTY_INPUT_WARNING: &str = "Please enter some text to analyze!";

// Results
pub const SCORES_HEADING: &str = "Sentiment Scores:";
pub const SCORES_INTRO: &str =
    "These scores indicate the proportion of the text that falls into each sentiment category:";

/// (term, key, explanation) for each proportion score
pub const SCORE_CAPTIONS: [(&str, &str, &str); 3] = [
    ("Positive", "pos", "The proportion of positive words and phrases."),
    ("Neutral", "neu", "The proportion of words that express no sentiment."),
    ("Negative", "neg", "The proportion of negative words and phrases."),
];

pub const COMPOUND_TERM: &str = "Compound Score:";
pub const COMPOUND_CAPTION: &str = "This score combines the positive, neutral, and negative scores to provide a single value between -1 (most negative) and +1 (most positive). It reflects the overall sentiment of the text.";

pub const OVERALL_PREFIX: &str = "Overall Sentiment:";

// Chart
pub const CHART_TITLE: &str = "Sentiment Distribution";
pub const CHART_X_LABEL: &str = "Sentiment";
pub const CHART_Y_LABEL: &str = "Score";
