//! Polarity scorers

use super::SentimentScores;
use std::collections::HashMap;
use tracing::debug;

/// Lexicon-based polarity scoring of raw text.
///
/// Implementations are infallible for any string and must be deterministic
/// for a fixed lexicon.
pub trait PolarityScorer {
    fn polarity_scores(&self, text: &str) -> SentimentScores;
}

impl<S: PolarityScorer + ?Sized> PolarityScorer for Box<S> {
    fn polarity_scores(&self, text: &str) -> SentimentScores {
        (**self).polarity_scores(text)
    }
}

/// VADER scorer backed by the lexicon bundled in `vader_sentiment`.
///
/// Build once at startup and reuse; the analyzer is read-only after
/// construction.
pub struct VaderScorer {
    analyzer: vader_sentiment::SentimentIntensityAnalyzer<'static>,
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl VaderScorer {
    pub fn new() -> Self {
        let analyzer = vader_sentiment::SentimentIntensityAnalyzer::new();
        debug!("VADER analyzer initialized");
        Self { analyzer }
    }
}

impl PolarityScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> SentimentScores {
        without_punctuation_only_compound(scores_from_map(&self.analyzer.polarity_scores(text)))
    }
}

/// Text with no sentiment-bearing words has a compound of exactly 0.
///
/// `vader_sentiment` still subtracts the `!`/`?` emphasis when the word
/// valence sum is zero, which turns "It arrived today!" negative. With no
/// positive or negative proportion there is no valence to emphasize.
fn without_punctuation_only_compound(mut scores: SentimentScores) -> SentimentScores {
    if scores.positive == 0.0 && scores.negative == 0.0 {
        scores.compound = 0.0;
    }
    scores
}

/// Map the analyzer's `pos`/`neu`/`neg`/`compound` keys, treating a missing
/// key as 0.
fn scores_from_map(map: &HashMap<&str, f64>) -> SentimentScores {
    let get = |key: &str| map.get(key).copied().unwrap_or(0.0);
    SentimentScores {
        positive: get("pos"),
        neutral: get("neu"),
        negative: get("neg"),
        compound: get("compound"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_vader_keys() {
        let map: HashMap<&str, f64> = [
            ("pos", 0.5),
            ("neu", 0.4),
            ("neg", 0.1),
            ("compound", 0.6249),
        ]
        .into_iter()
        .collect();
        let scores = scores_from_map(&map);
        assert_eq!(scores.positive, 0.5);
        assert_eq!(scores.neutral, 0.4);
        assert_eq!(scores.negative, 0.1);
        assert_eq!(scores.compound, 0.6249);
    }

    #[test]
    fn missing_keys_are_zero() {
        let map: HashMap<&str, f64> = [("compound", -0.3)].into_iter().collect();
        let scores = scores_from_map(&map);
        assert_eq!(scores.positive, 0.0);
        assert_eq!(scores.neutral, 0.0);
        assert_eq!(scores.negative, 0.0);
        assert_eq!(scores.compound, -0.3);
    }

    #[test]
    fn emphasis_alone_does_not_move_compound() {
        let scores = SentimentScores {
            negative: 0.0,
            neutral: 1.0,
            positive: 0.0,
            compound: -0.1210,
        };
        assert_eq!(without_punctuation_only_compound(scores).compound, 0.0);

        let mixed = SentimentScores {
            negative: 0.2,
            neutral: 0.6,
            positive: 0.2,
            compound: 0.1,
        };
        assert_eq!(without_punctuation_only_compound(mixed), mixed);
    }

    #[test]
    fn neutral_questions_and_exclamations_stay_zero() {
        let scorer = VaderScorer::new();
        for text in ["It arrived today!", "Where is my package?!", "Really?!", "?!?!"] {
            let s = scorer.polarity_scores(text);
            assert_eq!(s.compound, 0.0, "{text}");
        }
    }

    #[test]
    fn emphasis_still_amplifies_sentiment_words() {
        let scorer = VaderScorer::new();
        let plain = scorer.polarity_scores("This is great.");
        let loud = scorer.polarity_scores("This is great!!!");
        assert!(loud.compound > plain.compound);
        assert!(plain.compound > 0.05);
    }

    #[test]
    fn vader_scores_are_in_range() {
        let scorer = VaderScorer::new();
        for text in [
            "I love this product, it works great!",
            "This is the worst experience I've ever had.",
            "The package arrived on Tuesday.",
            "What a lovely, sunny day!",
        ] {
            let s = scorer.polarity_scores(text);
            let sum = s.positive + s.neutral + s.negative;
            assert!((sum - 1.0).abs() < 0.01, "{text}: proportions sum to {sum}");
            assert!((-1.0..=1.0).contains(&s.compound), "{text}: {}", s.compound);
            for p in [s.positive, s.neutral, s.negative] {
                assert!((0.0..=1.0).contains(&p));
            }
        }
    }

    #[test]
    fn boxed_scorer_delegates() {
        let boxed: Box<dyn PolarityScorer> = Box::new(VaderScorer::new());
        let direct = VaderScorer::new().polarity_scores("what a lovely day");
        assert_eq!(boxed.polarity_scores("what a lovely day"), direct);
    }
}
