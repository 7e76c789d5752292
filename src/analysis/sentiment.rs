//! Lexicon-based sentiment scoring and classification.

use serde::{Deserialize, Serialize};

use crate::analysis::lexicon::{INTENSIFIERS, NEGATORS, SENTIMENT_LEXICON, tokenize};
use crate::review::model::Sentiment;

/// Polarity beyond which text classifies POSITIVE (open interval;
/// the boundary itself is NEUTRAL). Mirrored for NEGATIVE.
const NEUTRAL_BAND: f64 = 0.25;

/// Confidence floor; also the fixed confidence of NEUTRAL text.
const MIN_CONFIDENCE: f64 = 0.5;
const MAX_CONFIDENCE: f64 = 0.99;

/// Multiplier applied by a negator within two tokens of a sentiment word.
const NEGATION_DAMPING: f64 = -0.5;
/// Multiplier applied by an intensifier directly preceding a sentiment word.
const INTENSIFIER_BOOST: f64 = 1.3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentResult {
    pub label: Sentiment,
    /// Classification confidence in [0.5, 0.99].
    pub score: f64,
    /// Lexicon polarity in [-1, 1].
    pub polarity: f64,
    /// Lexicon subjectivity in [0, 1].
    pub subjectivity: f64,
}

/// Score a review text.
///
/// Polarity and subjectivity are the arithmetic means over matched
/// sentiment words; text with no matches (including empty text) scores
/// polarity 0 and classifies NEUTRAL at the confidence floor.
pub fn sentiment(text: &str) -> SentimentResult {
    let tokens = tokenize(text);
    let mut polarity_sum = 0.0;
    let mut subjectivity_sum = 0.0;
    let mut matched = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        let Some(&(word_polarity, word_subjectivity)) = SENTIMENT_LEXICON.get(token.as_str())
        else {
            continue;
        };
        let mut polarity = word_polarity;
        if i >= 1 && INTENSIFIERS.contains(&tokens[i - 1].as_str()) {
            polarity = (polarity * INTENSIFIER_BOOST).clamp(-1.0, 1.0);
        }
        let window = &tokens[i.saturating_sub(2)..i];
        if window.iter().any(|t| NEGATORS.contains(&t.as_str())) {
            polarity *= NEGATION_DAMPING;
        }
        polarity_sum += polarity;
        subjectivity_sum += word_subjectivity;
        matched += 1;
    }

    let (polarity, subjectivity) = if matched == 0 {
        (0.0, 0.0)
    } else {
        (
            (polarity_sum / matched as f64).clamp(-1.0, 1.0),
            (subjectivity_sum / matched as f64).clamp(0.0, 1.0),
        )
    };

    let (label, score) = classify(polarity);
    SentimentResult {
        label,
        score,
        polarity,
        subjectivity,
    }
}

/// Classify a polarity into a label plus confidence.
///
/// Confidence for polarized labels grows linearly with the distance past
/// the neutral-band boundary, mapped into [0.5, 0.99]; NEUTRAL always
/// reports the floor.
pub(crate) fn classify(polarity: f64) -> (Sentiment, f64) {
    if polarity > NEUTRAL_BAND {
        (Sentiment::Positive, confidence(polarity - NEUTRAL_BAND))
    } else if polarity < -NEUTRAL_BAND {
        (Sentiment::Negative, confidence(-polarity - NEUTRAL_BAND))
    } else {
        (Sentiment::Neutral, MIN_CONFIDENCE)
    }
}

fn confidence(distance_past_boundary: f64) -> f64 {
    let span = 1.0 - NEUTRAL_BAND;
    (MIN_CONFIDENCE + 0.49 * (distance_past_boundary / span)).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_values_classify_neutral() {
        // Open interval on both sides: exactly ±0.25 is NEUTRAL.
        assert_eq!(classify(0.25).0, Sentiment::Neutral);
        assert_eq!(classify(-0.25).0, Sentiment::Neutral);
        assert_eq!(classify(0.2500001).0, Sentiment::Positive);
        assert_eq!(classify(-0.2500001).0, Sentiment::Negative);
    }

    #[test]
    fn confidence_stays_inside_bounds() {
        for polarity in [-1.0, -0.5, -0.25, 0.0, 0.25, 0.5, 1.0] {
            let (_, score) = classify(polarity);
            assert!((0.5..=0.99).contains(&score), "score {score} out of range");
        }
    }

    #[test]
    fn confidence_monotonic_past_boundary() {
        let (_, near) = classify(0.3);
        let (_, far) = classify(0.9);
        assert!(far > near);
    }

    #[test]
    fn strong_positive_text() {
        let result = sentiment("The pasta was absolutely delicious and the staff was friendly.");
        assert_eq!(result.label, Sentiment::Positive);
        assert!(result.polarity > 0.25);
        assert!(result.subjectivity > 0.0);
    }

    #[test]
    fn strong_negative_text() {
        let result = sentiment("Terrible experience. Long wait times.");
        assert_eq!(result.label, Sentiment::Negative);
        assert!(result.polarity < -0.25);
    }

    #[test]
    fn negation_flips_and_dampens() {
        let plain = sentiment("bad");
        let negated = sentiment("not bad");
        assert!(plain.polarity < 0.0);
        assert!(negated.polarity > 0.0);
        assert!(negated.polarity.abs() < plain.polarity.abs());
    }

    #[test]
    fn mixed_hedged_text_is_neutral() {
        let result = sentiment("It was okay, nothing special but not bad either.");
        assert_eq!(result.label, Sentiment::Neutral);
        assert!(result.polarity.abs() <= 0.25);
    }

    #[test]
    fn intensifier_raises_polarity() {
        let plain = sentiment("good food");
        let boosted = sentiment("really good food");
        assert!(boosted.polarity > plain.polarity);
    }

    #[test]
    fn no_sentiment_words_scores_zero() {
        let result = sentiment("We came here on a Tuesday with four people.");
        assert_eq!(result.polarity, 0.0);
        assert_eq!(result.subjectivity, 0.0);
        assert_eq!(result.label, Sentiment::Neutral);
        assert_eq!(result.score, 0.5);
    }
}
