//! Phrase tables for the reply slots, keyed by tone.

use crate::analysis::{Aspect, AspectMention, Emotion};
use crate::response::Tone;

/// Opening line, specialized by the review's primary emotion.
pub(super) fn opening(tone: Tone, emotion: Emotion) -> &'static str {
    match tone {
        Tone::Grateful => match emotion {
            Emotion::Gratitude => {
                "Thank you so much for the kind words and for taking the time to write us!"
            }
            Emotion::Joy => "We're thrilled you had such a great experience!",
            _ => "Thank you so much for your wonderful review!",
        },
        Tone::Apologetic => match emotion {
            Emotion::Anger => {
                "We're truly sorry your visit fell this far short of what you deserved."
            }
            Emotion::Frustration => {
                "We sincerely apologize for the frustration your visit caused."
            }
            Emotion::Disappointment => {
                "We're sorry we let you down. That's not the experience we aim for."
            }
            _ => "We apologize that your experience didn't meet expectations.",
        },
        Tone::Professional => "Thank you for taking the time to share your feedback.",
    }
}

/// Acknowledge up to two detected aspects; falls back to a generic line
/// when the review named none.
pub(super) fn acknowledgment(tone: Tone, aspects: &[AspectMention]) -> String {
    if aspects.is_empty() {
        return match tone {
            Tone::Grateful => "We're glad everything came together for your visit.".to_string(),
            Tone::Apologetic => "We take all feedback seriously and will do better.".to_string(),
            Tone::Professional => "Your comments help us keep improving.".to_string(),
        };
    }
    aspects
        .iter()
        .take(2)
        .map(|mention| aspect_phrase(tone, mention.aspect))
        .collect::<Vec<_>>()
        .join(" ")
}

fn aspect_phrase(tone: Tone, aspect: Aspect) -> &'static str {
    match (tone, aspect) {
        (Tone::Grateful, Aspect::Food) => "We're so glad the food hit the mark.",
        (Tone::Grateful, Aspect::Service) => "Our team will be delighted to hear your praise.",
        (Tone::Grateful, Aspect::Price) => "We work hard to keep our prices fair.",
        (Tone::Grateful, Aspect::Ambiance) => "We're happy the atmosphere added to your evening.",
        (Tone::Grateful, Aspect::Cleanliness) => "A spotless dining room matters to us too.",
        (Tone::Grateful, Aspect::Location) => "We're glad you found us easy to get to.",
        (Tone::Grateful, Aspect::WaitTime) => "We're pleased we got you seated and served quickly.",

        (Tone::Apologetic, Aspect::Food) => {
            "We've shared your comments about the food with our kitchen."
        }
        (Tone::Apologetic, Aspect::Service) => {
            "We're addressing the service issues you described with our team."
        }
        (Tone::Apologetic, Aspect::Price) => {
            "We hear you on value and are reviewing our pricing."
        }
        (Tone::Apologetic, Aspect::Ambiance) => {
            "We're sorry the atmosphere didn't make for a pleasant visit."
        }
        (Tone::Apologetic, Aspect::Cleanliness) => {
            "Cleanliness is non-negotiable for us and we're fixing this immediately."
        }
        (Tone::Apologetic, Aspect::Location) => {
            "We're sorry getting to us was more trouble than it should have been."
        }
        (Tone::Apologetic, Aspect::WaitTime) => {
            "We apologize for the wait and are working on getting guests served faster."
        }

        (Tone::Professional, Aspect::Food) => "We've noted your comments about the food.",
        (Tone::Professional, Aspect::Service) => "We've passed your service feedback to our team.",
        (Tone::Professional, Aspect::Price) => "We've noted your thoughts on pricing.",
        (Tone::Professional, Aspect::Ambiance) => "We've noted your comments on the atmosphere.",
        (Tone::Professional, Aspect::Cleanliness) => "We've noted your comments on cleanliness.",
        (Tone::Professional, Aspect::Location) => "We've noted your comments about our location.",
        (Tone::Professional, Aspect::WaitTime) => "We've noted your comments about wait times.",
    }
}

/// Sentence that names the business.
pub(super) fn personalization(tone: Tone, business_name: &str) -> String {
    match tone {
        Tone::Grateful => format!("It means the world to our team at {business_name}."),
        Tone::Apologetic => {
            format!("Everyone at {business_name} is committed to making this right.")
        }
        Tone::Professional => format!("All of us at {business_name} value your input."),
    }
}

pub(super) fn closing(tone: Tone) -> &'static str {
    match tone {
        Tone::Grateful => "We can't wait to welcome you back!",
        Tone::Apologetic => "We hope you'll give us another chance to serve you properly.",
        Tone::Professional => "We hope to see you again soon.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::model::Sentiment;

    #[test]
    fn acknowledgment_caps_at_two_aspects() {
        let mentions = vec![
            AspectMention {
                aspect: Aspect::Food,
                sentiment: Sentiment::Positive,
            },
            AspectMention {
                aspect: Aspect::Service,
                sentiment: Sentiment::Positive,
            },
            AspectMention {
                aspect: Aspect::Price,
                sentiment: Sentiment::Positive,
            },
        ];
        let text = acknowledgment(Tone::Grateful, &mentions);
        assert!(text.contains("food"));
        assert!(text.contains("team"));
        assert!(!text.contains("prices"));
    }

    #[test]
    fn empty_aspects_use_generic_line() {
        let text = acknowledgment(Tone::Professional, &[]);
        assert!(!text.is_empty());
    }

    #[test]
    fn personalization_contains_name() {
        for tone in [Tone::Grateful, Tone::Apologetic, Tone::Professional] {
            assert!(personalization(tone, "Luigi's").contains("Luigi's"));
        }
    }
}
