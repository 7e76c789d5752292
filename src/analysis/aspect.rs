//! Aspect extraction with clause-local sentiment.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::sentiment::sentiment;
use crate::review::model::Sentiment;

/// Closed aspect taxonomy for restaurant reviews. Declaration order is
/// the fixed output order of [`aspects`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Food,
    Service,
    Price,
    Ambiance,
    Cleanliness,
    Location,
    WaitTime,
}

impl Aspect {
    pub const ALL: [Aspect; 7] = [
        Aspect::Food,
        Aspect::Service,
        Aspect::Price,
        Aspect::Ambiance,
        Aspect::Cleanliness,
        Aspect::Location,
        Aspect::WaitTime,
    ];

    fn pattern(&self) -> &'static str {
        match self {
            Self::Food => {
                r"(?i)\b(food|dish|dishes|meal|menu|taste|tasty|flavor|flavour|pasta|pizza|burger|steak|dessert|appetizer|portion|portions|delicious|bland|fresh|stale)\b"
            }
            Self::Service => {
                r"(?i)\b(service|staff|server|servers|waiter|waitress|waitstaff|manager|host|hostess|friendly|rude|attentive|helpful)\b"
            }
            Self::Price => {
                r"(?i)\b(price|prices|pricing|cost|expensive|cheap|affordable|overpriced|value|worth)\b"
            }
            Self::Ambiance => {
                r"(?i)\b(ambiance|ambience|atmosphere|decor|music|vibe|lighting|cozy|noisy|romantic)\b"
            }
            Self::Cleanliness => {
                r"(?i)\b(clean|cleanliness|dirty|filthy|spotless|hygiene|messy|sanitary)\b"
            }
            Self::Location => {
                r"(?i)\b(location|parking|neighborhood|area|downtown|accessible|convenient)\b"
            }
            Self::WaitTime => {
                r"(?i)\b(wait|waited|waiting|slow|quick|fast|prompt|delay|delayed|forever|line|queue)\b"
            }
        }
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Food => write!(f, "food"),
            Self::Service => write!(f, "service"),
            Self::Price => write!(f, "price"),
            Self::Ambiance => write!(f, "ambiance"),
            Self::Cleanliness => write!(f, "cleanliness"),
            Self::Location => write!(f, "location"),
            Self::WaitTime => write!(f, "wait_time"),
        }
    }
}

static ASPECT_PATTERNS: LazyLock<Vec<(Aspect, Regex)>> = LazyLock::new(|| {
    Aspect::ALL
        .iter()
        .map(|&aspect| (aspect, Regex::new(aspect.pattern()).unwrap()))
        .collect()
});

/// Clause boundaries: sentence punctuation plus contrastive "but", so
/// "great food but slow service" scores each half on its own.
static CLAUSE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)[.!?;,]|\bbut\b").unwrap());

/// One detected aspect and the sentiment of the clause it appeared in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectMention {
    pub aspect: Aspect,
    pub sentiment: Sentiment,
}

/// Extract mentioned aspects.
///
/// An aspect is reported at most once, in taxonomy order; its sentiment
/// is the lexicon sentiment of the first clause that mentions it. An
/// empty result is a valid outcome, not an error.
pub fn aspects(text: &str) -> Vec<AspectMention> {
    let clauses: Vec<&str> = CLAUSE_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();

    let mut mentions = Vec::new();
    for (aspect, pattern) in ASPECT_PATTERNS.iter() {
        let Some(clause) = clauses.iter().find(|c| pattern.is_match(c)) else {
            continue;
        };
        mentions.push(AspectMention {
            aspect: *aspect,
            sentiment: sentiment(clause).label,
        });
    }
    mentions
}
