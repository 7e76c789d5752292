//! Static keyword tables backing the analyzer.
//!
//! Loaded once at first use and shared by reference; no per-request
//! mutation. Polarity/subjectivity weights follow the convention of
//! lexicon-based sentiment scorers: polarity in [-1, 1], subjectivity
//! in [0, 1].

use std::collections::HashMap;
use std::sync::LazyLock;

/// Word → (polarity, subjectivity).
pub static SENTIMENT_LEXICON: LazyLock<HashMap<&'static str, (f64, f64)>> = LazyLock::new(|| {
    let entries: &[(&str, f64, f64)] = &[
        // Positive
        ("amazing", 0.75, 0.9),
        ("awesome", 0.8, 0.9),
        ("excellent", 0.9, 0.9),
        ("outstanding", 0.9, 0.9),
        ("wonderful", 0.85, 0.9),
        ("fantastic", 0.85, 0.9),
        ("perfect", 0.9, 0.9),
        ("great", 0.8, 0.75),
        ("good", 0.7, 0.6),
        ("best", 0.9, 0.3),
        ("delicious", 0.8, 0.8),
        ("tasty", 0.7, 0.8),
        ("fresh", 0.4, 0.4),
        ("love", 0.6, 0.6),
        ("loved", 0.6, 0.6),
        ("friendly", 0.6, 0.7),
        ("helpful", 0.5, 0.5),
        ("attentive", 0.5, 0.6),
        ("nice", 0.6, 0.8),
        ("happy", 0.7, 0.8),
        ("enjoyed", 0.5, 0.5),
        ("cozy", 0.5, 0.6),
        ("clean", 0.4, 0.4),
        ("spotless", 0.7, 0.8),
        ("quick", 0.3, 0.4),
        ("prompt", 0.4, 0.5),
        ("affordable", 0.4, 0.5),
        ("reasonable", 0.3, 0.4),
        ("worth", 0.3, 0.3),
        ("recommend", 0.5, 0.4),
        ("okay", 0.2, 0.5),
        ("fine", 0.3, 0.6),
        ("decent", 0.3, 0.5),
        ("special", 0.35, 0.6),
        // Negative
        ("terrible", -0.9, 0.9),
        ("horrible", -0.9, 0.9),
        ("awful", -0.9, 0.9),
        ("disgusting", -0.9, 0.9),
        ("worst", -0.9, 0.6),
        ("bad", -0.7, 0.65),
        ("poor", -0.6, 0.6),
        ("hate", -0.7, 0.8),
        ("hated", -0.7, 0.8),
        ("disappointing", -0.6, 0.7),
        ("disappointed", -0.6, 0.7),
        ("mediocre", -0.3, 0.6),
        ("bland", -0.5, 0.7),
        ("stale", -0.5, 0.6),
        ("cold", -0.4, 0.5),
        ("rude", -0.7, 0.8),
        ("unprofessional", -0.6, 0.7),
        ("slow", -0.3, 0.4),
        ("dirty", -0.6, 0.7),
        ("filthy", -0.8, 0.8),
        ("messy", -0.5, 0.6),
        ("noisy", -0.4, 0.5),
        ("expensive", -0.3, 0.5),
        ("overpriced", -0.5, 0.7),
        ("long", -0.2, 0.4),
        ("crowded", -0.2, 0.4),
    ];
    entries.iter().map(|&(w, p, s)| (w, (p, s))).collect()
});

/// Tokens that flip (and dampen) the polarity of a sentiment word
/// appearing within the next two tokens.
pub const NEGATORS: &[&str] = &[
    "not", "never", "no", "nothing", "hardly", "cannot", "isnt", "wasnt", "dont", "didnt",
];

/// Tokens that amplify the sentiment word immediately following them.
pub const INTENSIFIERS: &[&str] = &[
    "very",
    "really",
    "so",
    "absolutely",
    "extremely",
    "incredibly",
    "truly",
];

/// Lowercase the text and split it into alphanumeric word tokens.
/// Apostrophes are stripped in place ("don't" → "dont") so contractions
/// line up with the negator list.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            current.extend(ch.to_lowercase());
        } else if ch == '\'' || ch == '\u{2019}' {
            // strip, keep the word intact
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
