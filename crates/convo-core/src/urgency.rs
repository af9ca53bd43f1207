//! Rule-based urgency estimation.

use std::sync::LazyLock;

use regex::Regex;

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

const URGENT_KEYWORDS: &[&str] = &[
    "urgent",
    "asap",
    "immediately",
    "right now",
    "soon",
    "please help",
    "help me",
];

/// Estimate time pressure in [0.0, 1.0] from three additive cues:
/// urgent keywords (+0.4 each), exclamation marks (up to +0.2), and
/// ALL-CAPS word density (up to +0.4). The raw sum can exceed 1.0 when
/// several keywords hit; the final value is clamped.
pub fn urgency_score(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let lower = text.to_lowercase();
    let mut score = 0.0;

    for keyword in URGENT_KEYWORDS {
        if lower.contains(keyword) {
            score += 0.4;
        }
    }

    let exclaims = text.matches('!').count();
    score += (0.05 * exclaims as f64).min(0.2);

    let tokens: Vec<&str> = WORD_REGEX.find_iter(text).map(|m| m.as_str()).collect();
    if !tokens.is_empty() {
        let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
        let frac = caps as f64 / tokens.len() as f64;
        score += frac.min(0.4);
    }

    score.clamp(0.0, 1.0)
}

/// A token counts as ALL CAPS when it has cased characters and none of
/// them is lowercase; digits alone do not qualify.
fn is_all_caps(token: &str) -> bool {
    token != token.to_lowercase() && token == token.to_uppercase()
}
