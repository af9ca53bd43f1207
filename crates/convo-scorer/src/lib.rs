//! Polarity scorer — maps raw text to `{neg, neu, pos, compound}`.
//!
//! `neg`, `neu`, `pos` are proportions in [0, 1]; `compound` is a single
//! polarity summary in [-1, 1]. Consumers classify on `compound` only and
//! never depend on the lexicon internals.

pub mod lexicon;

use convo_types::Result;

use crate::lexicon::{booster, is_negation, Lexicon};

/// Normalization constant for the compound score: `t / sqrt(t^2 + ALPHA)`
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Valence flipped by a negation is also damped
const NEGATION_DAMPING: f64 = 0.8;

/// How many tokens after a negation it still applies to
const NEGATION_WINDOW: usize = 3;

/// Polarity scores for one text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl PolarityScores {
    pub fn zero() -> Self {
        Self {
            neg: 0.0,
            neu: 0.0,
            pos: 0.0,
            compound: 0.0,
        }
    }
}

/// Lexicon-based sentiment scorer.
///
/// Construction parses the embedded lexicon and fails fast on a malformed
/// table; scoring itself is pure and total.
#[derive(Debug, Clone)]
pub struct PolarityScorer {
    lexicon: Lexicon,
}

impl PolarityScorer {
    pub fn new() -> Result<Self> {
        let lexicon = Lexicon::embedded()?;
        log::info!("loaded sentiment lexicon: {} entries", lexicon.len());
        Ok(Self { lexicon })
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Score a text. Empty or unscorable input yields all zeros.
    pub fn score(&self, text: &str) -> PolarityScores {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return PolarityScores::zero();
        }

        let mut total = 0.0;
        let mut pos_mass = 0.0;
        let mut neg_mass = 0.0;
        let mut neutral_count = 0usize;

        let mut current_booster = 1.0;
        let mut negation_active = false;
        let mut tokens_since_negation = 0usize;

        for token in &tokens {
            if is_negation(token) {
                negation_active = true;
                tokens_since_negation = 0;
                continue;
            }

            if let Some(mult) = booster(token) {
                current_booster = mult;
                continue;
            }

            if let Some(base) = self.lexicon.valence(token) {
                let mut valence = base * current_booster;
                if negation_active && tokens_since_negation < NEGATION_WINDOW {
                    valence = -valence * NEGATION_DAMPING;
                }
                total += valence;
                if valence > 0.0 {
                    pos_mass += valence;
                } else {
                    neg_mass += -valence;
                }
                current_booster = 1.0;
            } else {
                neutral_count += 1;
            }

            if negation_active {
                tokens_since_negation += 1;
                if tokens_since_negation >= NEGATION_WINDOW {
                    negation_active = false;
                }
            }
        }

        let compound = (total / (total * total + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);

        let denom = pos_mass + neg_mass + neutral_count as f64;
        if denom == 0.0 {
            return PolarityScores::zero();
        }

        PolarityScores {
            neg: neg_mass / denom,
            neu: neutral_count as f64 / denom,
            pos: pos_mass / denom,
            compound,
        }
    }
}

/// Lowercase word tokens; apostrophes are kept inside words so
/// contractions like "don't" survive as single tokens.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}
