//! Valence lexicon backing the polarity scorer.
//!
//! The lexicon ships embedded in the binary and is parsed once at scorer
//! construction. A malformed entry is a fatal error at startup, never a
//! per-call failure.

use std::collections::HashMap;

use convo_types::{ConvoError, Result};

const EMBEDDED_LEXICON: &str = include_str!("../data/lexicon.tsv");

/// Booster words scale the valence of the next sentiment word.
/// Multipliers above 1.0 intensify, below 1.0 dampen.
const BOOSTERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.25),
    ("extremely", 1.5),
    ("incredibly", 1.45),
    ("absolutely", 1.4),
    ("totally", 1.3),
    ("completely", 1.35),
    ("so", 1.2),
    ("quite", 1.1),
    ("somewhat", 0.8),
    ("slightly", 0.7),
    ("barely", 0.6),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "nothing", "nowhere",
    "dont", "don't", "doesnt", "doesn't", "didnt", "didn't",
    "cant", "can't", "couldnt", "couldn't", "wont", "won't",
    "wouldnt", "wouldn't", "shouldnt", "shouldn't", "isnt", "isn't",
    "arent", "aren't", "wasnt", "wasn't", "werent", "weren't",
    "havent", "haven't", "hasnt", "hasn't", "hadnt", "hadn't",
];

/// Word-to-valence table, keys stored lowercase
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: HashMap<String, f64>,
}

impl Lexicon {
    /// Parse the lexicon embedded at compile time
    pub fn embedded() -> Result<Self> {
        Self::parse(EMBEDDED_LEXICON)
    }

    /// Parse TSV data: `word<TAB>valence` per line, `#` comments and blank
    /// lines skipped. Valences must lie in [-4.0, 4.0].
    pub fn parse(data: &str) -> Result<Self> {
        let mut valences = HashMap::new();
        for (lineno, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, raw_valence) = line.split_once('\t').ok_or_else(|| {
                ConvoError::Lexicon(format!("line {}: missing tab separator", lineno + 1))
            })?;
            let valence: f64 = raw_valence.trim().parse().map_err(|_| {
                ConvoError::Lexicon(format!(
                    "line {}: invalid valence {:?}",
                    lineno + 1,
                    raw_valence
                ))
            })?;
            if !(-4.0..=4.0).contains(&valence) {
                return Err(ConvoError::Lexicon(format!(
                    "line {}: valence {} out of [-4, 4]",
                    lineno + 1,
                    valence
                )));
            }
            valences.insert(word.trim().to_lowercase(), valence);
        }
        if valences.is_empty() {
            return Err(ConvoError::Lexicon("lexicon has no entries".to_string()));
        }
        Ok(Self { valences })
    }

    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(&word.to_lowercase()).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.valences.contains_key(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}

/// Booster multiplier for a word, if it is one
pub fn booster(word: &str) -> Option<f64> {
    BOOSTERS
        .iter()
        .find(|(w, _)| *w == word)
        .map(|(_, mult)| *mult)
}

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}
