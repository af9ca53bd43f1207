//! Sentence-level breakdown and worst-sentence selection.

use convo_scorer::PolarityScorer;
use convo_types::message::Label;

use crate::classify::classify;

/// Sentiment for one sentence of a longer text
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScore {
    pub sentence: String,
    pub compound: f64,
    pub label: Label,
}

impl SentenceScore {
    /// Placeholder for texts with no sentences
    fn empty() -> Self {
        Self {
            sentence: String::new(),
            compound: 0.0,
            label: Label::Neutral,
        }
    }
}

/// Split text into sentences: a sentence ends at `.`, `!` or `?` followed
/// by whitespace. Heuristic splitter; abbreviations and decimals are not
/// special-cased.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev_is_terminator = false;

    let mut chars = trimmed.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() && prev_is_terminator {
            let fragment = &trimmed[start..i];
            if !fragment.is_empty() {
                sentences.push(fragment);
            }
            // skip the rest of the whitespace run
            let mut next_start = i + c.len_utf8();
            while let Some(&(j, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                chars.next();
                next_start = j + next.len_utf8();
            }
            start = next_start;
            prev_is_terminator = false;
        } else {
            prev_is_terminator = matches!(c, '.' | '!' | '?');
        }
    }

    if start < trimmed.len() {
        sentences.push(&trimmed[start..]);
    }
    sentences
}

/// Score each sentence independently through the message classifier, so
/// sentence- and message-level logic cannot drift apart.
pub fn sentence_scores(scorer: &PolarityScorer, text: &str) -> Vec<SentenceScore> {
    split_sentences(text)
        .into_iter()
        .map(|sentence| {
            let classification = classify(scorer, sentence);
            SentenceScore {
                sentence: sentence.to_string(),
                compound: classification.compound,
                label: classification.label,
            }
        })
        .collect()
}

/// The sentence with the minimum compound score; ties go to the earliest
/// occurrence. Texts with no sentences yield an empty Neutral result.
pub fn worst_sentence(scorer: &PolarityScorer, text: &str) -> SentenceScore {
    let mut worst: Option<SentenceScore> = None;
    for scored in sentence_scores(scorer, text) {
        match &worst {
            Some(current) if scored.compound >= current.compound => {}
            _ => worst = Some(scored),
        }
    }
    worst.unwrap_or_else(SentenceScore::empty)
}
