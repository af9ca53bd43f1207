//! Agent reply selection.
//!
//! Replies come from three fixed pools keyed by the user's sentiment
//! label. Selection is behind a trait so the production random picker
//! can be swapped for a deterministic one in tests.

use rand::seq::SliceRandom;

use convo_types::message::Label;

const NEGATIVE_REPLIES: &[&str] = &[
    "I'm really sorry you're facing this issue. I'll help you right away.",
    "I understand this must be frustrating. Let me look into it for you.",
    "I apologise for the inconvenience. I'll try to resolve it quickly.",
];

const NEUTRAL_REPLIES: &[&str] = &[
    "Thanks for the update. Could you share a few more details?",
    "Okay, I understand. Can you provide the order number?",
    "Got it. I'll check this and get back to you.",
];

const POSITIVE_REPLIES: &[&str] = &[
    "Happy to hear that! Let me know if you need anything else.",
    "Great! Glad it worked for you.",
    "Awesome! I'm here if you need anything further.",
];

fn pool(label: Label) -> &'static [&'static str] {
    match label {
        Label::Negative => NEGATIVE_REPLIES,
        Label::Neutral => NEUTRAL_REPLIES,
        Label::Positive => POSITIVE_REPLIES,
    }
}

/// Strategy for choosing an agent reply to a user message
pub trait ReplyPicker {
    fn pick(&self, label: Label) -> String;
}

/// Production picker: uniform random choice over the pool
#[derive(Debug, Default)]
pub struct RandomReplyPicker;

impl ReplyPicker for RandomReplyPicker {
    fn pick(&self, label: Label) -> String {
        let replies = pool(label);
        // pools are non-empty constants, choose cannot return None
        replies
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(replies[0])
            .to_string()
    }
}

/// Deterministic picker: always the first entry of the pool
#[derive(Debug, Default)]
pub struct FixedReplyPicker;

impl ReplyPicker for FixedReplyPicker {
    fn pick(&self, label: Label) -> String {
        pool(label)[0].to_string()
    }
}
