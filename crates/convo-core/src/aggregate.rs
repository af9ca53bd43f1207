//! Conversation-level aggregation: overall sentiment, escalation,
//! mood trend, top negative messages.
//!
//! Every function here is total and pure over a snapshot of the log;
//! empty inputs yield defined defaults.

use convo_types::conversation::Conversation;
use convo_types::message::{Label, Message};

/// Arithmetic mean of compound scores plus its label under the shared
/// ±0.05 threshold rule. Empty input → `(0.0, Neutral)`.
pub fn conversation_overall(scores: &[f64]) -> (f64, Label) {
    if scores.is_empty() {
        return (0.0, Label::Neutral);
    }
    let avg = scores.iter().sum::<f64>() / scores.len() as f64;
    (avg, Label::from_compound(avg))
}

/// True as soon as `window` consecutive Negative labels occur. Any
/// non-Negative label resets the run.
pub fn detect_escalation(labels: &[Label], window: usize) -> bool {
    let mut consecutive = 0;
    for label in labels {
        if *label == Label::Negative {
            consecutive += 1;
            if consecutive >= window {
                return true;
            }
        } else {
            consecutive = 0;
        }
    }
    false
}

/// Trailing moving average: entry `i` averages
/// `values[max(0, i - window + 1)..=i]`, so the window shrinks near the
/// start instead of waiting to fill. Output length equals input length.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let mut result = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let start = i.saturating_sub(window - 1);
        let slice = &values[start..=i];
        result.push(slice.iter().sum::<f64>() / slice.len() as f64);
    }
    result
}

/// Up to `top_k` most negative user-role messages, most negative first.
/// The sort is stable, so equal scores keep conversation order.
pub fn top_negative_messages(conversation: &Conversation, top_k: usize) -> Vec<&Message> {
    let mut user_messages: Vec<&Message> = conversation.user_messages().collect();
    user_messages.sort_by(|a, b| a.score.total_cmp(&b.score));
    user_messages.truncate(top_k);
    user_messages
}
