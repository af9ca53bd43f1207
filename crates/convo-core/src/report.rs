//! Text summary report.

use convo_types::conversation::Conversation;

use crate::aggregate::{conversation_overall, top_negative_messages};

/// Render a fixed-structure multi-line summary of the conversation,
/// listing up to `top_k` negative user messages. Overall sentiment is
/// computed over user-role scores only.
pub fn generate_report(conversation: &Conversation, top_k: usize) -> String {
    let user_scores = conversation.user_scores();
    let (avg, overall_label) = conversation_overall(&user_scores);

    let mut lines = Vec::new();
    lines.push("Conversation Summary".to_string());
    lines.push("====================".to_string());
    lines.push(format!("Total messages: {}", conversation.len()));
    lines.push(format!("User messages: {}", conversation.user_count()));
    lines.push(format!(
        "Overall sentiment: {} (average compound = {:.3})",
        overall_label, avg
    ));
    lines.push(String::new());

    let worst = top_negative_messages(conversation, top_k);
    if worst.is_empty() {
        lines.push("No user messages to highlight.".to_string());
    } else {
        lines.push("Top negative user messages:".to_string());
        for (i, message) in worst.iter().enumerate() {
            lines.push(format!(
                "{}. \"{}\" (score = {:.3})",
                i + 1,
                message.text,
                message.score
            ));
        }
    }

    lines.join("\n")
}
