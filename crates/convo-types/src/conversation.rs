use serde::{Deserialize, Serialize};

use crate::message::{Label, Message, Role};

/// An ordered, append-only log of analyzed messages.
///
/// Insertion order is chronological creation order and drives the trend
/// and escalation computations. Messages are never mutated or removed
/// individually; the only destructive operation is a full reset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Clear the log back to empty
    pub fn reset(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn user_messages(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.role == Role::User)
    }

    pub fn user_count(&self) -> usize {
        self.user_messages().count()
    }

    pub fn agent_count(&self) -> usize {
        self.messages.iter().filter(|m| m.role == Role::Agent).count()
    }

    /// Compound scores of user messages, in conversation order
    pub fn user_scores(&self) -> Vec<f64> {
        self.user_messages().map(|m| m.score).collect()
    }

    /// Labels of user messages, in conversation order
    pub fn user_labels(&self) -> Vec<Label> {
        self.user_messages().map(|m| m.label).collect()
    }
}
