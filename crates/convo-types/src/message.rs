use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Agent,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Agent => write!(f, "agent"),
        }
    }
}

/// Discrete sentiment classification derived from a compound score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    Positive,
    Neutral,
    Negative,
}

impl Label {
    /// Threshold rule shared by the message classifier, the sentence
    /// classifier, and the conversation aggregator: ±0.05 around zero.
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.05 {
            Label::Positive
        } else if compound <= -0.05 {
            Label::Negative
        } else {
            Label::Neutral
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Label::Positive => write!(f, "Positive"),
            Label::Neutral => write!(f, "Neutral"),
            Label::Negative => write!(f, "Negative"),
        }
    }
}

/// Coarse category of what a user message is about.
/// `Agent` is reserved for agent-role messages, which skip intent detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Billing,
    Refund,
    Delivery,
    Technical,
    Account,
    Other,
    Agent,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Billing => write!(f, "billing"),
            Intent::Refund => write!(f, "refund"),
            Intent::Delivery => write!(f, "delivery"),
            Intent::Technical => write!(f, "technical"),
            Intent::Account => write!(f, "account"),
            Intent::Other => write!(f, "other"),
            Intent::Agent => write!(f, "agent"),
        }
    }
}

/// A single analyzed message in a conversation. Immutable once created.
///
/// All analysis fields are always present; agent-role messages carry the
/// defaults (`Intent::Agent`, zero urgency, empty worst sentence) instead
/// of omitting the fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    /// Creation time, RFC 3339 at second precision
    pub timestamp: String,
    pub role: Role,
    pub text: String,
    /// Compound polarity in [-1.0, 1.0]
    pub score: f64,
    pub label: Label,
    pub intent: Intent,
    /// Heuristic time-pressure score in [0.0, 1.0]; 0.0 for agent messages
    pub urgency: f64,
    /// Most negative sentence in `text`; empty for agent messages
    pub worst_sentence: String,
}

impl Message {
    pub fn user(
        text: impl Into<String>,
        score: f64,
        label: Label,
        intent: Intent,
        urgency: f64,
        worst_sentence: impl Into<String>,
    ) -> Self {
        Self {
            id: new_message_id(),
            timestamp: now_timestamp(),
            role: Role::User,
            text: text.into(),
            score,
            label,
            intent,
            urgency,
            worst_sentence: worst_sentence.into(),
        }
    }

    pub fn agent(text: impl Into<String>, score: f64, label: Label) -> Self {
        Self {
            id: new_message_id(),
            timestamp: now_timestamp(),
            role: Role::Agent,
            text: text.into(),
            score,
            label,
            intent: Intent::Agent,
            urgency: 0.0,
            worst_sentence: String::new(),
        }
    }
}

/// Short opaque id, the first 8 hex chars of a v4 UUID
fn new_message_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}

fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
