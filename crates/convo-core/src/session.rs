//! Session engine — the synchronous classify-and-append cycle.
//!
//! One engine owns one conversation. Each `submit` analyzes the user
//! text, appends the user message, synthesizes and appends the agent
//! reply, and reports the current escalation state before returning.
//! Single-writer by construction; the derived views are pure reads.

use convo_scorer::PolarityScorer;
use convo_types::config::AnalyzerConfig;
use convo_types::conversation::Conversation;
use convo_types::message::{Label, Message};
use convo_types::Result;

use crate::aggregate::{conversation_overall, detect_escalation, moving_average};
use crate::classify::classify;
use crate::intent::detect_intent;
use crate::reply::{RandomReplyPicker, ReplyPicker};
use crate::report::generate_report;
use crate::sentence::worst_sentence;
use crate::urgency::urgency_score;

/// Result of one submit cycle
#[derive(Debug, Clone)]
pub struct Turn {
    pub user: Message,
    pub agent: Message,
    /// Escalation state of the whole conversation after this turn
    pub escalated: bool,
}

pub struct SessionEngine {
    scorer: PolarityScorer,
    config: AnalyzerConfig,
    replies: Box<dyn ReplyPicker>,
    conversation: Conversation,
}

impl SessionEngine {
    /// Build an engine with the production reply picker. Fails fast when
    /// the config is invalid or the sentiment lexicon cannot be loaded.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        Self::with_reply_picker(config, Box::new(RandomReplyPicker))
    }

    pub fn with_reply_picker(
        config: AnalyzerConfig,
        replies: Box<dyn ReplyPicker>,
    ) -> Result<Self> {
        config.validate()?;
        let scorer = PolarityScorer::new()?;
        Ok(Self {
            scorer,
            config,
            replies,
            conversation: Conversation::new(),
        })
    }

    /// Run one full cycle: analyze the user text, append the user message,
    /// synthesize and append the agent reply.
    pub fn submit(&mut self, text: &str) -> Turn {
        let classification = classify(&self.scorer, text);
        let user = Message::user(
            text,
            classification.compound,
            classification.label,
            detect_intent(text),
            round2(urgency_score(text)),
            worst_sentence(&self.scorer, text).sentence,
        );
        self.conversation.push(user.clone());

        let reply_text = self.replies.pick(classification.label);
        let reply_classification = classify(&self.scorer, &reply_text);
        let agent = Message::agent(
            reply_text,
            reply_classification.compound,
            reply_classification.label,
        );
        self.conversation.push(agent.clone());

        let escalated = self.escalated();
        if escalated {
            log::warn!(
                "escalation detected: {}+ consecutive negative user messages",
                self.config.escalation_window
            );
        }

        Turn {
            user,
            agent,
            escalated,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Clear the conversation back to empty
    pub fn reset(&mut self) {
        self.conversation.reset();
        log::info!("conversation reset");
    }

    /// Average compound and label over user messages
    pub fn overall(&self) -> (f64, Label) {
        conversation_overall(&self.conversation.user_scores())
    }

    /// Whether the configured run of consecutive negative user messages
    /// has occurred anywhere in the log
    pub fn escalated(&self) -> bool {
        detect_escalation(
            &self.conversation.user_labels(),
            self.config.escalation_window,
        )
    }

    /// Smoothed user sentiment trend, one value per user message
    pub fn trend(&self) -> Vec<f64> {
        moving_average(&self.conversation.user_scores(), self.config.trend_window)
    }

    pub fn report(&self) -> String {
        generate_report(&self.conversation, self.config.top_k)
    }
}

/// Urgency is stored on the message rounded to two decimals
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
