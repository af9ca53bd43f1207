//! Conversation analytics engine.
//!
//! Turns raw message text into scored, labeled, aggregated signals:
//! per-message sentiment, intent, urgency, worst sentence, plus the
//! conversation-level escalation flag, mood trend, and text report.
//! All operations are pure and total; the only state is the owned
//! conversation log inside [`session::SessionEngine`].

pub mod aggregate;
pub mod classify;
pub mod intent;
pub mod reply;
pub mod report;
pub mod sentence;
pub mod session;
pub mod urgency;

#[cfg(test)]
mod tests;

pub use classify::{classify, Classification};
pub use session::{SessionEngine, Turn};
