use serde::{Deserialize, Serialize};

use crate::error::ConvoError;

pub const MIN_ESCALATION_WINDOW: usize = 2;
pub const MAX_ESCALATION_WINDOW: usize = 6;

/// Analyzer configuration.
///
/// The escalation window is the one operator-facing tunable: the number of
/// consecutive Negative user messages that flags an escalation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub escalation_window: usize,
    /// Trailing window for the sentiment trend moving average
    pub trend_window: usize,
    /// How many top negative messages to surface in reports
    pub top_k: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            escalation_window: 3,
            trend_window: 3,
            top_k: 3,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), ConvoError> {
        if self.escalation_window < MIN_ESCALATION_WINDOW
            || self.escalation_window > MAX_ESCALATION_WINDOW
        {
            return Err(ConvoError::Config(format!(
                "escalation window must be in [{}, {}], got {}",
                MIN_ESCALATION_WINDOW, MAX_ESCALATION_WINDOW, self.escalation_window
            )));
        }
        Ok(())
    }
}
