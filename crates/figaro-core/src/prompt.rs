//! Per-turn prompt assembly.

use chrono::{DateTime, Local};

/// Everything the reasoning service needs for one turn.
///
/// Built fresh per turn and discarded afterwards; the orchestrator keeps no
/// conversational state between turns.
#[derive(Clone, Debug)]
pub struct PromptContext {
    /// Raw user utterance.
    pub utterance: String,
    /// Wall-clock time the turn started.
    pub timestamp: DateTime<Local>,
    /// Standing behavioral directives for the assistant.
    pub directives: String,
}

impl PromptContext {
    /// Create a context stamped with the current local time.
    #[must_use]
    pub fn new(utterance: impl Into<String>, directives: impl Into<String>) -> Self {
        Self {
            utterance: utterance.into(),
            timestamp: Local::now(),
            directives: directives.into(),
        }
    }

    /// The user-turn text sent to the reasoning service.
    ///
    /// Prefixes the utterance with the turn timestamp so the model can
    /// resolve relative dates like "tomorrow at noon".
    #[must_use]
    pub fn user_text(&self) -> String {
        format!(
            "The current date and time is {}.\n\n{}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.utterance
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_text_contains_timestamp_and_utterance() {
        let ctx = PromptContext::new("book a meeting tomorrow", "be brief");
        let text = ctx.user_text();
        assert!(text.starts_with("The current date and time is "));
        assert!(text.ends_with("book a meeting tomorrow"));
        let stamp = ctx.timestamp.format("%Y-%m-%d").to_string();
        assert!(text.contains(&stamp));
    }

    #[test]
    fn directives_are_kept_verbatim() {
        let ctx = PromptContext::new("hi", "You must always act.");
        assert_eq!(ctx.directives, "You must always act.");
    }
}
