//! Message processing orchestration
//!
//! [`ChatSession`] owns the conversation history and the provider, and is
//! the only place that mutates the history: either a submission succeeds
//! and exactly one turn is appended (together with any compaction that
//! preceded it), or the history is left exactly as it was.

use crate::config::ChatConfig;
use crate::error::Result;
use crate::history::{History, Turn};
use crate::prompt::build_prompt;
use crate::providers::Provider;
use crate::summarizer::summarize_history;

use std::fmt;
use std::time::{Duration, Instant};

/// History length must exceed `max_turns * AUTO_SUMMARIZE_FACTOR` before
/// auto-summarization kicks in. Independent of the summarizer's own guard.
const AUTO_SUMMARIZE_FACTOR: usize = 3;

/// Observable processing state of a session
///
/// Transitions: Idle → Summarizing (conditional) → AwaitingReply → Idle.
/// A failed submission returns to Idle without mutating history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No submission in flight
    Idle,
    /// Compacting old history before building the prompt
    Summarizing,
    /// Waiting on the remote model reply
    AwaitingReply,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Summarizing => write!(f, "summarizing"),
            Self::AwaitingReply => write!(f, "awaiting reply"),
        }
    }
}

/// Outcome of a successful submission
#[derive(Debug, Clone)]
pub struct Reply {
    /// The AI reply text (trimmed)
    pub text: String,
    /// Wall-clock duration of the remote reply call
    pub latency: Duration,
    /// True if old history was compacted during this submission
    pub summarized: bool,
}

/// One chat session: history, provider, and processing state
///
/// The session is single-threaded and processes one submission at a time;
/// no mutation happens outside [`ChatSession::process_message`] and
/// [`ChatSession::clear`].
pub struct ChatSession {
    provider: Box<dyn Provider>,
    history: History,
    state: SessionState,
}

impl ChatSession {
    /// Creates a session with an empty history
    pub fn new(provider: Box<dyn Provider>) -> Self {
        Self::with_history(provider, History::new())
    }

    /// Creates a session over an existing history
    pub fn with_history(provider: Box<dyn Provider>, history: History) -> Self {
        Self {
            provider,
            history,
            state: SessionState::Idle,
        }
    }

    /// The conversation history so far
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current processing state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Short name of the backing provider
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Drops all history
    pub fn clear(&mut self) {
        self.history.clear();
        tracing::info!("Chat history cleared");
    }

    /// Processes one user submission end to end
    ///
    /// Empty or whitespace-only input is a no-op and returns `Ok(None)`.
    /// Otherwise: old history is compacted first when auto-summarize is on
    /// and the history has grown past `max_turns * 3` turns, the prompt is
    /// built from the (possibly compacted) history, and the provider is
    /// invoked once. On success the compaction and exactly one new turn
    /// are committed together; on any failure the stored history is
    /// untouched and the error propagates to the caller. There is no
    /// retry.
    ///
    /// # Arguments
    ///
    /// * `user_input` - Raw user text
    /// * `settings` - Session settings, read at submission time
    pub async fn process_message(
        &mut self,
        user_input: &str,
        settings: &ChatConfig,
    ) -> Result<Option<Reply>> {
        let input = user_input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // All mutations are staged on a copy and committed only after the
        // reply arrives.
        let mut staged = self.history.clone();
        let mut summarized = false;

        if settings.auto_summarize && staged.len() > settings.max_turns * AUTO_SUMMARIZE_FACTOR {
            self.state = SessionState::Summarizing;
            tracing::info!(
                turns = staged.len(),
                keep_last = settings.max_turns,
                "History past threshold, summarizing"
            );

            match summarize_history(
                &staged,
                settings.max_turns,
                self.provider.as_ref(),
                &settings.model,
            )
            .await
            {
                Ok(compacted) => {
                    staged = compacted;
                    summarized = true;
                }
                Err(e) => {
                    self.state = SessionState::Idle;
                    return Err(e);
                }
            }
        }

        let prompt = build_prompt(&staged, input, settings.max_turns);

        self.state = SessionState::AwaitingReply;
        let started = Instant::now();
        let reply_text = match self.provider.generate(&settings.model, &prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                self.state = SessionState::Idle;
                return Err(e);
            }
        };
        let latency = started.elapsed();

        staged.push(Turn::new(input, reply_text.as_str()));
        self.history = staged;
        self.state = SessionState::Idle;

        tracing::info!(
            turns = self.history.len(),
            latency_ms = latency.as_millis() as u64,
            "Reply appended"
        );

        Ok(Some(Reply {
            text: reply_text,
            latency,
            summarized,
        }))
    }
}
