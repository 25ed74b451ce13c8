//! Conversation history for a chat session
//!
//! The history is an ordered, append-only sequence of turns held in memory
//! for the lifetime of the session. Nothing is persisted across restarts.
//! The only non-append mutation is wholesale replacement by the session
//! after a successful summarization, which collapses a prefix of old turns
//! into a single synthetic summary turn.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Sentinel placed in the `user` field of a synthetic summary turn
pub const SUMMARY_MARKER: &str = "[summary]";

/// Timestamp format used for turn timestamps (local time)
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One exchange in the conversation: a user message and the AI reply
///
/// Turns are immutable once appended to a [`History`]. There is no
/// identifier beyond the turn's position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// The user message text (or [`SUMMARY_MARKER`] for synthetic turns)
    pub user: String,
    /// The AI reply text
    pub ai: String,
    /// Timestamp string in `YYYY-MM-DD HH:MM:SS` local time
    pub time: String,
}

impl Turn {
    /// Creates a turn stamped with the current local time
    ///
    /// # Examples
    ///
    /// ```
    /// use alphachat::history::Turn;
    ///
    /// let turn = Turn::new("Hello", "Hi there!");
    /// assert_eq!(turn.user, "Hello");
    /// assert_eq!(turn.ai, "Hi there!");
    /// assert!(!turn.time.is_empty());
    /// ```
    pub fn new(user: impl Into<String>, ai: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ai: ai.into(),
            time: current_timestamp(),
        }
    }

    /// Creates a turn with an explicit timestamp
    ///
    /// Used when reconstructing a history from an exported transcript.
    pub fn with_time(
        user: impl Into<String>,
        ai: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            ai: ai.into(),
            time: time.into(),
        }
    }

    /// Creates a synthetic summary turn for compacted history
    ///
    /// The `user` field carries the [`SUMMARY_MARKER`] sentinel and the
    /// `ai` field holds the generated summary text.
    ///
    /// # Examples
    ///
    /// ```
    /// use alphachat::history::{Turn, SUMMARY_MARKER};
    ///
    /// let turn = Turn::summary("We discussed Rust lifetimes.");
    /// assert_eq!(turn.user, SUMMARY_MARKER);
    /// assert!(turn.is_summary());
    /// ```
    pub fn summary(text: impl Into<String>) -> Self {
        Self {
            user: SUMMARY_MARKER.to_string(),
            ai: text.into(),
            time: current_timestamp(),
        }
    }

    /// Returns true if this is a synthetic summary turn
    pub fn is_summary(&self) -> bool {
        self.user == SUMMARY_MARKER
    }
}

/// Ordered, append-only sequence of [`Turn`]s for one session
///
/// Insertion order is chronological order; the sequence is never
/// reordered. Export encoders rely on this ordering being preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    turns: Vec<Turn>,
}

impl History {
    /// Creates an empty history
    ///
    /// # Examples
    ///
    /// ```
    /// use alphachat::history::History;
    ///
    /// let history = History::new();
    /// assert!(history.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn to the end of the history
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Returns the number of turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Returns true if the history has no turns
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Returns all turns in insertion order
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Returns at most the last `n` turns, fewer if the history is shorter
    ///
    /// # Examples
    ///
    /// ```
    /// use alphachat::history::{History, Turn};
    ///
    /// let mut history = History::new();
    /// history.push(Turn::new("a", "1"));
    /// history.push(Turn::new("b", "2"));
    /// history.push(Turn::new("c", "3"));
    /// assert_eq!(history.recent(2).len(), 2);
    /// assert_eq!(history.recent(2)[0].user, "b");
    /// assert_eq!(history.recent(10).len(), 3);
    /// ```
    pub fn recent(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }

    /// Removes all turns
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

impl From<Vec<Turn>> for History {
    fn from(turns: Vec<Turn>) -> Self {
        Self { turns }
    }
}

/// Current local time formatted for turn timestamps
pub fn current_timestamp() -> String {
    Local::now().format(TIME_FORMAT).to_string()
}
