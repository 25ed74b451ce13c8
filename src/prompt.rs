//! Prompt construction for the remote model
//!
//! Pure functions that turn recent conversation history plus the new user
//! message into a single text prompt. No network or state access.

use crate::history::{History, Turn};

/// Builds the chat prompt from recent history and the new user message
///
/// Takes at most the last `max_turns` turns (fewer if the history is
/// shorter), renders each as a `Human:`/`AI:` line pair in order, and
/// appends the trailing line for the new message. Deterministic for
/// identical inputs.
///
/// # Arguments
///
/// * `history` - Conversation history (possibly empty)
/// * `user_input` - The new user message (non-empty text)
/// * `max_turns` - Window size: number of most-recent turns to include
///
/// # Examples
///
/// ```
/// use alphachat::history::History;
/// use alphachat::prompt::build_prompt;
///
/// let prompt = build_prompt(&History::new(), "Hello", 6);
/// assert_eq!(prompt, "Human: Hello\nAI (answer clearly and completely):");
/// ```
pub fn build_prompt(history: &History, user_input: &str, max_turns: usize) -> String {
    let mut prompt = render_transcript(history.recent(max_turns));
    prompt.push_str(&format!(
        "Human: {}\nAI (answer clearly and completely):",
        user_input
    ));
    prompt
}

/// Renders turns as `Human:`/`AI:` line pairs, one pair per turn
///
/// Shared by the prompt builder and the summarizer so both present the
/// transcript to the model in the same shape.
pub(crate) fn render_transcript(turns: &[Turn]) -> String {
    let mut out = String::new();
    for turn in turns {
        out.push_str(&format!("Human: {}\nAI: {}\n", turn.user, turn.ai));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Turn;

    fn history_of(n: usize) -> History {
        let mut history = History::new();
        for i in 0..n {
            history.push(Turn::with_time(
                format!("question {}", i),
                format!("answer {}", i),
                "2024-01-01 10:00:00",
            ));
        }
        history
    }

    #[test]
    fn test_empty_history_yields_trailing_line_only() {
        let prompt = build_prompt(&History::new(), "Hello", 6);
        assert_eq!(prompt, "Human: Hello\nAI (answer clearly and completely):");
    }

    #[test]
    fn test_single_turn_rendered_before_trailing_line() {
        let mut history = History::new();
        history.push(Turn::with_time("Hi", "Hello!", "2024-01-01 10:00:00"));

        let prompt = build_prompt(&history, "How are you?", 6);
        assert_eq!(
            prompt,
            "Human: Hi\nAI: Hello!\nHuman: How are you?\nAI (answer clearly and completely):"
        );
    }

    #[test]
    fn test_window_limits_rendered_turns() {
        let history = history_of(10);
        let prompt = build_prompt(&history, "next", 3);

        // Only the last 3 turns appear
        assert!(!prompt.contains("question 6"));
        assert!(prompt.contains("question 7"));
        assert!(prompt.contains("question 8"));
        assert!(prompt.contains("question 9"));
    }

    #[test]
    fn test_rendered_turn_count_is_min_of_len_and_window() {
        for (len, window) in [(0usize, 6usize), (3, 6), (6, 6), (10, 6), (10, 20)] {
            let history = history_of(len);
            let prompt = build_prompt(&history, "next", window);
            let rendered = prompt.matches("\nAI: ").count();
            assert_eq!(
                rendered,
                len.min(window),
                "len={} window={}",
                len,
                window
            );
        }
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let history = history_of(4);
        let a = build_prompt(&history, "same input", 6);
        let b = build_prompt(&history, "same input", 6);
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_transcript_shape() {
        let history = history_of(2);
        let transcript = render_transcript(history.turns());
        assert_eq!(
            transcript,
            "Human: question 0\nAI: answer 0\nHuman: question 1\nAI: answer 1\n"
        );
    }

    #[test]
    fn test_render_transcript_empty() {
        assert_eq!(render_transcript(&[]), "");
    }
}
