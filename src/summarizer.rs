//! History compaction via remote summarization
//!
//! Collapses the older part of a conversation into a single synthetic
//! summary turn so the prompt window keeps useful context without growing
//! without bound. One remote call at most; the input history is never
//! modified in place.

use crate::error::{AlphachatError, Result};
use crate::history::{History, Turn};
use crate::prompt::render_transcript;
use crate::providers::Provider;

/// Instruction wrapped around the rendered transcript
const SUMMARY_INSTRUCTION: &str =
    "Summarize the following conversation into a short context summary:\n\n";

/// Extra headroom over `keep_last` below which summarizing is skipped
///
/// Independent of the session's auto-summarize trigger.
const GUARD_SLACK: usize = 2;

/// Collapses old history into one synthetic summary turn
///
/// Returns the history unchanged when it holds `keep_last + 2` turns or
/// fewer. Otherwise the prefix before the last `keep_last` turns is
/// rendered as a transcript, summarized with a single provider call, and
/// the result is a new history of exactly `keep_last + 1` turns: the
/// synthetic summary turn first, then the last `keep_last` turns verbatim.
///
/// # Arguments
///
/// * `history` - The conversation history to compact
/// * `keep_last` - Number of most-recent turns to carry over verbatim
/// * `provider` - Text-generation capability for the summary call
/// * `model` - Model identifier for the summary call
///
/// # Errors
///
/// Returns a provider error if the remote call fails or produces no
/// usable text. The input history is left untouched in that case.
pub async fn summarize_history(
    history: &History,
    keep_last: usize,
    provider: &dyn Provider,
    model: &str,
) -> Result<History> {
    if history.len() <= keep_last + GUARD_SLACK {
        return Ok(history.clone());
    }

    let split = history.len() - keep_last;
    let older = &history.turns()[..split];

    let mut request = String::from(SUMMARY_INSTRUCTION);
    request.push_str(&render_transcript(older));
    request.push_str("\nSummary:");

    tracing::debug!(
        turns = older.len(),
        keep_last,
        "Requesting history summary"
    );

    let summary = provider.generate(model, &request).await?;
    let summary = summary.trim();
    if summary.is_empty() {
        return Err(
            AlphachatError::Provider("Summarization returned no text".to_string()).into(),
        );
    }

    let mut compacted = History::new();
    compacted.push(Turn::summary(summary));
    for turn in &history.turns()[split..] {
        compacted.push(turn.clone());
    }

    tracing::info!(
        before = history.len(),
        after = compacted.len(),
        "Compacted history"
    );

    Ok(compacted)
}
