//! Keyword-based input hints
//!
//! Maps keyword substrings in the user's input to a canned hint string.
//! A UX nicety only; nothing downstream depends on a hint being shown.

/// Fixed, ordered table of keyword/hint pairs.
///
/// Matching walks this table top to bottom and the first keyword contained
/// in the input wins: table order, not position in the input, breaks ties.
const SUGGESTION_TABLE: &[(&str, &str)] = &[
    ("hello", "Hi! How can I help you today?"),
    ("hi", "Hello! What would you like to know?"),
    ("how", "Ask me anything - I'm here to help!"),
    ("what", "I can answer questions about various topics"),
    ("tell", "Sure! I can provide information on any topic"),
    ("code", "Need help with coding? I'm here!"),
    ("explain", "I can explain complex topics simply"),
    ("help", "What do you need help with?"),
    ("who", "I'm AlphaChat - your AI assistant!"),
    ("when", "I can help with time-related questions"),
    ("where", "I can provide location information"),
    ("why", "Let me explain the reasoning behind that"),
];

/// Returns the hint for the first table keyword found in the input
///
/// Matching is case-insensitive substring containment. Returns `None`
/// when no keyword matches.
///
/// # Examples
///
/// ```
/// use alphachat::suggestions::suggest;
///
/// assert_eq!(suggest("hello there"), Some("Hi! How can I help you today?"));
/// assert_eq!(suggest("xyzzy"), None);
/// ```
pub fn suggest(input: &str) -> Option<&'static str> {
    let lowered = input.to_lowercase();
    SUGGESTION_TABLE
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, hint)| *hint)
}
