//! Lossless JSON transcript encoder
//!
//! Serializes the full ordered turn sequence as a pretty-printed JSON
//! array. Decoding the output yields a history equal in all three fields
//! and order to the original.

use crate::error::Result;
use crate::history::{History, Turn};

/// Serializes the history as a pretty-printed JSON array
pub fn to_json(history: &History) -> Result<String> {
    Ok(serde_json::to_string_pretty(history.turns())?)
}

/// Reconstructs a history from JSON produced by [`to_json`]
pub fn from_json(data: &str) -> Result<History> {
    let turns: Vec<Turn> = serde_json::from_str(data)?;
    Ok(History::from(turns))
}
