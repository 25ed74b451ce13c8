//! Tabular transcript encoder
//!
//! One header row (`timestamp,user,ai`) followed by one data row per turn
//! in order. Quoting and escaping follow RFC 4180 via the `csv` crate, so
//! any standards-compliant reader reconstructs the original text exactly.

use crate::error::{AlphachatError, Result};
use crate::history::History;

use csv::Writer;

/// Serializes the history as CSV bytes
pub fn to_csv(history: &History) -> Result<Vec<u8>> {
    let mut writer = Writer::from_writer(Vec::new());

    writer.write_record(["timestamp", "user", "ai"])?;
    for turn in history.turns() {
        writer.write_record([turn.time.as_str(), turn.user.as_str(), turn.ai.as_str()])?;
    }

    writer
        .into_inner()
        .map_err(|e| AlphachatError::Encoding(format!("Failed to flush CSV buffer: {}", e)).into())
}
