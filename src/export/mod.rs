//! Transcript export
//!
//! Three independent, order-preserving encoders over a [`History`]:
//!
//! - `json`: lossless structured document, round-trips to an equal history
//! - `csv`: one header row plus one row per turn, RFC 4180 escaping
//! - `pdf`: paginated document, lossy outside its supported character set
//!
//! A PDF failure is surfaced by callers as a non-fatal warning and leaves
//! the other two export paths unaffected.

pub mod csv;
pub mod json;
pub mod pdf;

use crate::error::Result;
use crate::history::History;

use std::fmt;
use std::path::{Path, PathBuf};

/// Export format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Lossless structured document (`chat_history.json`)
    Json,
    /// Tabular document (`chat_history.csv`)
    Csv,
    /// Paginated document (`chat_history.pdf`), lossy
    Pdf,
}

impl ExportFormat {
    /// All formats, in the order they are presented to the user
    pub const ALL: [ExportFormat; 3] = [Self::Json, Self::Csv, Self::Pdf];

    /// Parse an export format from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use alphachat::export::ExportFormat;
    ///
    /// assert_eq!(ExportFormat::parse_str("json").unwrap(), ExportFormat::Json);
    /// assert!(ExportFormat::parse_str("xml").is_err());
    /// ```
    pub fn parse_str(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "pdf" => Ok(Self::Pdf),
            other => Err(format!("Unknown export format: {}", other)),
        }
    }

    /// Fixed artifact name for this format
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Json => "chat_history.json",
            Self::Csv => "chat_history.csv",
            Self::Pdf => "chat_history.pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Csv => write!(f, "CSV"),
            Self::Pdf => write!(f, "PDF"),
        }
    }
}

/// Encodes the history in the given format
///
/// # Errors
///
/// Returns an encoding error if the selected encoder fails. Encoders are
/// independent; a failure here says nothing about the other formats.
pub fn encode(history: &History, format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Json => json::to_json(history).map(String::into_bytes),
        ExportFormat::Csv => csv::to_csv(history),
        ExportFormat::Pdf => pdf::to_pdf(history),
    }
}

/// Encodes the history and writes it under its fixed artifact name
///
/// # Arguments
///
/// * `history` - The conversation to export
/// * `format` - Which encoder to run
/// * `dir` - Directory the artifact is written into
///
/// # Returns
///
/// The path of the written artifact
pub fn export_to_dir(history: &History, format: ExportFormat, dir: &Path) -> Result<PathBuf> {
    let bytes = encode(history, format)?;
    let path = dir.join(format.file_name());
    std::fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), turns = history.len(), "Wrote transcript export");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Turn;

    #[test]
    fn test_parse_str() {
        assert_eq!(ExportFormat::parse_str("json").unwrap(), ExportFormat::Json);
        assert_eq!(ExportFormat::parse_str("CSV").unwrap(), ExportFormat::Csv);
        assert_eq!(ExportFormat::parse_str("Pdf").unwrap(), ExportFormat::Pdf);
        assert!(ExportFormat::parse_str("xml").is_err());
        assert!(ExportFormat::parse_str("").is_err());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ExportFormat::Json.file_name(), "chat_history.json");
        assert_eq!(ExportFormat::Csv.file_name(), "chat_history.csv");
        assert_eq!(ExportFormat::Pdf.file_name(), "chat_history.pdf");
    }

    #[test]
    fn test_display() {
        assert_eq!(ExportFormat::Json.to_string(), "JSON");
        assert_eq!(ExportFormat::Csv.to_string(), "CSV");
        assert_eq!(ExportFormat::Pdf.to_string(), "PDF");
    }

    #[test]
    fn test_encode_dispatches_all_formats() {
        let mut history = History::new();
        history.push(Turn::with_time("hello", "hi", "2024-01-01 10:00:00"));

        for format in ExportFormat::ALL {
            let bytes = encode(&history, format).unwrap();
            assert!(!bytes.is_empty(), "{} produced no bytes", format);
        }
    }
}
