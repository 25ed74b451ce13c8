//! Paginated PDF transcript encoder
//!
//! For each turn, in order, emits `[<time>] You: <user>` and `AI: <ai>`
//! lines using a built-in Helvetica font. The encoder is lossy: characters
//! outside printable ASCII are replaced with `?` rather than failing the
//! export. Long lines wrap and pages break automatically.

use crate::error::{AlphachatError, Result};
use crate::history::History;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 15.0;
const LINE_HEIGHT_MM: f32 = 6.0;
const FONT_SIZE_PT: f32 = 11.0;

/// Characters per wrapped line at the chosen font size and margins
const MAX_LINE_CHARS: usize = 95;

/// Serializes the history as PDF bytes
///
/// # Errors
///
/// Returns an encoding error if the built-in font cannot be loaded or the
/// document cannot be serialized. Callers treat this as a non-fatal
/// warning; the JSON and CSV encoders are unaffected.
pub fn to_pdf(history: &History) -> Result<Vec<u8>> {
    let (doc, page, layer) = PdfDocument::new(
        "Chat History",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "transcript",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AlphachatError::Encoding(format!("Failed to load PDF font: {}", e)))?;

    let mut writer = PageWriter {
        doc: &doc,
        font: &font,
        layer: doc.get_page(page).get_layer(layer),
        y_mm: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    for turn in history.turns() {
        writer.write_text(&format!("[{}] You: {}", turn.time, turn.user));
        writer.write_text(&format!("AI: {}", turn.ai));
        writer.skip_gap();
    }
    drop(writer);

    doc.save_to_bytes()
        .map_err(|e| AlphachatError::Encoding(format!("Failed to serialize PDF: {}", e)).into())
}

/// Cursor over the current page, breaking to a new page when full
struct PageWriter<'a> {
    doc: &'a PdfDocumentReference,
    font: &'a IndirectFontRef,
    layer: PdfLayerReference,
    y_mm: f32,
}

impl PageWriter<'_> {
    /// Writes text, splitting on newlines and wrapping long lines
    fn write_text(&mut self, text: &str) {
        for raw_line in text.split('\n') {
            let sanitized = sanitize(raw_line);
            for chunk in wrap_line(&sanitized) {
                self.emit_line(chunk);
            }
        }
    }

    /// Leaves a small vertical gap between turns
    fn skip_gap(&mut self) {
        self.y_mm -= LINE_HEIGHT_MM / 4.0;
    }

    fn emit_line(&mut self, line: &str) {
        if self.y_mm < MARGIN_MM {
            let (page, layer) = self.doc.add_page(
                Mm(PAGE_WIDTH_MM),
                Mm(PAGE_HEIGHT_MM),
                "transcript",
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y_mm = PAGE_HEIGHT_MM - MARGIN_MM;
        }

        self.layer
            .use_text(line, FONT_SIZE_PT, Mm(MARGIN_MM), Mm(self.y_mm), self.font);
        self.y_mm -= LINE_HEIGHT_MM;
    }
}

/// Replaces characters outside printable ASCII with `?`
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if (' '..='~').contains(&c) { c } else { '?' })
        .collect()
}

/// Splits a sanitized line into chunks of at most [`MAX_LINE_CHARS`]
///
/// Input is ASCII after [`sanitize`], so byte offsets are char offsets.
fn wrap_line(line: &str) -> Vec<&str> {
    if line.is_empty() {
        return vec![""];
    }

    let mut chunks = Vec::new();
    let mut rest = line;
    while rest.len() > MAX_LINE_CHARS {
        let (head, tail) = rest.split_at(MAX_LINE_CHARS);
        chunks.push(head);
        rest = tail;
    }
    chunks.push(rest);
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Turn;

    #[test]
    fn test_output_is_pdf() {
        let mut history = History::new();
        history.push(Turn::with_time("hello", "hi there", "2024-01-01 10:00:00"));

        let bytes = to_pdf(&history).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_history_still_produces_document() {
        let bytes = to_pdf(&History::new()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_history_spans_pages() {
        let mut history = History::new();
        for i in 0..200 {
            history.push(Turn::with_time(
                format!("question number {}", i),
                format!("answer number {}", i),
                "2024-01-01 10:00:00",
            ));
        }

        // 400+ lines at ~47 lines per page needs several pages; the
        // encoder must not fail or drop content on the way.
        let bytes = to_pdf(&history).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 10_000);
    }

    #[test]
    fn test_sanitize_replaces_non_ascii() {
        assert_eq!(sanitize("héllo ☃"), "h?llo ?");
        assert_eq!(sanitize("plain text"), "plain text");
        assert_eq!(sanitize("tab\there"), "tab?here");
    }

    #[test]
    fn test_non_ascii_content_is_encoded_lossily() {
        let mut history = History::new();
        history.push(Turn::with_time("héllo", "smiley ☺", "2024-01-01 10:00:00"));

        // Lossy, not fatal.
        assert!(to_pdf(&history).is_ok());
    }

    #[test]
    fn test_wrap_line_short() {
        assert_eq!(wrap_line("short"), vec!["short"]);
        assert_eq!(wrap_line(""), vec![""]);
    }

    #[test]
    fn test_wrap_line_long() {
        let long = "x".repeat(MAX_LINE_CHARS * 2 + 10);
        let chunks = wrap_line(&long);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), MAX_LINE_CHARS);
        assert_eq!(chunks[1].len(), MAX_LINE_CHARS);
        assert_eq!(chunks[2].len(), 10);
    }
}
