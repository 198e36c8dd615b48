use std::borrow::Cow;

use xi_rope::Rope;

/// A byte range `[start, end)` into a document.
///
/// Construction through [`Span::new`] orders its arguments, so `start <= end`
/// always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a span covering `a..b`, swapping the endpoints if reversed.
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Creates an empty span at `at` (a bare cursor).
    pub fn point(at: usize) -> Self {
        Self { start: at, end: at }
    }

    /// Returns the length in bytes.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (a cursor rather than a selection).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true if `offset` falls inside the span.
    pub fn contains(self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }
}

impl From<Span> for std::ops::Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// An immutable read view of document text at the moment of an operation.
///
/// The view is recomputed from the live editor on every invocation and never
/// cached across operations; mutation happens only through the host's
/// replace-range operation.
#[derive(Clone)]
pub struct Document {
    buffer: Rope,
}

impl Document {
    /// Create a document view from raw bytes, ensuring valid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self {
            buffer: Rope::from(text),
        })
    }

    /// Get the full text content.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Get the buffer length in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    /// Slice the buffer to a cow string, clamping the span to document bounds.
    pub fn slice_to_cow(&self, span: Span) -> Cow<'_, str> {
        let doc_len = self.buffer.len();
        let start = span.start.min(doc_len);
        let end = span.end.min(doc_len).max(start);
        self.buffer.slice_to_cow(start..end)
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
        }
    }
}

/// Convert a byte offset to a (line, column) position in the given text.
///
/// Offsets past the end are clamped to the final position.
pub fn byte_to_point(text: &str, byte_offset: usize) -> (usize, usize) {
    let text_bytes = text.as_bytes();
    let offset = byte_offset.min(text_bytes.len());

    let mut line = 0;
    let mut last_newline = 0;

    for (i, &byte) in text_bytes.iter().enumerate().take(offset) {
        if byte == b'\n' {
            line += 1;
            last_newline = i + 1;
        }
    }

    let col = offset - last_newline;
    (line, col)
}

/// Convert a (line, column) position back to a byte offset.
///
/// The column is clamped to the line's length and the line to the last line
/// of the text, so any position maps to a valid offset.
pub fn point_to_byte(text: &str, line: usize, col: usize) -> usize {
    let mut line_start = 0;
    let mut current_line = 0;

    for (i, &byte) in text.as_bytes().iter().enumerate() {
        if current_line == line {
            break;
        }
        if byte == b'\n' {
            current_line += 1;
            line_start = i + 1;
        }
    }

    if current_line < line {
        return text.len();
    }

    let line_end = text[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(text.len());

    (line_start + col).min(line_end)
}
