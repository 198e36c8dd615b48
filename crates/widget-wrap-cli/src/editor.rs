//! Live editor state for the terminal host.
//!
//! Owns the one shared, mutable resource of the whole tool: the document
//! buffer. The engine only ever sees it through fresh [`Document`] views and
//! the single atomic [`EditorContext::replace_range`] operation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use widget_wrap_engine::{
    Document, EditRejected, EditorContext, ReformatFailed, Span, byte_to_point, point_to_byte,
};
use xi_rope::{Rope, delta::Builder};

use crate::format::reindent;

pub struct EditorState {
    path: PathBuf,
    buffer: Rope,
    cursor: usize,
    select_anchor: Option<usize>,
    dirty: bool,
}

impl EditorState {
    pub fn open(path: PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Ok(Self::with_text(path, &content))
    }

    pub fn with_text(path: PathBuf, text: &str) -> Self {
        Self {
            path,
            buffer: Rope::from(text),
            cursor: 0,
            select_anchor: None,
            dirty: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn selection_span(&self) -> Span {
        match self.select_anchor {
            Some(anchor) => Span::new(anchor, self.cursor),
            None => Span::point(self.cursor),
        }
    }

    /// Start selecting from the cursor, or drop an active selection.
    pub fn toggle_selection(&mut self) {
        self.select_anchor = match self.select_anchor {
            Some(_) => None,
            None => Some(self.cursor),
        };
    }

    pub fn clear_selection(&mut self) {
        self.select_anchor = None;
    }

    pub fn move_left(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let text = self.text();
        let mut at = self.cursor - 1;
        while at > 0 && !text.is_char_boundary(at) {
            at -= 1;
        }
        self.cursor = at;
    }

    pub fn move_right(&mut self) {
        let text = self.text();
        if self.cursor >= text.len() {
            return;
        }
        let mut at = self.cursor + 1;
        while at < text.len() && !text.is_char_boundary(at) {
            at += 1;
        }
        self.cursor = at;
    }

    /// Move by whole lines, keeping the column where the line allows.
    pub fn move_vertical(&mut self, lines: isize) {
        let text = self.text();
        let (line, col) = byte_to_point(&text, self.cursor);
        let target = line.saturating_add_signed(lines);
        self.cursor = point_to_byte(&text, target, col);
    }

    pub fn save(&mut self) -> Result<()> {
        std::fs::write(&self.path, self.text())?;
        self.dirty = false;
        Ok(())
    }

    fn apply_replace(&mut self, span: Span, text: &str) {
        let mut builder = Builder::new(self.buffer.len());
        builder.replace(span.start..span.end, Rope::from(text));
        self.buffer = builder.build().apply(&self.buffer);
    }
}

impl EditorContext for EditorState {
    fn document(&self) -> Document {
        // A fresh view per operation; nothing is cached across calls.
        Document::from(self.text().as_str())
    }

    fn selection(&self) -> Span {
        self.selection_span()
    }

    fn replace_range(&mut self, span: Span, text: &str) -> Result<(), EditRejected> {
        let current = self.text();
        if span.end > current.len()
            || !current.is_char_boundary(span.start)
            || !current.is_char_boundary(span.end)
        {
            // Stale or torn range; refuse rather than corrupt the buffer.
            return Err(EditRejected);
        }
        self.apply_replace(span, text);
        self.cursor = span.start + text.len();
        self.select_anchor = None;
        self.dirty = true;
        Ok(())
    }

    fn reformat(&mut self) -> Result<(), ReformatFailed> {
        let current = self.text();
        let formatted = reindent(&current);
        if formatted != current {
            let len = current.len();
            self.apply_replace(Span::new(0, len), &formatted);
            self.cursor = self.cursor.min(formatted.len());
            let text = self.text();
            while self.cursor > 0 && !text.is_char_boundary(self.cursor) {
                self.cursor -= 1;
            }
            self.dirty = true;
        }
        Ok(())
    }
}
