//! Interfaces to the host environment.
//!
//! The engine never owns a live editor, a wrapper catalog, or a user
//! interface; it reaches all of them through the traits here. Implementations
//! re-read live state on every call: nothing behind these traits may be
//! cached across operations, since enablement and document content can change
//! between invocations.

use thiserror::Error;

use crate::document::{Document, Span};

/// The host rejected an atomic replace (stale range, concurrent edit).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("the host rejected the replacement")]
pub struct EditRejected;

/// The best-effort document reformat did not run.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("the document was not reformatted")]
pub struct ReformatFailed;

/// The document/editor context: current text, current selection, and the
/// single mutation the engine is allowed to request.
pub trait EditorContext {
    /// Read view of the document at this moment.
    fn document(&self) -> Document;

    /// Current selection; an empty span is a bare cursor.
    fn selection(&self) -> Span;

    /// Atomically replace `span` with `text`: either the full substitution is
    /// applied or the document is left unchanged.
    fn replace_range(&mut self, span: Span, text: &str) -> Result<(), EditRejected>;

    /// Best-effort whole-document reformat. Callers treat failure as
    /// non-fatal.
    fn reformat(&mut self) -> Result<(), ReformatFailed>;
}

/// The user notification channel.
pub trait Notifier {
    fn info(&mut self, message: &str);
    fn warn(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// A wrap command as the registry advertises it: identifier plus display
/// title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperInfo {
    pub id: String,
    pub title: String,
}

/// The external transformation registry.
pub trait WrapperRegistry {
    /// Currently enabled wrap commands, in presentation order. Queried fresh
    /// on every menu presentation; enablement may change between calls.
    fn list_enabled(&self) -> Vec<WrapperInfo>;
}

/// Command dispatch by identifier. The engine only ever invokes commands
/// through this one narrow lookup; it never inlines transformation logic for
/// menu-selected items.
pub trait CommandDispatch {
    /// Invoke the wrap command bound to `id`. Fire-and-forget: the outcome is
    /// neither awaited nor interpreted by the caller.
    fn execute(&mut self, id: &str);
}

/// One entry in the wrap picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub title: String,
    pub description: String,
}

/// The user-choice prompt; the second suspension point of the system.
pub trait MenuPrompt {
    /// Present the candidates and wait for a single choice. `None` means the
    /// user dismissed the prompt.
    fn pick(&mut self, items: &[MenuItem]) -> Option<usize>;
}
