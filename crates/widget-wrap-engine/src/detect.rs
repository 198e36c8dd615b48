//! Boundary detection for widget constructs.
//!
//! A widget construct is a call-expression-shaped fragment: an identifier
//! starting with an uppercase letter, followed by a balanced-delimiter
//! argument list (`Container(...)`, `Text('hi')`). Detection walks backward
//! from the cursor to the nearest such head, then forward across the
//! balanced argument list, and refuses to guess on malformed input.

use crate::document::{Document, Span};

/// Default bound on the backward head-identifier scan, in bytes.
pub const DEFAULT_MAX_LOOKBEHIND: usize = 64 * 1024;

/// Tunables for construct detection.
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Upper bound, in bytes, on how far behind the cursor the head
    /// identifier may start.
    pub max_lookbehind: usize,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            max_lookbehind: DEFAULT_MAX_LOOKBEHIND,
        }
    }
}

/// A widget construct located in a document: the span from the start of the
/// head identifier through the matching closing delimiter, plus the exact
/// source substring over that span.
///
/// Never persisted; the document may change between invocations, so a match
/// is recomputed every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetMatch {
    pub span: Span,
    pub text: String,
}

/// Find the full widget construct enclosing `position`.
///
/// Scans backward from `position` (inclusive) to the nearest identifier run
/// that starts with an uppercase letter and is followed, skipping only
/// whitespace, by `(`. From that opening parenthesis the argument list is
/// scanned forward with a delimiter stack covering `()`, `[]` and `{}`;
/// delimiters inside string literals and comments never count. Returns
/// `None` when no head is found within `opts.max_lookbehind` bytes, or when
/// the argument list is unbalanced or mismatched before end of document.
pub fn detect_enclosing_widget(
    doc: &Document,
    position: usize,
    opts: &DetectOptions,
) -> Option<WidgetMatch> {
    let text = doc.text();
    let head = find_head_backward(&text, position, opts.max_lookbehind)?;
    let close = find_matching_close(&text, head.open)?;

    // The closing delimiter is ASCII, so +1 lands on a char boundary.
    let span = Span::new(head.ident_start, close + 1);
    let matched = text[span.start..span.end].to_string();
    Some(WidgetMatch {
        span,
        text: matched,
    })
}

struct Head {
    ident_start: usize,
    open: usize,
}

fn find_head_backward(text: &str, position: usize, max_lookbehind: usize) -> Option<Head> {
    // Clamp to the nearest char boundary at or before the cursor.
    let mut at = position.min(text.len());
    while at > 0 && !text.is_char_boundary(at) {
        at -= 1;
    }

    // End of the char under the cursor, so the scan includes it.
    let scan_end = match text[at..].chars().next() {
        Some(c) => at + c.len_utf8(),
        None => at,
    };

    for (i, ch) in text[..scan_end].char_indices().rev() {
        if position.saturating_sub(i) > max_lookbehind {
            break;
        }
        if !ch.is_uppercase() {
            continue;
        }
        // A head starts an identifier run: the previous char must not extend it.
        if text[..i].chars().next_back().is_some_and(is_ident_char) {
            continue;
        }
        let after_ident = skip_while(text, i, is_ident_char);
        let after_ws = skip_while(text, after_ident, char::is_whitespace);
        if text[after_ws..].starts_with('(') {
            return Some(Head {
                ident_start: i,
                open: after_ws,
            });
        }
    }

    None
}

/// Scan forward from the opening parenthesis at `open` to the closer that
/// restores delimiter depth to zero. `None` on mismatched or unterminated
/// input; a guessed boundary is worse than no boundary.
fn find_matching_close(text: &str, open: usize) -> Option<usize> {
    let mut stack: Vec<char> = Vec::new();
    let mut chars = text[open..].char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        match ch {
            '(' => stack.push(')'),
            '[' => stack.push(']'),
            '{' => stack.push('}'),
            ')' | ']' | '}' => {
                if stack.pop() != Some(ch) {
                    return None;
                }
                if stack.is_empty() {
                    return Some(open + i);
                }
            }
            '\'' | '"' => skip_string(&mut chars, ch)?,
            '/' => match chars.peek() {
                Some(&(_, '/')) => skip_line_comment(&mut chars),
                Some(&(_, '*')) => skip_block_comment(&mut chars)?,
                _ => {}
            },
            _ => {}
        }
    }

    // End of document with delimiters still open.
    None
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn skip_while(text: &str, from: usize, pred: impl Fn(char) -> bool) -> usize {
    let mut at = from;
    for c in text[from..].chars() {
        if !pred(c) {
            break;
        }
        at += c.len_utf8();
    }
    at
}

/// Consume a string literal opened with `quote`, honoring backslash escapes.
/// `None` when the literal never terminates.
fn skip_string<I>(chars: &mut I, quote: char) -> Option<()>
where
    I: Iterator<Item = (usize, char)>,
{
    while let Some((_, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next()?;
            }
            c if c == quote => return Some(()),
            _ => {}
        }
    }
    None
}

fn skip_line_comment<I>(chars: &mut I)
where
    I: Iterator<Item = (usize, char)>,
{
    for (_, ch) in chars {
        if ch == '\n' {
            break;
        }
    }
}

/// Consume a block comment. Block comments nest in the target language, so a
/// depth counter is kept. `None` when the comment never terminates.
fn skip_block_comment<I>(chars: &mut std::iter::Peekable<I>) -> Option<()>
where
    I: Iterator<Item = (usize, char)>,
{
    // The '*' that opened this comment.
    chars.next();
    let mut depth = 1usize;

    while let Some((_, ch)) = chars.next() {
        match ch {
            '/' if matches!(chars.peek(), Some(&(_, '*'))) => {
                chars.next();
                depth += 1;
            }
            '*' if matches!(chars.peek(), Some(&(_, '/'))) => {
                chars.next();
                depth -= 1;
                if depth == 0 {
                    return Some(());
                }
            }
            _ => {}
        }
    }
    None
}
