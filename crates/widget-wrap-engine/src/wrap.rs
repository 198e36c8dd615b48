//! The wrap pipeline: resolve a target span, transform its text, apply one
//! atomic edit.

use thiserror::Error;

use crate::detect::{DetectOptions, detect_enclosing_widget};
use crate::host::{EditorContext, Notifier};
use crate::validate::{SelectionRejected, validate_selection};

/// Why a wrap operation left the document untouched.
///
/// All of these are recoverable-by-user conditions; the message text is what
/// the notification channel surfaces.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WrapError {
    #[error("no active editor")]
    NoActiveEditor,
    #[error(transparent)]
    InvalidSelection(#[from] SelectionRejected),
    #[error(
        "could not detect a widget at the cursor position; place the cursor on a widget such as Container or Text"
    )]
    NoWidgetDetected,
    #[error("could not apply the wrap edit; the document may have changed")]
    EditApplyFailed,
}

/// Wrap the selected or detected widget using `transform`.
///
/// The target span comes from the explicit selection when one exists
/// (validated by [`validate_selection`]), otherwise from
/// [`detect_enclosing_widget`] at the cursor. On success exactly one
/// replacement is applied, a notification carrying `title` is emitted, and a
/// best-effort reformat is requested strictly after the replacement, never
/// before it. Every failure branch reports through `notifier` and performs
/// zero mutations.
pub fn wrap_widget<E, N, F>(
    editor: Option<&mut E>,
    notifier: &mut N,
    transform: F,
    title: &str,
    opts: &DetectOptions,
) -> Result<(), WrapError>
where
    E: EditorContext + ?Sized,
    N: Notifier + ?Sized,
    F: Fn(&str) -> String,
{
    let Some(editor) = editor else {
        return fail(notifier, WrapError::NoActiveEditor);
    };

    let doc = editor.document();
    let selection = editor.selection();

    let (target, original) = if !selection.is_empty() {
        let selected = doc.slice_to_cow(selection).into_owned();
        if let Err(reason) = validate_selection(&selected) {
            return fail(notifier, WrapError::from(reason));
        }
        (selection, selected)
    } else {
        match detect_enclosing_widget(&doc, selection.start, opts) {
            Some(found) => (found.span, found.text),
            None => return fail(notifier, WrapError::NoWidgetDetected),
        }
    };

    let wrapped = transform(&original);

    if editor.replace_range(target, &wrapped).is_err() {
        return fail(notifier, WrapError::EditApplyFailed);
    }

    notifier.info(title);
    // Best-effort cleanup, requested only once the replacement is in; its
    // failure is not a wrap failure.
    let _ = editor.reformat();
    Ok(())
}

fn fail<N: Notifier + ?Sized>(notifier: &mut N, err: WrapError) -> Result<(), WrapError> {
    notifier.error(&err.to_string());
    Err(err)
}
