/*!
 * Core engine for widget-wrap: cursor-aware wrapping of call-expression
 * widget constructs (`Container(...)`, `Text('hi')`) in source text.
 *
 * The engine is pure orchestration over text plus a set of host traits:
 *
 * - **`document`**: immutable read view over an `xi_rope::Rope` buffer with
 *   byte-offset [`Span`]s as the coordinate type
 * - **`detect`**: the boundary detector: backward scan to the nearest
 *   uppercase-started head identifier, forward balanced-delimiter scan that
 *   ignores string literals and comments
 * - **`validate`**: the cheap wrappable-construct check for explicit
 *   selections
 * - **`wrap`**: the end-to-end pipeline: one atomic replace, then one
 *   best-effort reformat, with zero mutations on any failure branch
 * - **`menu`**: the transformation picker, dispatching by identifier through
 *   the external registry
 * - **`host`**: the traits the surrounding tool implements (editor context,
 *   notification channel, wrapper registry, command dispatch, prompt)
 *
 * Nothing here outlives a single invocation: document views, matches and
 * candidate lists are recomputed per call, because both the document and the
 * registry's enablement state may change between calls.
 */

pub mod detect;
pub mod document;
pub mod host;
pub mod menu;
pub mod validate;
pub mod wrap;

// Re-export key types for easier usage
pub use detect::{DEFAULT_MAX_LOOKBEHIND, DetectOptions, WidgetMatch, detect_enclosing_widget};
pub use document::{Document, Span, byte_to_point, point_to_byte};
pub use host::{
    CommandDispatch, EditRejected, EditorContext, MenuItem, MenuPrompt, Notifier, ReformatFailed,
    WrapperInfo, WrapperRegistry,
};
pub use menu::{MenuOutcome, show_wrap_menu};
pub use validate::{SelectionRejected, validate_selection};
pub use wrap::{WrapError, wrap_widget};
