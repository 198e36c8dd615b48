//! The wrapper catalog: the transformation registry the engine's menu and
//! dispatch interfaces talk to.
//!
//! Enablement lives in the [`Catalog`] value, never in module state; callers
//! build or update a catalog from configuration and pass it by reference, so
//! every menu presentation sees the current enablement.

use std::collections::HashSet;

use widget_wrap_engine::{
    DetectOptions, EditorContext, Notifier, WrapperInfo, WrapperRegistry, wrap_widget,
};

mod builtin;

pub use builtin::builtin_wrappers;

/// One wrap transformation: its command identifier, display title, and the
/// pure text template it applies.
#[derive(Debug, Clone, Copy)]
pub struct WrapperSpec {
    pub id: &'static str,
    pub title: &'static str,
    pub template: fn(&str) -> String,
}

/// The set of known wrappers plus their enablement state.
pub struct Catalog {
    specs: Vec<WrapperSpec>,
    disabled: HashSet<String>,
}

impl Catalog {
    /// The built-in catalog with the given wrapper ids disabled.
    pub fn new(disabled: impl IntoIterator<Item = String>) -> Self {
        Self {
            specs: builtin_wrappers().to_vec(),
            disabled: disabled.into_iter().collect(),
        }
    }

    /// Enable or disable one wrapper by id.
    pub fn set_enabled(&mut self, id: &str, enabled: bool) {
        if enabled {
            self.disabled.remove(id);
        } else {
            self.disabled.insert(id.to_string());
        }
    }

    /// Look up a wrapper by command identifier. Resolution ignores
    /// enablement: a directly-invoked command works even while hidden from
    /// the menu.
    pub fn resolve(&self, id: &str) -> Option<&WrapperSpec> {
        self.specs.iter().find(|spec| spec.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl WrapperRegistry for Catalog {
    fn list_enabled(&self) -> Vec<WrapperInfo> {
        self.specs
            .iter()
            .filter(|spec| !self.disabled.contains(spec.id))
            .map(|spec| WrapperInfo {
                id: spec.id.to_string(),
                title: spec.title.to_string(),
            })
            .collect()
    }
}

/// The identifier-to-handler table behind command dispatch: resolve `id` in the
/// catalog and run the wrap pipeline with its template. Unknown ids are
/// surfaced as a warning, not an error.
pub fn dispatch_wrap<E, N>(
    catalog: &Catalog,
    id: &str,
    editor: Option<&mut E>,
    notifier: &mut N,
    opts: &DetectOptions,
) where
    E: EditorContext + ?Sized,
    N: Notifier + ?Sized,
{
    match catalog.resolve(id) {
        Some(spec) => {
            // Failures are already reported through the notifier.
            let _ = wrap_widget(editor, notifier, spec.template, spec.title, opts);
        }
        None => notifier.warn(&format!("unknown wrap command: {id}")),
    }
}
