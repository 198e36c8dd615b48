//! The wrap-transformation picker.

use crate::host::{CommandDispatch, MenuItem, MenuPrompt, Notifier, WrapperRegistry};

/// How a menu presentation ended. Only [`MenuOutcome::Dispatched`] has any
/// effect; the other two are normal zero-effect terminations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// A candidate was chosen and its command dispatched.
    Dispatched(String),
    /// The registry had nothing enabled; a warning was surfaced.
    NoCandidates,
    /// The user dismissed the prompt.
    Cancelled,
}

/// Present the currently enabled wrappers and dispatch the chosen one.
///
/// The registry is queried fresh on every call; enablement may have changed
/// since the last presentation, so candidate lists are never cached. Dispatch
/// is fire-and-forget: the command's own outcome is not awaited or
/// interpreted here.
pub fn show_wrap_menu<R, P, H>(registry: &R, prompt: &mut P, host: &mut H) -> MenuOutcome
where
    R: WrapperRegistry + ?Sized,
    P: MenuPrompt + ?Sized,
    H: CommandDispatch + Notifier + ?Sized,
{
    let enabled = registry.list_enabled();
    if enabled.is_empty() {
        host.warn("no wrappers are currently enabled; enable wrappers in the configuration");
        return MenuOutcome::NoCandidates;
    }

    let items: Vec<MenuItem> = enabled
        .iter()
        .map(|wrapper| MenuItem {
            title: wrapper.title.clone(),
            description: format!("Wrap with {}", wrapper.title),
        })
        .collect();

    let Some(chosen) = prompt.pick(&items).and_then(|i| enabled.get(i)) else {
        return MenuOutcome::Cancelled;
    };

    host.execute(&chosen.id);
    MenuOutcome::Dispatched(chosen.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::WrapperInfo;

    struct FixedRegistry {
        wrappers: Vec<WrapperInfo>,
        queries: std::cell::Cell<usize>,
    }

    impl FixedRegistry {
        fn new(titles: &[&str]) -> Self {
            Self {
                wrappers: titles
                    .iter()
                    .map(|t| WrapperInfo {
                        id: format!("widget-wrap.wrapWith{t}"),
                        title: t.to_string(),
                    })
                    .collect(),
                queries: std::cell::Cell::new(0),
            }
        }
    }

    impl WrapperRegistry for FixedRegistry {
        fn list_enabled(&self) -> Vec<WrapperInfo> {
            self.queries.set(self.queries.get() + 1);
            self.wrappers.clone()
        }
    }

    /// Picks a fixed index, recording what was shown.
    struct ScriptedPrompt {
        choice: Option<usize>,
        shown: Vec<MenuItem>,
    }

    impl MenuPrompt for ScriptedPrompt {
        fn pick(&mut self, items: &[MenuItem]) -> Option<usize> {
            self.shown = items.to_vec();
            self.choice
        }
    }

    #[derive(Default)]
    struct RecordingHost {
        executed: Vec<String>,
        warnings: Vec<String>,
    }

    impl CommandDispatch for RecordingHost {
        fn execute(&mut self, id: &str) {
            self.executed.push(id.to_string());
        }
    }

    impl Notifier for RecordingHost {
        fn info(&mut self, _message: &str) {}
        fn warn(&mut self, message: &str) {
            self.warnings.push(message.to_string());
        }
        fn error(&mut self, _message: &str) {}
    }

    #[test]
    fn empty_registry_warns_and_shows_no_picker() {
        let registry = FixedRegistry::new(&[]);
        let mut prompt = ScriptedPrompt {
            choice: Some(0),
            shown: Vec::new(),
        };
        let mut host = RecordingHost::default();

        let outcome = show_wrap_menu(&registry, &mut prompt, &mut host);

        assert_eq!(outcome, MenuOutcome::NoCandidates);
        assert!(prompt.shown.is_empty(), "no picker for an empty registry");
        assert_eq!(host.executed, Vec::<String>::new());
        assert_eq!(host.warnings.len(), 1);
    }

    #[test]
    fn dismissing_the_prompt_is_a_silent_no_op() {
        let registry = FixedRegistry::new(&["Center", "Padding"]);
        let mut prompt = ScriptedPrompt {
            choice: None,
            shown: Vec::new(),
        };
        let mut host = RecordingHost::default();

        let outcome = show_wrap_menu(&registry, &mut prompt, &mut host);

        assert_eq!(outcome, MenuOutcome::Cancelled);
        assert_eq!(host.executed, Vec::<String>::new());
        assert_eq!(host.warnings, Vec::<String>::new());
    }

    #[test]
    fn choosing_a_candidate_dispatches_its_identifier() {
        let registry = FixedRegistry::new(&["Center", "Padding"]);
        let mut prompt = ScriptedPrompt {
            choice: Some(1),
            shown: Vec::new(),
        };
        let mut host = RecordingHost::default();

        let outcome = show_wrap_menu(&registry, &mut prompt, &mut host);

        assert_eq!(
            outcome,
            MenuOutcome::Dispatched("widget-wrap.wrapWithPadding".to_string())
        );
        assert_eq!(host.executed, vec!["widget-wrap.wrapWithPadding".to_string()]);
    }

    #[test]
    fn candidates_are_presented_as_title_and_description() {
        let registry = FixedRegistry::new(&["Center"]);
        let mut prompt = ScriptedPrompt {
            choice: None,
            shown: Vec::new(),
        };
        let mut host = RecordingHost::default();

        show_wrap_menu(&registry, &mut prompt, &mut host);

        assert_eq!(
            prompt.shown,
            vec![MenuItem {
                title: "Center".to_string(),
                description: "Wrap with Center".to_string(),
            }]
        );
    }

    #[test]
    fn registry_is_queried_fresh_on_every_presentation() {
        let registry = FixedRegistry::new(&["Center"]);
        let mut prompt = ScriptedPrompt {
            choice: None,
            shown: Vec::new(),
        };
        let mut host = RecordingHost::default();

        show_wrap_menu(&registry, &mut prompt, &mut host);
        show_wrap_menu(&registry, &mut prompt, &mut host);

        assert_eq!(registry.queries.get(), 2);
    }

    #[test]
    fn out_of_range_choice_is_treated_as_dismissal() {
        let registry = FixedRegistry::new(&["Center"]);
        let mut prompt = ScriptedPrompt {
            choice: Some(7),
            shown: Vec::new(),
        };
        let mut host = RecordingHost::default();

        let outcome = show_wrap_menu(&registry, &mut prompt, &mut host);

        assert_eq!(outcome, MenuOutcome::Cancelled);
        assert_eq!(host.executed, Vec::<String>::new());
    }
}
