//! View coordination
//!
//! Three mutually exclusive views plus an orthogonal focused phase.
//! Activating a phase from the illustration switches to the visualization
//! and focuses it; nothing else couples focus and view.

use std::str::FromStr;
use vs_model::{ParseKeyError, PhaseId};

/// Active view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Editor,
    Visualization,
    Illustration,
}

impl View {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            View::Editor => "Editor",
            View::Visualization => "Visualize",
            View::Illustration => "Illustrate",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for View {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "editor" | "edit" => Ok(View::Editor),
            "visualization" | "visualize" | "viz" => Ok(View::Visualization),
            "illustration" | "illustrate" | "flow" => Ok(View::Illustration),
            _ => Err(ParseKeyError {
                kind: "view",
                value: s.to_string(),
            }),
        }
    }
}

/// What a phase activation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Illustration → Visualization with focus set
    FocusedAndSwitched,
    /// Focus set within the visualization
    Focused,
    /// Already-focused phase activated again; focus cleared
    Unfocused,
    /// Editor view: no focus change
    Ignored,
}

/// Tracks the active view and the focused phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCoordinator {
    view: View,
    focused: Option<PhaseId>,
}

impl ViewCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn view(&self) -> View {
        self.view
    }

    #[inline]
    #[must_use]
    pub fn focused(&self) -> Option<PhaseId> {
        self.focused
    }

    /// Switch views; focus is left as is
    pub fn switch_to(&mut self, view: View) {
        if view != self.view {
            tracing::debug!(from = %self.view, to = %view, "view switched");
            self.view = view;
        }
    }

    /// A phase was activated in the current view
    pub fn activate_phase(&mut self, id: PhaseId) -> Activation {
        match self.view {
            View::Illustration => {
                self.focused = Some(id);
                self.view = View::Visualization;
                tracing::debug!(phase_id = %id, "focused from illustration");
                Activation::FocusedAndSwitched
            }
            View::Visualization if self.focused == Some(id) => {
                self.focused = None;
                Activation::Unfocused
            }
            View::Visualization => {
                self.focused = Some(id);
                Activation::Focused
            }
            View::Editor => Activation::Ignored,
        }
    }

    pub fn clear_focus(&mut self) {
        self.focused = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_editor_without_focus() {
        let vc = ViewCoordinator::new();
        assert_eq!(vc.view(), View::Editor);
        assert_eq!(vc.focused(), None);
    }

    #[test]
    fn illustration_activation_switches_and_focuses() {
        let mut vc = ViewCoordinator::new();
        vc.switch_to(View::Illustration);
        assert_eq!(vc.activate_phase(PhaseId(3)), Activation::FocusedAndSwitched);
        assert_eq!(vc.view(), View::Visualization);
        assert_eq!(vc.focused(), Some(PhaseId(3)));
    }

    #[test]
    fn visualization_activation_toggles() {
        let mut vc = ViewCoordinator::new();
        vc.switch_to(View::Visualization);
        assert_eq!(vc.activate_phase(PhaseId(2)), Activation::Focused);
        assert_eq!(vc.activate_phase(PhaseId(5)), Activation::Focused);
        assert_eq!(vc.focused(), Some(PhaseId(5)));
        assert_eq!(vc.activate_phase(PhaseId(5)), Activation::Unfocused);
        assert_eq!(vc.focused(), None);
        assert_eq!(vc.view(), View::Visualization);
    }

    #[test]
    fn editor_activation_ignored() {
        let mut vc = ViewCoordinator::new();
        assert_eq!(vc.activate_phase(PhaseId(1)), Activation::Ignored);
        assert_eq!(vc.focused(), None);
    }

    #[test]
    fn switching_views_keeps_focus() {
        let mut vc = ViewCoordinator::new();
        vc.switch_to(View::Illustration);
        vc.activate_phase(PhaseId(4));
        vc.switch_to(View::Illustration);
        assert_eq!(vc.focused(), Some(PhaseId(4)));
        vc.switch_to(View::Editor);
        assert_eq!(vc.focused(), Some(PhaseId(4)));
        vc.clear_focus();
        assert_eq!(vc.focused(), None);
    }

    #[test]
    fn view_parses_aliases() {
        assert_eq!("viz".parse(), Ok(View::Visualization));
        assert_eq!("Illustrate".parse(), Ok(View::Illustration));
        assert!("table".parse::<View>().is_err());
    }
}
