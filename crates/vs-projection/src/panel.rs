//! Detail panel state for the visualization

use vs_model::{Document, Phase, PhaseId};

/// Which phase the detail panel shows and whether it is open
///
/// Activating a phase always opens the panel on it, whether the activation
/// focused or unfocused the phase. Closing keeps the selection so the
/// panel can be reopened on the same phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailPanel {
    selected: Option<PhaseId>,
    open: bool,
}

impl DetailPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<PhaseId> {
        self.selected
    }

    /// A phase was clicked in the visualization
    pub fn open(&mut self, id: PhaseId) {
        self.selected = Some(id);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Follow a focus change made elsewhere, e.g. an illustration click
    ///
    /// Any focused phase opens the panel on it, including one that was
    /// already focused; losing focus closes it.
    pub fn follow_focus(&mut self, previous: Option<PhaseId>, current: Option<PhaseId>) {
        match current {
            Some(id) => self.open(id),
            None if previous.is_some() => self.close(),
            None => {}
        }
    }

    /// The phase to show, if the panel is open and the phase still exists
    #[must_use]
    pub fn phase<'d>(&self, document: &'d Document) -> Option<&'d Phase> {
        if !self.open {
            return None;
        }
        self.selected.and_then(|id| document.phase(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vs_test_utils::document_with_ids;

    #[test]
    fn starts_closed() {
        let panel = DetailPanel::new();
        assert!(!panel.is_open());
        assert_eq!(panel.phase(&document_with_ids(&[1])), None);
    }

    #[test]
    fn open_then_close_keeps_selection() {
        let mut panel = DetailPanel::new();
        panel.open(PhaseId(2));
        assert!(panel.is_open());
        panel.close();
        assert!(!panel.is_open());
        assert_eq!(panel.selected(), Some(PhaseId(2)));
    }

    #[test]
    fn shows_nothing_for_deleted_phase() {
        let mut panel = DetailPanel::new();
        panel.open(PhaseId(9));
        assert_eq!(panel.phase(&document_with_ids(&[1, 2])), None);
    }

    #[test]
    fn follows_external_focus() {
        let mut panel = DetailPanel::new();
        panel.follow_focus(None, Some(PhaseId(3)));
        assert_eq!(panel.selected(), Some(PhaseId(3)));
        assert!(panel.is_open());

        panel.close();
        panel.follow_focus(Some(PhaseId(3)), Some(PhaseId(3)));
        assert!(panel.is_open());
        assert_eq!(panel.selected(), Some(PhaseId(3)));

        panel.open(PhaseId(3));
        panel.follow_focus(Some(PhaseId(3)), None);
        assert!(!panel.is_open());
    }
}
