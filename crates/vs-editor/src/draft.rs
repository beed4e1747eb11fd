//! Local draft buffers
//!
//! A [`TextDraft`] is the uncommitted half of a draft/committed pair. The
//! committed value lives in the bound record; the draft only exists while
//! the field is in edit mode and is never reported upward until the owning
//! editor commits it.

/// Edit state of a single text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TextDraft {
    /// Not in edit mode
    #[default]
    Idle,
    /// In edit mode with the current draft text
    Editing(String),
}

impl TextDraft {
    /// Enter edit mode seeded with `initial`
    ///
    /// Re-entering while already editing keeps the existing draft.
    pub fn begin(&mut self, initial: impl Into<String>) {
        if let Self::Idle = self {
            *self = Self::Editing(initial.into());
        }
    }

    #[inline]
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Draft text while editing
    #[inline]
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Editing(text) => Some(text),
            Self::Idle => None,
        }
    }

    /// Replace the draft text; ignored (returns false) when idle
    pub fn set(&mut self, text: impl Into<String>) -> bool {
        match self {
            Self::Editing(current) => {
                *current = text.into();
                true
            }
            Self::Idle => false,
        }
    }

    /// Leave edit mode, yielding the draft
    pub fn take(&mut self) -> Option<String> {
        match std::mem::take(self) {
            Self::Editing(text) => Some(text),
            Self::Idle => None,
        }
    }

    /// Empty the draft but stay in edit mode
    pub fn clear_text(&mut self) {
        if let Self::Editing(text) = self {
            text.clear();
        }
    }

    /// Leave edit mode, dropping the draft
    pub fn discard(&mut self) {
        *self = Self::Idle;
    }
}
