//! Error types for document operations

use vs_model::PhaseId;

/// Errors raised by the document controller
///
/// All of these are recovered locally: the operation is refused and the
/// document is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocumentError {
    /// Attempted deletion of the sole remaining phase
    #[error("cannot delete phase {id}: a value stream must keep at least one phase")]
    LastPhase { id: PhaseId },

    /// No phase with this id
    #[error("phase not found: {0}")]
    PhaseNotFound(PhaseId),

    /// Document has no phases
    #[error("value stream has no phases")]
    Empty,

    /// Two phases share an id
    #[error("duplicate phase id: {0}")]
    DuplicatePhaseId(PhaseId),

    /// Largest id is already `u64::MAX`, so `max + 1` does not exist
    #[error("cannot add phase: no id left above {max}")]
    IdSpaceExhausted { max: PhaseId },
}

impl DocumentError {
    /// Whether this is the last-phase refusal
    #[inline]
    #[must_use]
    pub fn is_last_phase(&self) -> bool {
        matches!(self, Self::LastPhase { .. })
    }
}
