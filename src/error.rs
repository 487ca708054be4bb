use thiserror::Error;

pub type Result<T> = std::result::Result<T, AmidaError>;

/// Errors raised by board generation and path resolution.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmidaError {
    /// Fewer names than a playable board needs. The caller keeps its prior board.
    #[error("at least {min} participants are required (got {got})")]
    InvalidParticipantCount { got: usize, min: usize },

    /// A start line outside the board. The UI must never produce this.
    #[error("start line {index} is out of range for a board with {count} lines")]
    IndexOutOfRange { index: usize, count: usize },

    /// An explicit rung layout that breaks the board invariants.
    #[error("invalid rung ({index1}, {index2}) at y={y} for a board with {count} lines")]
    InvalidRung {
        index1: usize,
        index2: usize,
        y: f64,
        count: usize,
    },
}

impl AmidaError {
    /// True for errors that indicate a caller bug rather than bad user input.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}
