/// Errors raised by [`Board`](crate::board::Board) construction and accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({x}, {y}) is outside a {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("a {width}x{height} board has more cells than fit in memory")]
    TooLarge { width: usize, height: usize },
}

/// Errors raised when configuring a [`MatchEngine`](crate::engine::MatchEngine).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("minimum match length must be >= 2, got {0}")]
    InvalidMinLength(usize),
}
