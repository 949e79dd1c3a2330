use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    #[error("board size must be positive, got {0}")]
    InvalidSize(usize),

    #[error("({x}, {y}) is outside a {size}x{size} board")]
    OutOfBounds { x: usize, y: usize, size: usize },

    #[error("unexpected character {0:?}")]
    UnknownGlyph(char),

    /// Row `row` has `len` cells on a board `size` rows tall.
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("grid has no rows")]
    EmptyGrid,
}

pub type Result<T> = std::result::Result<T, LifeError>;
