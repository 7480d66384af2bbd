use thiserror::Error;

/// Errors raised by board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A tile was requested on a board with no empty cell.
    #[error("cannot spawn a tile: the board is full")]
    BoardFull,
}
