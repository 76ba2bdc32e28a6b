use crate::{Mark, Outcome};
use thiserror::Error;

/// Errors that can occur while playing or searching tic-tac-toe
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TicTacToeError {
    #[error("Invalid cell index: {0}")]
    InvalidCell(usize),

    #[error("Cell {0} is already occupied")]
    CellOccupied(usize),

    #[error("No legal moves available")]
    NoLegalMoves,

    #[error("Game is already over: {0}")]
    GameOver(Outcome),

    #[error("It is not {0}'s turn")]
    NotYourTurn(Mark),

    #[error("Invalid board: {0}")]
    InvalidBoard(String),
}

/// Convenience Result type for tic-tac-toe operations
pub type Result<T> = std::result::Result<T, TicTacToeError>;
